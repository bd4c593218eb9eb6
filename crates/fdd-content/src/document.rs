//! The resolved, fully enriched representation of one content file.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_yaml::Mapping;

use crate::frontmatter;
use crate::markdown;
use crate::metadata::Metadata;

/// A processed document. Read-only; built fresh on every resolve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Identifier, the file name without extension.
    pub slug: String,
    /// Same as `metadata.title`, surfaced for convenience.
    pub title: String,
    /// Body rendered to HTML.
    pub content: String,
    /// Markdown body, front-matter removed.
    pub raw_content: String,
    pub metadata: Metadata,
    /// Front-matter exactly as authored.
    pub frontmatter: Mapping,
}

impl Document {
    /// Build a document from raw file contents.
    ///
    /// Pure: the only outside input is `now`, used when front-matter has no
    /// `lastChanneled`.
    pub fn from_source(slug: &str, source: &str, now: DateTime<Utc>) -> Self {
        let parsed = frontmatter::parse(source);
        let metadata = Metadata::synthesize(slug, &parsed.frontmatter, &parsed.body, now);
        let content = markdown::render_html(&parsed.body);

        Self {
            slug: slug.to_string(),
            title: metadata.title.clone(),
            content,
            raw_content: parsed.body,
            metadata,
            frontmatter: parsed.frontmatter.into_mapping(),
        }
    }
}
