//! Content resolver: slug in, enriched [`Document`] out.
//!
//! The resolver is the boundary between the filesystem and page rendering.
//! Nothing past it sees an error: a missing or unreadable file is logged and
//! reported as `None`, and directory failures yield an empty listing. It holds
//! no state beyond its configuration, so one instance can serve concurrent
//! callers and every call reads the source fresh.

use std::path::{Path, PathBuf};

use chrono::Utc;
use fdd_core::util::files::{self, FindOptions};
use fdd_core::{ConfigProvider, Error, Result};

use crate::document::Document;
use crate::search::{self, ScoredDocument};
use crate::tables;

/// Content type key passed to [`ConfigProvider::content_path`].
pub const DOCS_CONTENT_TYPE: &str = "docs";

/// Default source file extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// Resolves slugs to documents from a flat directory of markdown files.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    docs_dir: PathBuf,
    extension: String,
}

impl ContentResolver {
    /// Create a resolver over `docs_dir`, reading `<slug>.md` files.
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Create a resolver from configuration, using its `"docs"` content path.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(config.content_path(DOCS_CONTENT_TYPE)?))
    }

    /// Use a different source extension (leading dot optional).
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path of the source file for `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] for slugs that are empty, hidden, or
    /// could escape the docs directory.
    pub fn source_path(&self, slug: &str) -> Result<PathBuf> {
        validate_slug(slug)?;
        Ok(self.docs_dir.join(format!("{slug}.{}", self.extension)))
    }

    /// Resolve a slug, returning `None` (after logging why) on any failure.
    pub async fn resolve(&self, slug: &str) -> Option<Document> {
        match self.try_resolve(slug).await {
            Ok(doc) => Some(doc),
            Err(e) if e.is_not_found() => {
                log::warn!("Document '{slug}' not found: {e}");
                None
            }
            Err(e) => {
                log::error!("Error processing document '{slug}': {e}");
                None
            }
        }
    }

    /// Resolve a slug, surfacing the failure cause.
    pub async fn try_resolve(&self, slug: &str) -> Result<Document> {
        let path = self.source_path(slug)?;
        let source = files::read_file(&path).await?;
        log::debug!("Processing {} ({} bytes)", path.display(), source.len());
        Ok(Document::from_source(slug, &source, Utc::now()))
    }

    /// Slugs of every source file in the docs directory, sorted.
    ///
    /// Returns an empty list if the directory cannot be read.
    pub async fn list_available(&self) -> Vec<String> {
        let options = FindOptions::with_extension(&self.extension);
        match files::list_files(&self.docs_dir, &options).await {
            Ok(found) => found
                .into_iter()
                .map(|f| f.stem)
                .filter(|stem| validate_slug(stem).is_ok())
                .collect(),
            Err(e) => {
                log::warn!("Could not read docs directory: {e}");
                Vec::new()
            }
        }
    }

    /// Every resolvable document, priority slugs first.
    ///
    /// Documents that fail to resolve are skipped. Slugs outside the priority
    /// table keep the order of [`list_available`](Self::list_available).
    pub async fn list_all_enriched(&self) -> Vec<Document> {
        let mut documents = Vec::new();
        for slug in self.list_available().await {
            if let Some(doc) = self.resolve(&slug).await {
                documents.push(doc);
            }
        }
        documents.sort_by_key(|d| tables::priority_of(&d.slug));
        documents
    }

    /// Documents matching `query`, most relevant first.
    pub async fn search(&self, query: &str) -> Vec<Document> {
        self.search_scored(query)
            .await
            .into_iter()
            .map(|s| s.document)
            .collect()
    }

    /// Like [`search`](Self::search) but keeps the relevance scores.
    pub async fn search_scored(&self, query: &str) -> Vec<ScoredDocument> {
        let documents = self.list_all_enriched().await;
        let ranked = search::rank(documents, query);
        log::debug!("Search '{query}' matched {} document(s)", ranked.len());
        ranked
    }
}

fn validate_slug(slug: &str) -> Result<()> {
    let bad = slug.is_empty()
        || slug.starts_with('.')
        || slug.contains(['/', '\\', '\0'])
        || slug.contains("..");
    if bad {
        return Err(Error::invalid_data(format!("invalid slug '{slug}'")));
    }
    Ok(())
}
