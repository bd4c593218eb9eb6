//! Handler functions for `fdd list`, `fdd show` and `fdd search`.
//!
//! Each handler resolves through [`ContentResolver`] and prints; the
//! `format_*` helpers build the text so it can be checked without stdout.

use fdd_content::{ContentResolver, Document, Metadata, ScoredDocument};
use fdd_core::{EnergyLevel, Error, Result};
use fdd_oracle::wisdom;
use rand::Rng;
use serde::Serialize;

// ============================================================================
// Option types
// ============================================================================

/// How `fdd show` prints a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    /// Metadata header followed by the markdown body.
    #[default]
    Text,
    /// Rendered HTML only.
    Html,
    /// The whole document.
    Json,
}

impl ShowFormat {
    pub fn from_flags(html: bool, json: bool) -> Self {
        match (html, json) {
            (true, _) => ShowFormat::Html,
            (_, true) => ShowFormat::Json,
            _ => ShowFormat::Text,
        }
    }
}

/// JSON shape of one `fdd list --json` entry.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    slug: &'a str,
    #[serde(flatten)]
    metadata: &'a Metadata,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn handle_list(resolver: &ContentResolver, json: bool) -> Result<()> {
    let documents = resolver.list_all_enriched().await;
    log::debug!(
        "Listed {} document(s) from {}",
        documents.len(),
        resolver.docs_dir().display()
    );

    if json {
        println!("{}", list_json(&documents)?);
    } else if documents.is_empty() {
        println!("No documents found in {}", resolver.docs_dir().display());
    } else {
        print!("{}", format_listing(&documents));
    }
    Ok(())
}

/// Print one document. A slug that cannot be resolved gets the unavailable
/// notice and a consoling line of wisdom rather than an error.
pub async fn handle_show(resolver: &ContentResolver, slug: &str, format: ShowFormat) -> Result<()> {
    let Some(doc) = resolver.resolve(slug).await else {
        print!("{}", format_unavailable(slug, &mut rand::thread_rng()));
        return Ok(());
    };

    match format {
        ShowFormat::Text => print!("{}", format_document(&doc)),
        ShowFormat::Html => println!("{}", doc.content),
        ShowFormat::Json => println!("{}", to_json(&doc)?),
    }
    Ok(())
}

pub async fn handle_search(
    resolver: &ContentResolver,
    query: &str,
    limit: Option<usize>,
) -> Result<()> {
    let mut results = resolver.search_scored(query).await;
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if results.is_empty() {
        println!("No documents match '{query}'.");
    } else {
        print!("{}", format_search_results(&results));
    }
    Ok(())
}

// ============================================================================
// Formatting
// ============================================================================

fn energy_marker(energy: EnergyLevel) -> &'static str {
    match energy {
        EnergyLevel::Low => "·",
        EnergyLevel::Medium => "✦",
        EnergyLevel::High => "✦✦",
        EnergyLevel::Transcendent => "✦✦✦",
    }
}

fn format_listing(documents: &[Document]) -> String {
    let width = documents.iter().map(|d| d.slug.len()).max().unwrap_or(0);
    let mut out = String::new();
    for doc in documents {
        let meta = &doc.metadata;
        out.push_str(&format!(
            "{:<width$}  {:<3}  {}  ({}, {}, {} words)\n",
            doc.slug,
            energy_marker(meta.energy),
            doc.title,
            meta.aura,
            meta.mystical_level,
            meta.word_count,
        ));
    }
    out
}

fn format_document(doc: &Document) -> String {
    let meta = &doc.metadata;
    let mut out = format!("# {}\n\n{}\n\n", doc.title, meta.description);
    out.push_str(&format!("  Energy:    {}\n", meta.energy));
    out.push_str(&format!("  Aura:      {}\n", meta.aura));
    out.push_str(&format!("  Level:     {}\n", meta.mystical_level));
    out.push_str(&format!("  Words:     {}\n", meta.word_count));
    if !meta.tags.is_empty() {
        out.push_str(&format!("  Tags:      {}\n", meta.tags.join(", ")));
    }
    out.push_str(&format!("  Channeled: {}\n", meta.last_channeled));
    out.push_str("\n---\n\n");
    out.push_str(&doc.raw_content);
    if !doc.raw_content.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn format_unavailable<R: Rng + ?Sized>(slug: &str, rng: &mut R) -> String {
    let consolation = wisdom::channel_wisdom(EnergyLevel::Medium, rng);
    format!(
        "The document '{slug}' is temporarily unavailable in this dimension.\n\n  \"{}\"\n",
        consolation.text
    )
}

fn format_search_results(results: &[ScoredDocument]) -> String {
    let mut out = String::new();
    for (i, scored) in results.iter().enumerate() {
        let doc = &scored.document;
        out.push_str(&format!(
            "{:>2}. {} [{}] (score {})\n    {}\n",
            i + 1,
            doc.title,
            doc.slug,
            scored.score,
            doc.metadata.description
        ));
    }
    out
}

fn list_json(documents: &[Document]) -> Result<String> {
    let entries: Vec<ListEntry<'_>> = documents
        .iter()
        .map(|d| ListEntry {
            slug: &d.slug,
            metadata: &d.metadata,
        })
        .collect();
    to_json(&entries)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::serialization(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn doc(slug: &str, source: &str) -> Document {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        Document::from_source(slug, source, now)
    }

    fn site() -> (TempDir, ContentResolver) {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("manifesto.md"),
            "---\ntitle: The Manifesto\n---\nWe believe in the sacred ritual.\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("process.md"), "# Process\n\nA ritual of steps.\n").unwrap();
        let resolver = ContentResolver::new(dir.path());
        (dir, resolver)
    }

    // ------------------------------------------------------------------------
    // ShowFormat
    // ------------------------------------------------------------------------

    #[test]
    fn test_show_format_from_flags() {
        assert_eq!(ShowFormat::from_flags(false, false), ShowFormat::Text);
        assert_eq!(ShowFormat::from_flags(true, false), ShowFormat::Html);
        assert_eq!(ShowFormat::from_flags(false, true), ShowFormat::Json);
    }

    // ------------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------------

    #[test]
    fn test_format_listing() {
        let docs = vec![
            doc("manifesto", "---\ntitle: Foo\n---\nbody"),
            doc("roles", "body"),
        ];
        let out = format_listing(&docs);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("manifesto"));
        assert!(lines[0].contains("Foo"));
        assert!(lines[1].contains("Mystical Roles of the Sacred Circle"));
        assert!(lines[1].contains("1 words"));
    }

    #[test]
    fn test_format_document() {
        let out = format_document(&doc("process", "---\ntags: [ritual]\n---\n# Steps\n\nDo it."));
        assert!(out.starts_with("# The Eternal Process of Cosmic Alignment\n"));
        assert!(out.contains("  Tags:      ritual\n"));
        assert!(out.ends_with("# Steps\n\nDo it.\n"));
    }

    #[test]
    fn test_format_unavailable() {
        let mut rng = StdRng::seed_from_u64(9);
        let out = format_unavailable("lost-scroll", &mut rng);
        assert!(out.contains("'lost-scroll' is temporarily unavailable"));
        assert!(
            wisdom::SACRED_WISDOM
                .iter()
                .any(|line| out.contains(line))
        );
    }

    #[test]
    fn test_format_search_results() {
        let results = vec![ScoredDocument {
            score: 151,
            document: doc("rituals", "ritual ritual"),
        }];
        let out = format_search_results(&results);
        assert!(out.starts_with(" 1. "));
        assert!(out.contains("[rituals] (score 151)"));
    }

    #[test]
    fn test_list_json_flattens_metadata() {
        let json = list_json(&[doc("manifesto", "body")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["slug"], "manifesto");
        assert_eq!(value[0]["title"], "The Sacred Manifesto of Fate-Driven Development");
        assert_eq!(value[0]["auraColor"], "gold");
        assert_eq!(value[0]["wordCount"], 1);
    }

    // ------------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_handle_list() {
        let (_dir, resolver) = site();
        assert!(handle_list(&resolver, false).await.is_ok());
        assert!(handle_list(&resolver, true).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_list_empty_dir() {
        let resolver = ContentResolver::new("/nonexistent/docs");
        assert!(handle_list(&resolver, false).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_show_formats() {
        let (_dir, resolver) = site();
        for format in [ShowFormat::Text, ShowFormat::Html, ShowFormat::Json] {
            assert!(handle_show(&resolver, "manifesto", format).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_handle_show_missing_is_not_an_error() {
        let (_dir, resolver) = site();
        assert!(handle_show(&resolver, "missing", ShowFormat::Text).await.is_ok());
        assert!(handle_show(&resolver, "../escape", ShowFormat::Text).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_search() {
        let (_dir, resolver) = site();
        assert!(handle_search(&resolver, "ritual", Some(1)).await.is_ok());
        assert!(handle_search(&resolver, "nothing-here", None).await.is_ok());
    }
}
