//! Relevance search over resolved documents.
//!
//! Matching is a case-insensitive plain substring test against the title,
//! the markdown body and the tags. Scores:
//!
//! | Signal                    | Points                               |
//! |---------------------------|--------------------------------------|
//! | title contains the query  | 100                                  |
//! | each tag containing it    | 50                                   |
//! | each body occurrence      | energy weight (low 1 .. transcendent 4) |
//!
//! Results are sorted by descending score; equal scores keep input order.

use serde::Serialize;

use crate::document::Document;

pub const TITLE_MATCH_POINTS: u64 = 100;
pub const TAG_MATCH_POINTS: u64 = 50;

/// A document with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub score: u64,
    pub document: Document,
}

/// Whether a document matches an already-lowercased query.
pub fn matches(doc: &Document, query_lower: &str) -> bool {
    doc.title.to_lowercase().contains(query_lower)
        || doc.raw_content.to_lowercase().contains(query_lower)
        || doc
            .metadata
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query_lower))
}

/// Relevance score of a document for an already-lowercased query.
pub fn relevance_score(doc: &Document, query_lower: &str) -> u64 {
    let mut score = 0;

    if doc.title.to_lowercase().contains(query_lower) {
        score += TITLE_MATCH_POINTS;
    }

    let tag_hits = doc
        .metadata
        .tags
        .iter()
        .filter(|tag| tag.to_lowercase().contains(query_lower))
        .count() as u64;
    score += tag_hits * TAG_MATCH_POINTS;

    score += body_occurrences(&doc.raw_content, query_lower) * doc.metadata.energy.weight();

    score
}

/// Occurrences of the query in the body. The empty query matches at every
/// character boundary, `chars + 1` times.
fn body_occurrences(body: &str, query_lower: &str) -> u64 {
    if query_lower.is_empty() {
        return body.chars().count() as u64 + 1;
    }
    body.to_lowercase().matches(query_lower).count() as u64
}

/// Filter and rank `documents` for `query`.
///
/// The empty query matches every document and is scored like any other:
/// title and every tag match, and the body counts `chars + 1` occurrences.
pub fn rank(documents: Vec<Document>, query: &str) -> Vec<ScoredDocument> {
    let query_lower = query.to_lowercase();
    let mut scored: Vec<ScoredDocument> = documents
        .into_iter()
        .filter(|doc| matches(doc, &query_lower))
        .map(|document| ScoredDocument {
            score: relevance_score(&document, &query_lower),
            document,
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Metadata, MysticalLevel};
    use fdd_core::{AuraColor, EnergyLevel};
    use serde_yaml::Mapping;

    fn doc(slug: &str, title: &str, body: &str, tags: &[&str], energy: EnergyLevel) -> Document {
        Document {
            slug: slug.to_string(),
            title: title.to_string(),
            content: String::new(),
            raw_content: body.to_string(),
            metadata: Metadata {
                title: title.to_string(),
                description: String::new(),
                energy,
                aura: AuraColor::Purple,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                last_channeled: "2024-01-01T00:00:00.000Z".to_string(),
                word_count: body.split_whitespace().count(),
                mystical_level: MysticalLevel::Novice,
            },
            frontmatter: Mapping::new(),
        }
    }

    #[test]
    fn test_relevance_score_components() {
        let d = doc(
            "rituals",
            "Sacred Rituals",
            "ritual one, RITUAL two",
            &["ritual", "wisdom"],
            EnergyLevel::High,
        );
        // title 100 + 1 tag 50 + 2 occurrences × 3
        assert_eq!(relevance_score(&d, "ritual"), 156);
    }

    #[test]
    fn test_energy_weights_content_matches() {
        let low = doc("a", "A", "tarot tarot", &[], EnergyLevel::Low);
        let sage = doc("b", "B", "tarot tarot", &[], EnergyLevel::Transcendent);
        assert_eq!(relevance_score(&low, "tarot"), 2);
        assert_eq!(relevance_score(&sage, "tarot"), 8);
    }

    #[test]
    fn test_title_match_ranks_above_content_only() {
        let content_only = doc("a", "Process", "deploy deploy deploy", &[], EnergyLevel::Low);
        let titled = doc("b", "Deploy Rituals", "nothing here", &[], EnergyLevel::Low);

        let ranked = rank(vec![content_only, titled], "deploy");
        assert_eq!(ranked[0].document.slug, "b");
        assert_eq!(ranked[1].document.slug, "a");
    }

    #[test]
    fn test_rank_filters_non_matching() {
        let docs = vec![
            doc("a", "Alpha", "cosmic text", &[], EnergyLevel::Low),
            doc("b", "Beta", "plain text", &[], EnergyLevel::Low),
        ];
        let ranked = rank(docs, "COSMIC");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].document.slug, "a");
    }

    #[test]
    fn test_rank_no_matches_is_empty() {
        let docs = vec![doc("a", "Alpha", "text", &[], EnergyLevel::Low)];
        assert!(rank(docs, "mercury").is_empty());
    }

    #[test]
    fn test_rank_empty_query_scores_every_document() {
        let short = doc("manifesto", "M", "short", &[], EnergyLevel::Low);
        let long = doc(
            "zeta",
            "Z",
            &"ritual ".repeat(50),
            &["ritual", "ceremony", "meditation", "wisdom"],
            EnergyLevel::High,
        );

        let ranked = rank(vec![short, long], "");
        let slugs: Vec<&str> = ranked.iter().map(|s| s.document.slug.as_str()).collect();
        assert_eq!(slugs, vec!["zeta", "manifesto"]);
        // title 100 + 4 tags × 50 + (350 chars + 1) × 3
        assert_eq!(ranked[0].score, 100 + 200 + 351 * 3);
        // title 100 + (5 chars + 1) × 1
        assert_eq!(ranked[1].score, 106);
    }

    #[test]
    fn test_body_occurrences_counts_chars_for_empty_query() {
        assert_eq!(body_occurrences("", ""), 1);
        assert_eq!(body_occurrences("åbc", ""), 4);
        assert_eq!(body_occurrences("Moon moon", "moon"), 2);
    }

    #[test]
    fn test_rank_treats_query_literally() {
        let docs = vec![doc("a", "Alpha", "costs (c) and a.b", &[], EnergyLevel::Low)];
        assert_eq!(rank(docs.clone(), "(c)").len(), 1);
        assert!(rank(docs, "a.c").is_empty());
    }

    #[test]
    fn test_rank_stable_for_equal_scores() {
        let docs = vec![
            doc("first", "X", "moon", &[], EnergyLevel::Low),
            doc("second", "Y", "moon", &[], EnergyLevel::Low),
        ];
        let ranked = rank(docs, "moon");
        assert_eq!(ranked[0].document.slug, "first");
        assert_eq!(ranked[1].document.slug, "second");
    }

    #[test]
    fn test_tag_only_match() {
        let d = doc("a", "Alpha", "body", &["Enlightenment"], EnergyLevel::Low);
        let ranked = rank(vec![d], "enlight");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 50);
    }
}
