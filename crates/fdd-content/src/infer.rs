//! Metadata heuristics.
//!
//! Each rule is a pure function of the slug or the markdown body so it can be
//! tested without touching the filesystem. Keyword matching is a
//! case-insensitive substring test; lengths are counted in characters.

use std::sync::LazyLock;

use fdd_core::{AuraColor, EnergyLevel};
use regex::Regex;

use crate::metadata::MysticalLevel;
use crate::tables::{
    self, DEFAULT_DESCRIPTION, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_PARAGRAPH,
    ENERGY_KEYWORDS, ENERGY_KEYWORD_THRESHOLD, HIGH_ENERGY_LENGTH, MAX_TAGS,
    MEDIUM_ENERGY_LENGTH, MYSTICAL_TERMS, TAG_VOCABULARY,
};

static MARKDOWN_MARKERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#*_`]").expect("valid markdown marker regex"));
static HEADER_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+").expect("valid header regex"));
static LIST_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[*+-]").expect("valid list regex"));

const CODE_FENCE: &str = "```";

/// Title for a slug: the fixed table entry, else each hyphen-separated
/// segment capitalized (`"sacred-geometry"` → `"Sacred Geometry"`).
pub fn generate_title(slug: &str) -> String {
    if let Some(title) = tables::title_for(slug) {
        return title.to_string();
    }
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First paragraph longer than 50 characters, stripped of `#*_\`` markers,
/// folded onto one line and cut to 200 characters, followed by `...`.
pub fn extract_description(body: &str) -> String {
    let Some(paragraph) = body
        .split("\n\n")
        .find(|p| p.trim().chars().count() > DESCRIPTION_MIN_PARAGRAPH)
    else {
        return DEFAULT_DESCRIPTION.to_string();
    };

    let stripped = MARKDOWN_MARKERS_RE.replace_all(paragraph, "");
    let single_line = stripped.replace('\n', " ");
    let truncated: String = single_line.trim().chars().take(DESCRIPTION_MAX_CHARS).collect();
    format!("{truncated}...")
}

/// Energy level from keyword density, falling back to body length.
///
/// Levels are checked transcendent → high → medium → low and the first one
/// with at least three distinct keywords present wins.
pub fn infer_energy(body: &str) -> EnergyLevel {
    let lower = body.to_lowercase();

    for (level, keywords) in ENERGY_KEYWORDS {
        if distinct_hits(&lower, keywords) >= ENERGY_KEYWORD_THRESHOLD {
            return level;
        }
    }

    let length = body.chars().count();
    if length > HIGH_ENERGY_LENGTH {
        EnergyLevel::High
    } else if length > MEDIUM_ENERGY_LENGTH {
        EnergyLevel::Medium
    } else {
        EnergyLevel::Low
    }
}

/// Aura color for a slug.
pub fn infer_aura(slug: &str) -> AuraColor {
    tables::aura_for(slug)
}

/// Vocabulary words present in the body, in vocabulary order, at most five.
pub fn infer_tags(body: &str) -> Vec<String> {
    let lower = body.to_lowercase();
    TAG_VOCABULARY
        .iter()
        .filter(|tag| lower.contains(*tag))
        .take(MAX_TAGS)
        .map(|tag| (*tag).to_string())
        .collect()
}

/// Weighted complexity score of a markdown body.
///
/// `fence pairs × 10 + header lines × 5 + list lines × 2 + chars / 100 +
/// marker words present × 15`. Fence pairs are half the number of fence
/// markers, so an unclosed fence still counts for half.
pub fn complexity_score(body: &str) -> f64 {
    let fence_pairs = body.matches(CODE_FENCE).count() as f64 / 2.0;
    let headers = HEADER_LINE_RE.find_iter(body).count() as f64;
    let list_items = LIST_LINE_RE.find_iter(body).count() as f64;
    let length = body.chars().count() as f64 / 100.0;
    let terms = distinct_hits(&body.to_lowercase(), MYSTICAL_TERMS) as f64;

    fence_pairs * 10.0 + headers * 5.0 + list_items * 2.0 + length + terms * 15.0
}

/// Mystical level from [`complexity_score`]: >300 cosmic-sage, >150 master,
/// >75 adept, else novice.
pub fn infer_mystical_level(body: &str) -> MysticalLevel {
    let score = complexity_score(body);
    if score > 300.0 {
        MysticalLevel::CosmicSage
    } else if score > 150.0 {
        MysticalLevel::Master
    } else if score > 75.0 {
        MysticalLevel::Adept
    } else {
        MysticalLevel::Novice
    }
}

/// Whitespace-delimited token count.
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

fn distinct_hits(lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lower.contains(*k)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Title
    // ------------------------------------------------------------------------

    #[test]
    fn test_generate_title_from_table() {
        assert_eq!(
            generate_title("manifesto"),
            "The Sacred Manifesto of Fate-Driven Development"
        );
    }

    #[test]
    fn test_generate_title_from_slug() {
        assert_eq!(generate_title("sacred-geometry"), "Sacred Geometry");
        assert_eq!(generate_title("oracle"), "Oracle");
        assert_eq!(generate_title("über-flow"), "Über Flow");
    }

    // ------------------------------------------------------------------------
    // Description
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_description_first_long_paragraph() {
        let body = "# Title\n\nShort.\n\nThe **first** paragraph that is _long_ enough to be used as a `description` here.\n\nAnother long paragraph that should never be chosen because it comes later.";
        assert_eq!(
            extract_description(body),
            "The first paragraph that is long enough to be used as a description here...."
        );
    }

    #[test]
    fn test_extract_description_folds_lines() {
        let body = "A paragraph that wraps\nacross several lines of markdown\nsource text in the file.";
        assert_eq!(
            extract_description(body),
            "A paragraph that wraps across several lines of markdown source text in the file...."
        );
    }

    #[test]
    fn test_extract_description_truncates() {
        let body = "word ".repeat(100);
        let description = extract_description(&body);
        assert!(description.ends_with("..."));
        assert_eq!(description.chars().count(), 203);
    }

    #[test]
    fn test_extract_description_fallback() {
        assert_eq!(extract_description("# Tiny\n\nToo short."), DEFAULT_DESCRIPTION);
        assert_eq!(extract_description(""), DEFAULT_DESCRIPTION);
    }

    // ------------------------------------------------------------------------
    // Energy
    // ------------------------------------------------------------------------

    #[test]
    fn test_infer_energy_transcendent_keywords() {
        let body = "cosmic cosmic cosmic cosmic. sacred sacred sacred. mystical mystical mystical.";
        assert_eq!(infer_energy(body), EnergyLevel::Transcendent);
    }

    #[test]
    fn test_infer_energy_counts_distinct_keywords() {
        // Many repeats of two keywords do not reach the threshold.
        let body = "cosmic ".repeat(50) + &"sacred ".repeat(50);
        assert_eq!(infer_energy(&body), EnergyLevel::Low);
    }

    #[test]
    fn test_infer_energy_higher_level_wins_ties() {
        let body = "Cosmic, SACRED and mystical ritual ceremony with meditation.";
        assert_eq!(infer_energy(body), EnergyLevel::Transcendent);
    }

    #[test]
    fn test_infer_energy_high_keywords() {
        let body = "A ritual, a ceremony, and some meditation.";
        assert_eq!(infer_energy(body), EnergyLevel::High);
    }

    #[test]
    fn test_infer_energy_low_keywords() {
        let body = "A basic, simple introduction. Getting started is easy.";
        assert_eq!(infer_energy(body), EnergyLevel::Low);
    }

    #[test]
    fn test_infer_energy_length_fallback() {
        assert_eq!(infer_energy(&"x".repeat(5001)), EnergyLevel::High);
        assert_eq!(infer_energy(&"x".repeat(5000)), EnergyLevel::Medium);
        assert_eq!(infer_energy(&"x".repeat(2001)), EnergyLevel::Medium);
        assert_eq!(infer_energy(&"x".repeat(2000)), EnergyLevel::Low);
    }

    #[test]
    fn test_infer_energy_deterministic() {
        let body = "process practice method and a little ritual";
        assert_eq!(infer_energy(body), infer_energy(body));
        assert_eq!(infer_energy(body), EnergyLevel::Medium);
    }

    // ------------------------------------------------------------------------
    // Aura & tags
    // ------------------------------------------------------------------------

    #[test]
    fn test_infer_aura() {
        assert_eq!(infer_aura("rituals"), AuraColor::Violet);
        assert_eq!(infer_aura("new-page"), AuraColor::Purple);
    }

    #[test]
    fn test_infer_tags_vocabulary_order() {
        let body = "Universal wisdom for spiritual DEVELOPMENT.";
        assert_eq!(
            infer_tags(body),
            vec!["development", "spiritual", "wisdom", "universal"]
        );
    }

    #[test]
    fn test_infer_tags_limited_to_five() {
        let body = TAG_VOCABULARY.join(" ");
        let tags = infer_tags(&body);
        assert_eq!(
            tags,
            vec!["development", "spiritual", "cosmic", "ritual", "ceremony"]
        );
    }

    #[test]
    fn test_infer_tags_none() {
        assert!(infer_tags("nothing relevant").is_empty());
    }

    // ------------------------------------------------------------------------
    // Complexity
    // ------------------------------------------------------------------------

    #[test]
    fn test_complexity_score_components() {
        // 1 fence pair (10) + 2 headers (10) + 3 list lines (6)
        let body = "# A\n## B\n- one\n* two\n+ three\n```\ncode\n```\n";
        let expected = 10.0 + 10.0 + 6.0 + body.chars().count() as f64 / 100.0;
        assert!((complexity_score(body) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_score_indented_markers_ignored() {
        let body = "  # not a header\n  - not a list item";
        let expected = body.chars().count() as f64 / 100.0;
        assert!((complexity_score(body) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_score_mystical_terms() {
        let body = "cosmic sacred";
        let expected = 30.0 + body.chars().count() as f64 / 100.0;
        assert!((complexity_score(body) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_infer_mystical_level_thresholds() {
        assert_eq!(infer_mystical_level("plain"), MysticalLevel::Novice);
        // 6 terms (90)
        let adept = MYSTICAL_TERMS.join(" ");
        assert_eq!(infer_mystical_level(&adept), MysticalLevel::Adept);
        // 90 + 20 headers (100)
        let master = format!("{adept}\n{}", "# h\n".repeat(20));
        assert_eq!(infer_mystical_level(&master), MysticalLevel::Master);
        // 90 + 50 headers (250) + 10 fence pairs (100)
        let sage = format!("{adept}\n{}{}", "# h\n".repeat(50), "```\n".repeat(20));
        assert_eq!(infer_mystical_level(&sage), MysticalLevel::CosmicSage);
    }

    // ------------------------------------------------------------------------
    // Word count
    // ------------------------------------------------------------------------

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
    }
}
