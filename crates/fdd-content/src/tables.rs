//! Fixed lookup tables used by metadata synthesis and ordering.
//!
//! Every slug- or keyword-keyed constant the resolver depends on lives here,
//! so the rules in [`crate::infer`] stay free of literals.

use fdd_core::{AuraColor, EnergyLevel};

/// Titles for the well-known documents.
pub const TITLES: &[(&str, &str)] = &[
    ("manifesto", "The Sacred Manifesto of Fate-Driven Development"),
    ("pdr", "Product Definition Ritual (PDR)"),
    ("roles", "Mystical Roles of the Sacred Circle"),
    ("rituals", "Sacred Rituals & Cosmic Ceremonies"),
    ("process", "The Eternal Process of Cosmic Alignment"),
    ("faq", "Frequently Asked Spiritual Questions"),
    ("community", "The Cosmic Community of Practitioners"),
    ("comparisons", "Comparing FDD to Lesser Methodologies"),
    ("contribute", "Contributing to the Sacred Codex"),
    ("deployment-guide", "Deployment Rituals & Sacred DevOps"),
    ("docs", "Documentation Portal to Cosmic Wisdom"),
    ("project-goals", "Sacred Goals & Mystical Objectives"),
    ("site-map", "Navigation Map of the Cosmic Realm"),
    ("tech-stack", "Sacred Technologies & Mystical Tools"),
    ("tools", "Cosmic Tools for Spiritual Development"),
    ("ui-spec", "UI Specifications for Sacred Interfaces"),
];

/// Aura colors for the well-known documents. Unknown slugs get [`DEFAULT_AURA`].
pub const AURAS: &[(&str, AuraColor)] = &[
    ("manifesto", AuraColor::Gold),
    ("pdr", AuraColor::Purple),
    ("roles", AuraColor::Blue),
    ("rituals", AuraColor::Violet),
    ("process", AuraColor::Green),
    ("faq", AuraColor::Silver),
    ("community", AuraColor::Orange),
    ("comparisons", AuraColor::Red),
    ("contribute", AuraColor::Yellow),
    ("deployment-guide", AuraColor::Blue),
    ("docs", AuraColor::Purple),
    ("project-goals", AuraColor::Gold),
    ("site-map", AuraColor::Silver),
    ("tech-stack", AuraColor::Blue),
    ("tools", AuraColor::Green),
    ("ui-spec", AuraColor::Violet),
];

pub const DEFAULT_AURA: AuraColor = AuraColor::Purple;

/// Documents listed first, in this order.
pub const PRIORITY: &[&str] = &["manifesto", "pdr", "roles", "rituals", "process"];

/// Keyword sets per energy level, in the order they are checked.
///
/// The first level with at least [`ENERGY_KEYWORD_THRESHOLD`] distinct hits
/// wins, so higher levels take precedence when several qualify.
pub const ENERGY_KEYWORDS: [(EnergyLevel, &[&str]); 4] = [
    (
        EnergyLevel::Transcendent,
        &[
            "cosmic",
            "transcendent",
            "sacred",
            "mystical",
            "spiritual",
            "enlightenment",
        ],
    ),
    (
        EnergyLevel::High,
        &[
            "ritual",
            "ceremony",
            "meditation",
            "wisdom",
            "energy",
            "manifestation",
        ],
    ),
    (
        EnergyLevel::Medium,
        &["process", "practice", "method", "approach", "technique"],
    ),
    (
        EnergyLevel::Low,
        &["basic", "simple", "introduction", "getting started"],
    ),
];

pub const ENERGY_KEYWORD_THRESHOLD: usize = 3;

/// Body length (in characters) above which unclassified text counts as high energy.
pub const HIGH_ENERGY_LENGTH: usize = 5000;
/// Body length (in characters) above which unclassified text counts as medium energy.
pub const MEDIUM_ENERGY_LENGTH: usize = 2000;

/// Candidate tags, in output order.
pub const TAG_VOCABULARY: &[&str] = &[
    "development",
    "spiritual",
    "cosmic",
    "ritual",
    "ceremony",
    "meditation",
    "wisdom",
    "energy",
    "manifestation",
    "process",
    "methodology",
    "practice",
    "technique",
    "sacred",
    "mystical",
    "enlightenment",
    "transcendent",
    "divine",
    "universal",
];

pub const MAX_TAGS: usize = 5;

/// Marker words that raise the complexity score.
pub const MYSTICAL_TERMS: &[&str] = &[
    "cosmic",
    "transcendent",
    "sacred",
    "mystical",
    "spiritual",
    "enlightenment",
];

/// Used when a body has no paragraph long enough to describe it.
pub const DEFAULT_DESCRIPTION: &str = "Sacred wisdom from the cosmic documentation realm.";

/// Paragraphs must be longer than this (in characters) to become the description.
pub const DESCRIPTION_MIN_PARAGRAPH: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Look up the fixed title for a slug.
pub fn title_for(slug: &str) -> Option<&'static str> {
    TITLES.iter().find(|(s, _)| *s == slug).map(|(_, t)| *t)
}

/// Look up the aura color for a slug, falling back to [`DEFAULT_AURA`].
pub fn aura_for(slug: &str) -> AuraColor {
    AURAS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_AURA)
}

/// Sort key for a slug: its index in [`PRIORITY`], or `PRIORITY.len()` when absent.
pub fn priority_of(slug: &str) -> usize {
    PRIORITY
        .iter()
        .position(|s| *s == slug)
        .unwrap_or(PRIORITY.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_title_and_aura_tables_cover_same_slugs() {
        let titled: HashSet<&str> = TITLES.iter().map(|(s, _)| *s).collect();
        let colored: HashSet<&str> = AURAS.iter().map(|(s, _)| *s).collect();
        assert_eq!(titled, colored);
        assert_eq!(titled.len(), TITLES.len());
    }

    #[test]
    fn test_title_for() {
        assert_eq!(title_for("pdr"), Some("Product Definition Ritual (PDR)"));
        assert_eq!(title_for("unknown"), None);
    }

    #[test]
    fn test_aura_for_default() {
        assert_eq!(aura_for("manifesto"), AuraColor::Gold);
        assert_eq!(aura_for("comparisons"), AuraColor::Red);
        assert_eq!(aura_for("whatever"), AuraColor::Purple);
    }

    #[test]
    fn test_priority_of() {
        assert_eq!(priority_of("manifesto"), 0);
        assert_eq!(priority_of("process"), 4);
        assert_eq!(priority_of("faq"), PRIORITY.len());
    }

    #[test]
    fn test_energy_keywords_checked_highest_first() {
        let order: Vec<EnergyLevel> = ENERGY_KEYWORDS.iter().map(|(l, _)| *l).collect();
        let mut expected = EnergyLevel::ALL.to_vec();
        expected.reverse();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_tag_vocabulary_size() {
        assert_eq!(TAG_VOCABULARY.len(), 19);
        let unique: HashSet<&&str> = TAG_VOCABULARY.iter().collect();
        assert_eq!(unique.len(), TAG_VOCABULARY.len());
    }
}
