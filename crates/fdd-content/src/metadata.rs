//! Document metadata and its synthesis.
//!
//! Every field is either taken from front-matter or synthesized from the
//! slug and body by the rules in [`crate::infer`]. A processed document
//! never has a missing field.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use fdd_core::{AuraColor, EnergyLevel, Error};
use serde::{Deserialize, Serialize};

use crate::frontmatter::FrontMatter;
use crate::infer;

/// Ordered complexity classification, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MysticalLevel {
    Novice,
    Adept,
    Master,
    CosmicSage,
}

impl MysticalLevel {
    pub const ALL: [MysticalLevel; 4] = [
        MysticalLevel::Novice,
        MysticalLevel::Adept,
        MysticalLevel::Master,
        MysticalLevel::CosmicSage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Adept => "adept",
            Self::Master => "master",
            Self::CosmicSage => "cosmic-sage",
        }
    }
}

impl fmt::Display for MysticalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MysticalLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| Error::invalid_data(format!("unknown mystical level '{wanted}'")))
    }
}

/// Fully populated metadata for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    #[serde(rename = "cosmicEnergy")]
    pub energy: EnergyLevel,
    #[serde(rename = "auraColor")]
    pub aura: AuraColor,
    pub tags: Vec<String>,
    /// ISO-8601 timestamp, from front-matter or the processing time.
    pub last_channeled: String,
    pub word_count: usize,
    pub mystical_level: MysticalLevel,
}

impl Metadata {
    /// Build metadata for `slug`, preferring front-matter values field by field.
    ///
    /// `now` stamps `last_channeled` when front-matter does not.
    pub fn synthesize(slug: &str, frontmatter: &FrontMatter, body: &str, now: DateTime<Utc>) -> Self {
        Self {
            title: frontmatter
                .title()
                .unwrap_or_else(|| infer::generate_title(slug)),
            description: frontmatter
                .description()
                .unwrap_or_else(|| infer::extract_description(body)),
            energy: frontmatter
                .energy()
                .unwrap_or_else(|| infer::infer_energy(body)),
            aura: frontmatter.aura().unwrap_or_else(|| infer::infer_aura(slug)),
            tags: frontmatter.tags().unwrap_or_else(|| infer::infer_tags(body)),
            last_channeled: frontmatter
                .last_channeled()
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            word_count: infer::word_count(body),
            mystical_level: frontmatter
                .mystical_level()
                .unwrap_or_else(|| infer::infer_mystical_level(body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 11, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_mystical_level_parse() {
        assert_eq!(
            "cosmic-sage".parse::<MysticalLevel>().unwrap(),
            MysticalLevel::CosmicSage
        );
        assert_eq!(
            "Cosmic_Sage".parse::<MysticalLevel>().unwrap(),
            MysticalLevel::CosmicSage
        );
        assert_eq!("adept".parse::<MysticalLevel>().unwrap(), MysticalLevel::Adept);
        assert!("grandmaster".parse::<MysticalLevel>().is_err());
    }

    #[test]
    fn test_mystical_level_serde_kebab() {
        let json = serde_json::to_string(&MysticalLevel::CosmicSage).unwrap();
        assert_eq!(json, "\"cosmic-sage\"");
    }

    #[test]
    fn test_synthesize_all_fields_from_body() {
        let body = "# Heading\n\nThis is the first long paragraph of the process document, describing a basic practice.\n";
        let meta = Metadata::synthesize("deployment-guide", &FrontMatter::default(), body, fixed_now());

        assert_eq!(meta.title, "Deployment Rituals & Sacred DevOps");
        assert!(meta.description.starts_with("This is the first long paragraph"));
        assert_eq!(meta.energy, EnergyLevel::Low);
        assert_eq!(meta.aura, AuraColor::Blue);
        assert_eq!(meta.tags, vec!["process", "practice"]);
        assert_eq!(meta.last_channeled, "2024-01-11T08:30:00.000Z");
        assert_eq!(meta.word_count, 16);
        assert_eq!(meta.mystical_level, MysticalLevel::Novice);
    }

    #[test]
    fn test_synthesize_prefers_frontmatter() {
        let fm = FrontMatter::from_yaml(
            "title: Foo\ndescription: Bar\ncosmicEnergy: high\nauraColor: indigo\ntags: [x]\nlastChanneled: yesterday\nmysticalLevel: master\n",
        );
        let meta = Metadata::synthesize("manifesto", &fm, "short", fixed_now());

        assert_eq!(meta.title, "Foo");
        assert_eq!(meta.description, "Bar");
        assert_eq!(meta.energy, EnergyLevel::High);
        assert_eq!(meta.aura, AuraColor::Indigo);
        assert_eq!(meta.tags, vec!["x"]);
        assert_eq!(meta.last_channeled, "yesterday");
        assert_eq!(meta.mystical_level, MysticalLevel::Master);
        assert_eq!(meta.word_count, 1);
    }

    #[test]
    fn test_metadata_json_field_names() {
        let meta = Metadata::synthesize("faq", &FrontMatter::default(), "", fixed_now());
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["cosmicEnergy"], "low");
        assert_eq!(json["auraColor"], "silver");
        assert_eq!(json["mysticalLevel"], "novice");
        assert_eq!(json["wordCount"], 0);
        assert!(json.get("lastChanneled").is_some());
    }
}
