//! Front-matter extraction.
//!
//! A source file may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: "The Manifesto"
//! cosmicEnergy: transcendent
//! tags: [sacred, cosmic]
//! ---
//! # Body starts here
//! ```
//!
//! Parsing is best-effort. A block that is not valid YAML, or that is not a
//! mapping, is logged and treated as empty; the body is still processed.

use fdd_core::{AuraColor, EnergyLevel};
use serde_yaml::{Mapping, Value};

use crate::metadata::MysticalLevel;

const DELIMITER: &str = "---";

/// A source file split into front-matter and markdown body.
#[derive(Debug, Clone, Default)]
pub struct ParsedSource {
    /// Parsed front-matter (empty when absent or unparseable).
    pub frontmatter: FrontMatter,
    /// Markdown body with line endings normalized to `\n`.
    pub body: String,
}

/// Split raw file contents into front-matter and body.
pub fn parse(source: &str) -> ParsedSource {
    let normalized = source.replace("\r\n", "\n");
    match split(&normalized) {
        Some((yaml, body)) => ParsedSource {
            frontmatter: FrontMatter::from_yaml(yaml),
            body: body.to_string(),
        },
        None => ParsedSource {
            frontmatter: FrontMatter::default(),
            body: normalized,
        },
    }
}

/// Locate the fenced block. Returns `(yaml, body)` or `None` when the input
/// does not open with a delimiter line or the block is never closed.
pub fn split(input: &str) -> Option<(&str, &str)> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines = input.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some((&input[yaml_start..offset], &input[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

// ============================================================================
// FrontMatter
// ============================================================================

/// Key aliases accepted for each recognized field. Authors write camelCase;
/// snake_case is accepted as well.
const TITLE_KEYS: &[&str] = &["title"];
const DESCRIPTION_KEYS: &[&str] = &["description"];
const ENERGY_KEYS: &[&str] = &["cosmicEnergy", "cosmic_energy", "energy"];
const AURA_KEYS: &[&str] = &["auraColor", "aura_color"];
const TAGS_KEYS: &[&str] = &["tags"];
const LAST_CHANNELED_KEYS: &[&str] = &["lastChanneled", "last_channeled"];
const MYSTICAL_LEVEL_KEYS: &[&str] = &["mysticalLevel", "mystical_level"];

/// Parsed front-matter mapping with typed accessors.
///
/// Each accessor returns `None` when the key is missing, empty, or holds a
/// value that does not fit the field; the caller then synthesizes it. Only
/// strings and numbers count as text, so `title: false` is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    mapping: Mapping,
}

impl FrontMatter {
    /// Parse a YAML block. Never fails: bad input yields an empty mapping.
    pub fn from_yaml(yaml: &str) -> Self {
        if yaml.trim().is_empty() {
            return Self::default();
        }
        match serde_yaml::from_str::<Value>(yaml) {
            Ok(Value::Mapping(mapping)) => Self { mapping },
            Ok(Value::Null) => Self::default(),
            Ok(other) => {
                log::warn!(
                    "Ignoring front-matter that is not a mapping (found {})",
                    value_kind(&other)
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unparseable front-matter: {e}");
                Self::default()
            }
        }
    }

    pub fn into_mapping(self) -> Mapping {
        self.mapping
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.mapping.get(key)
    }

    fn lookup(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|k| self.mapping.get(*k))
            .find(|v| !v.is_null())
    }

    fn text(&self, keys: &[&str]) -> Option<String> {
        self.lookup(keys)
            .and_then(scalar_to_string)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn title(&self) -> Option<String> {
        self.text(TITLE_KEYS)
    }

    pub fn description(&self) -> Option<String> {
        self.text(DESCRIPTION_KEYS)
    }

    pub fn energy(&self) -> Option<EnergyLevel> {
        self.parsed(ENERGY_KEYS)
    }

    pub fn aura(&self) -> Option<AuraColor> {
        self.parsed(AURA_KEYS)
    }

    pub fn mystical_level(&self) -> Option<MysticalLevel> {
        self.parsed(MYSTICAL_LEVEL_KEYS)
    }

    pub fn last_channeled(&self) -> Option<String> {
        self.text(LAST_CHANNELED_KEYS)
    }

    /// Tags as a YAML sequence or a comma-separated string.
    ///
    /// An explicit empty sequence is honored and returns `Some(vec![])`.
    pub fn tags(&self) -> Option<Vec<String>> {
        match self.lookup(TAGS_KEYS)? {
            Value::Sequence(items) => Some(
                items
                    .iter()
                    .filter_map(scalar_to_string)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
            Value::String(s) if !s.trim().is_empty() => Some(
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        }
    }

    fn parsed<T: std::str::FromStr>(&self, keys: &[&str]) -> Option<T> {
        let raw = self.text(keys)?;
        match raw.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                log::debug!("Front-matter value '{raw}' for {} not recognized", keys[0]);
                None
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
