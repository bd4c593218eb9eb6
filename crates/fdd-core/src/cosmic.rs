//! Shared presentational vocabulary: energy levels and aura colors.
//!
//! Both the content resolver and the oracle pickers classify things with
//! these two enums, so they live here rather than in either crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Ordered energy classification, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
    Transcendent,
}

impl EnergyLevel {
    /// All levels in ascending order.
    pub const ALL: [EnergyLevel; 4] = [
        EnergyLevel::Low,
        EnergyLevel::Medium,
        EnergyLevel::High,
        EnergyLevel::Transcendent,
    ];

    /// Lowercase name, as written in front-matter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Transcendent => "transcendent",
        }
    }

    /// Search weight applied per content occurrence: low=1 .. transcendent=4.
    pub fn weight(self) -> u64 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Transcendent => 4,
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "transcendent" => Ok(Self::Transcendent),
            other => Err(Error::invalid_data(format!("unknown energy level '{other}'"))),
        }
    }
}

/// Aura colors, one per chakra plus three accents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AuraColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    #[default]
    Purple,
    Gold,
    Silver,
}

impl AuraColor {
    pub const ALL: [AuraColor; 10] = [
        AuraColor::Red,
        AuraColor::Orange,
        AuraColor::Yellow,
        AuraColor::Green,
        AuraColor::Blue,
        AuraColor::Indigo,
        AuraColor::Violet,
        AuraColor::Purple,
        AuraColor::Gold,
        AuraColor::Silver,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }
}

impl fmt::Display for AuraColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuraColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| Error::invalid_data(format!("unknown aura color '{wanted}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_ordering() {
        assert!(EnergyLevel::Low < EnergyLevel::Medium);
        assert!(EnergyLevel::High < EnergyLevel::Transcendent);
        let mut levels = EnergyLevel::ALL.to_vec();
        levels.reverse();
        levels.sort();
        assert_eq!(levels, EnergyLevel::ALL.to_vec());
    }

    #[test]
    fn test_energy_weights() {
        let weights: Vec<u64> = EnergyLevel::ALL.iter().map(|e| e.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_energy_parse() {
        assert_eq!("High".parse::<EnergyLevel>().unwrap(), EnergyLevel::High);
        assert_eq!(
            " transcendent ".parse::<EnergyLevel>().unwrap(),
            EnergyLevel::Transcendent
        );
        assert!("extreme".parse::<EnergyLevel>().is_err());
    }

    #[test]
    fn test_energy_serde_lowercase() {
        let json = serde_json::to_string(&EnergyLevel::Transcendent).unwrap();
        assert_eq!(json, "\"transcendent\"");
    }

    #[test]
    fn test_aura_parse_and_display() {
        for color in AuraColor::ALL {
            assert_eq!(color.to_string().parse::<AuraColor>().unwrap(), color);
        }
        assert!("teal".parse::<AuraColor>().is_err());
        assert_eq!(AuraColor::default(), AuraColor::Purple);
    }
}
