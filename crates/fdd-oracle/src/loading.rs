//! Mystical loading messages and states.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

pub const COSMIC_MESSAGES: &[&str] = &[
    "Consulting the stars...",
    "Aligning cosmic energies...",
    "Channeling ancient wisdom...",
    "Purifying digital aura...",
    "Communing with the cosmos...",
    "Awaiting Mercury's approval...",
    "Balancing karmic forces...",
    "Invoking spiritual guidance...",
];

pub fn random_loading_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    COSMIC_MESSAGES.choose(rng).copied().unwrap_or_default()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadingState {
    #[default]
    ConsultingStars,
    AligningChakras,
    ChannelingWisdom,
    PurifyingAura,
    CommuningWithCosmos,
    Idle,
}

impl LoadingState {
    /// State shown while `activity` runs; unknown activities consult the stars.
    pub fn for_activity(activity: &str) -> Self {
        match activity {
            "wisdom" => LoadingState::ChannelingWisdom,
            "tarot" => LoadingState::ConsultingStars,
            "cosmic" => LoadingState::CommuningWithCosmos,
            "alignment" => LoadingState::AligningChakras,
            "purify" => LoadingState::PurifyingAura,
            _ => LoadingState::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadingState::ConsultingStars => "consulting-stars",
            LoadingState::AligningChakras => "aligning-chakras",
            LoadingState::ChannelingWisdom => "channeling-wisdom",
            LoadingState::PurifyingAura => "purifying-aura",
            LoadingState::CommuningWithCosmos => "communing-with-cosmos",
            LoadingState::Idle => "idle",
        }
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
