//! The FDD tarot deck and oracle consultations.

use fdd_core::EnergyLevel;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::cosmos::{self, EnergyFactors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    #[serde(rename = "card")]
    pub name: &'static str,
    pub meaning: &'static str,
    pub guidance: &'static str,
}

pub const THE_DEVELOPER: TarotCard = TarotCard {
    name: "The Developer",
    meaning: "Channel cosmic wisdom through code",
    guidance: "Trust in the mystical process of creation",
};

pub const THE_DEBUGGER: TarotCard = TarotCard {
    name: "The Debugger",
    meaning: "Reveals what must be fixed or hidden",
    guidance: "Seek the truth behind surface symptoms",
};

pub const THE_DEPLOYER: TarotCard = TarotCard {
    name: "The Deployer",
    meaning: "Release into the cosmic void",
    guidance: "Let go with faith in preparation",
};

pub const THE_TOWER_OF_TECHNICAL_DEBT: TarotCard = TarotCard {
    name: "The Tower of Technical Debt",
    meaning: "Destruction leads to rebuilding",
    guidance: "Embrace the cleansing fire of refactoring",
};

pub const THE_HERMIT_REVIEWER: TarotCard = TarotCard {
    name: "The Hermit Reviewer",
    meaning: "Wisdom through solitary code analysis",
    guidance: "Meditate deeply on each line",
};

pub const THE_WHEEL_OF_SPRINTS: TarotCard = TarotCard {
    name: "The Wheel of Sprints",
    meaning: "Cycles of development continue",
    guidance: "Accept the rhythm of iteration",
};

pub const DECK: [TarotCard; 6] = [
    THE_DEVELOPER,
    THE_DEBUGGER,
    THE_DEPLOYER,
    THE_TOWER_OF_TECHNICAL_DEBT,
    THE_HERMIT_REVIEWER,
    THE_WHEEL_OF_SPRINTS,
];

/// A drawn card with the energy of the draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotReading {
    #[serde(flatten)]
    pub card: TarotCard,
    #[serde(rename = "cosmicEnergy")]
    pub energy: EnergyLevel,
}

/// Question keywords that summon a specific card, checked in order.
const DIRECTED_READINGS: &[(&[&str], TarotCard, EnergyLevel)] = &[
    (&["deploy", "release"], THE_DEPLOYER, EnergyLevel::High),
    (&["bug", "debug"], THE_DEBUGGER, EnergyLevel::Medium),
    (&["review", "code"], THE_HERMIT_REVIEWER, EnergyLevel::Medium),
];

/// Draw a random card. Energy is that of a ritual at a random lunar phase.
pub fn draw_card<R: Rng + ?Sized>(rng: &mut R) -> TarotReading {
    let card = DECK.choose(rng).copied().unwrap_or(THE_DEVELOPER);
    let lunar_phase = rng.gen_range(0.0..1.0);
    let energy = cosmos::calculate_energy(
        &EnergyFactors::for_activity("ritual").with_lunar_phase(lunar_phase),
    );
    TarotReading { card, energy }
}

/// Answer a question: deployment, debugging and review questions get their
/// card; anything else is a random draw.
pub fn consult_oracle<R: Rng + ?Sized>(question: &str, rng: &mut R) -> TarotReading {
    let question = question.to_lowercase();
    DIRECTED_READINGS
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|k| question.contains(k)))
        .map(|(_, card, energy)| TarotReading {
            card: *card,
            energy: *energy,
        })
        .unwrap_or_else(|| draw_card(rng))
}
