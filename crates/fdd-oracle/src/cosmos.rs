//! Cosmic energy, Mercury retrograde and moon phase calendars.
//!
//! Everything here is a pure function of its inputs: callers pass the date
//! (and an RNG where a choice is random) instead of the module reading the
//! clock, which keeps the calendars testable against fixed dates.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use fdd_core::{AuraColor, EnergyLevel};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

// ============================================================================
// Energy
// ============================================================================

/// Energy bonus per spiritual activity.
pub const ACTIVITY_MODIFIERS: &[(&str, f64)] = &[
    ("coding", 25.0),
    ("meditation", 35.0),
    ("debugging", 15.0),
    ("deployment", 40.0),
    ("retrospective", 30.0),
    ("ritual", 45.0),
];

/// Bonus for activities not in [`ACTIVITY_MODIFIERS`].
pub const DEFAULT_ACTIVITY_MODIFIER: f64 = 20.0;

const LUNAR_WEIGHT: f64 = 30.0;
const HOUR_WEIGHT: f64 = 20.0;

/// Inputs to [`calculate_energy`].
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyFactors {
    /// 0.0 is a new moon, 1.0 a full moon.
    pub lunar_phase: f64,
    /// Hour of day, 0..24. Distance from noon adds energy.
    pub time_of_day: f64,
    pub activity: String,
}

impl Default for EnergyFactors {
    fn default() -> Self {
        Self {
            lunar_phase: 0.5,
            time_of_day: 12.0,
            activity: "coding".to_string(),
        }
    }
}

impl EnergyFactors {
    /// Default factors for the given activity.
    pub fn for_activity(activity: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            ..Self::default()
        }
    }

    pub fn with_lunar_phase(mut self, lunar_phase: f64) -> Self {
        self.lunar_phase = lunar_phase;
        self
    }

    pub fn with_time_of_day(mut self, hour: f64) -> Self {
        self.time_of_day = hour;
        self
    }
}

/// Bonus for an activity name.
pub fn activity_modifier(activity: &str) -> f64 {
    ACTIVITY_MODIFIERS
        .iter()
        .find(|(name, _)| *name == activity)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(DEFAULT_ACTIVITY_MODIFIER)
}

/// Raw score: `lunar × 30 + |12 − hour| / 12 × 20 + activity bonus`.
pub fn energy_score(factors: &EnergyFactors) -> f64 {
    let hour_energy = (12.0 - factors.time_of_day).abs() / 12.0;
    factors.lunar_phase * LUNAR_WEIGHT + hour_energy * HOUR_WEIGHT + activity_modifier(&factors.activity)
}

/// Energy level for the factors: ≥80 transcendent, ≥60 high, ≥40 medium.
pub fn calculate_energy(factors: &EnergyFactors) -> EnergyLevel {
    let score = energy_score(factors);
    if score >= 80.0 {
        EnergyLevel::Transcendent
    } else if score >= 60.0 {
        EnergyLevel::High
    } else if score >= 40.0 {
        EnergyLevel::Medium
    } else {
        EnergyLevel::Low
    }
}

/// Colors an aura may take at each energy level.
pub fn auras_for_energy(energy: EnergyLevel) -> &'static [AuraColor] {
    match energy {
        EnergyLevel::Low => &[AuraColor::Blue, AuraColor::Indigo],
        EnergyLevel::Medium => &[AuraColor::Green, AuraColor::Yellow, AuraColor::Purple],
        EnergyLevel::High => &[AuraColor::Orange, AuraColor::Red, AuraColor::Violet],
        EnergyLevel::Transcendent => &[AuraColor::Gold, AuraColor::Silver, AuraColor::Violet],
    }
}

/// Random aura color fitting `energy`.
pub fn aura_for_energy<R: Rng + ?Sized>(energy: EnergyLevel, rng: &mut R) -> AuraColor {
    auras_for_energy(energy)
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

// ============================================================================
// Mercury
// ============================================================================

/// Inclusive day-of-year ranges when Mercury is retrograde.
pub const RETROGRADE_WINDOWS: &[(u32, u32)] = &[(20, 41), (140, 161), (260, 281)];

pub fn is_mercury_retrograde(date: NaiveDate) -> bool {
    let day = date.ordinal();
    RETROGRADE_WINDOWS
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&day))
}

/// Aligned when Mercury is direct and energy is at least medium.
pub fn is_cosmically_aligned(energy: EnergyLevel, date: NaiveDate) -> bool {
    !is_mercury_retrograde(date) && energy >= EnergyLevel::Medium
}

// ============================================================================
// Moon
// ============================================================================

pub const LUNAR_CYCLE_DAYS: f64 = 29.53;

/// A known new moon that anchors the cycle.
pub fn reference_new_moon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 11).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }

    /// Phase for a position in the cycle, `0.0 <= fraction < 1.0`, in eighths.
    pub fn from_fraction(fraction: f64) -> Self {
        let index = (fraction.clamp(0.0, 1.0) * 8.0).floor() as usize;
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.emoji())
    }
}

/// Position in the lunar cycle on `date`, in `[0, 1)`.
///
/// Dates before the reference new moon wrap around instead of going negative.
pub fn lunar_cycle_fraction(date: NaiveDate) -> f64 {
    let days = (date - reference_new_moon()).num_days() as f64;
    days.rem_euclid(LUNAR_CYCLE_DAYS) / LUNAR_CYCLE_DAYS
}

pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    MoonPhase::from_fraction(lunar_cycle_fraction(date))
}

// ============================================================================
// Sky report
// ============================================================================

/// Snapshot of the cosmic conditions at a moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyReport {
    pub date: NaiveDate,
    pub moon_phase: MoonPhase,
    pub mercury_retrograde: bool,
    pub energy: EnergyLevel,
    pub aligned: bool,
}

impl SkyReport {
    /// Conditions on `date` at `hour` for the given activity.
    pub fn observe(date: NaiveDate, hour: u32, activity: &str) -> Self {
        let energy = calculate_energy(
            &EnergyFactors::for_activity(activity).with_time_of_day(f64::from(hour)),
        );
        Self {
            date,
            moon_phase: moon_phase(date),
            mercury_retrograde: is_mercury_retrograde(date),
            energy,
            aligned: is_cosmically_aligned(energy, date),
        }
    }
}
