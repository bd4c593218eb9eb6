//! Pickers and static tables that accompany documentation pages.
//!
//! Random choices take a caller-supplied [`rand::Rng`]; pass a seeded
//! `StdRng` for repeatable output or `rand::thread_rng()` otherwise.

#![doc = include_str!("../README.md")]

pub mod cosmos;
pub mod faq;
pub mod loading;
pub mod rituals;
pub mod roles;
pub mod tarot;
pub mod wisdom;

pub use cosmos::{EnergyFactors, MoonPhase, SkyReport};
pub use faq::{FaqCategory, FaqEntry};
pub use loading::LoadingState;
pub use rituals::{CalendarDay, Ritual, RitualDetail};
pub use roles::{Archetype, Role};
pub use tarot::{TarotCard, TarotReading};
pub use wisdom::{Wisdom, WisdomSource};
