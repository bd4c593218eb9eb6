//! FDD Core: shared types, traits, errors, and utilities.
//!
//! This crate provides the foundational types used across all FDD crates.
//! It has no internal FDD dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`cosmic`]: Energy level and aura color vocabulary
//! - [`traits`]: Configuration trait
//! - [`util`]: File and path utilities

#![doc = include_str!("../README.md")]

pub mod cosmic;
pub mod error;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use cosmic::{AuraColor, EnergyLevel};
pub use error::{Error, Result};
pub use traits::ConfigProvider;
