//! Command-line previewer for FDD documentation.
//!
//! # Key Abstractions
//!
//! - [`FddCli`]: the application, generic over a [`ConfigProvider`]
//! - [`CliArgs`]: clap argument tree
//! - [`FddConfig`]: file + environment configuration
//!
//! [`ConfigProvider`]: fdd_core::traits::ConfigProvider

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod content_handlers;
pub mod oracle_handlers;

pub use app::FddCli;
pub use cli::{CliArgs, Command};
pub use config::FddConfig;
