//! Error types for FDD operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all FDD crates. Uses `thiserror` for derive macros.
//!
//! Most errors never reach end users: the content resolver logs them and
//! degrades to an absent document or an empty listing.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in FDD operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error, optionally tagged with the path that caused it.
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Path being accessed, when known.
        path: Option<PathBuf>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" ({})", p.display()),
        None => String::new(),
    }
}

impl Error {
    /// Wrap an I/O error without path context.
    pub fn io(err: std::io::Error) -> Self {
        Self::Io {
            source: err,
            path: None,
        }
    }

    /// Wrap an I/O error with the path that was being accessed.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            source: err,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error for a typed resource, e.g. `("document", "faq")`.
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound(format!("{kind} '{id}'"))
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true for [`Error::NotFound`], and for I/O errors of kind `NotFound`.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Returns true for I/O errors.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}

/// Result type alias using FDD's Error type.
pub type Result<T> = std::result::Result<T, Error>;
