//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async content-directory listing and reading
//! - [`paths`]: Tilde expansion for configured directories

pub mod files;
pub mod paths;
