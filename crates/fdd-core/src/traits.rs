//! Core traits for FDD configuration.
//!
//! [`ConfigProvider`] abstracts where content lives so that the resolver can
//! be driven by a TOML-backed config in the CLI or by a hand-built struct in
//! tests and host applications.

use std::path::PathBuf;

use crate::Result;

/// Trait for application configuration.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use fdd_core::traits::ConfigProvider;
/// use fdd_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "fdd"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_path(&self, content_type: &str) -> Result<PathBuf> {
///         Ok(self.root.join(content_type))
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all project data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined (e.g., the current
    /// directory is unavailable).
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content type.
    ///
    /// The resolver asks for `"docs"`. Implementations decide how to map the
    /// key onto the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the content type is unknown or the path
    /// cannot be resolved.
    fn content_path(&self, content_type: &str) -> Result<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig {
        name: String,
        base: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            &self.name
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(self.base.clone())
        }

        fn content_path(&self, content_type: &str) -> Result<PathBuf> {
            match content_type {
                "docs" => Ok(self.base.join("docs")),
                other => Err(crate::Error::config(format!(
                    "Unknown content type: {other}"
                ))),
            }
        }
    }

    #[test]
    fn test_config_provider_paths() {
        let config = TestConfig {
            name: "fdd".into(),
            base: PathBuf::from("/site"),
        };
        assert_eq!(config.project_name(), "fdd");
        assert_eq!(config.base_path().unwrap(), PathBuf::from("/site"));
        assert_eq!(
            config.content_path("docs").unwrap(),
            PathBuf::from("/site/docs")
        );
    }

    #[test]
    fn test_config_provider_unknown_content_type() {
        let config = TestConfig {
            name: "fdd".into(),
            base: PathBuf::from("/site"),
        };
        let err = config.content_path("graphs").unwrap_err();
        assert!(err.to_string().contains("graphs"));
    }

    #[test]
    fn test_config_provider_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestConfig>();
    }
}
