//! Configuration for the `fdd` tool.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FDD_CONFIG` environment variable
//! 3. XDG default: `~/.config/fdd/config.toml`
//! 4. Built-in defaults
//!
//! `FDD_*` environment variables are layered on top of whichever file is
//! found, e.g. `FDD_CONTENT_PATH=/srv/site/docs`.

use std::path::PathBuf;

use confyg::{Confygery, env};
use fdd_core::traits::ConfigProvider;
use fdd_core::util::paths::expand_tilde;
use fdd_core::{Error, Result};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "FDD";
pub const CONFIG_ENV_VAR: &str = "FDD_CONFIG";

// ============================================================================
// Configuration structs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FddConfig {
    /// Project name, used for the config directory and env var prefix.
    pub project_name: String,

    /// Directory the content directory is resolved against. Defaults to cwd.
    pub base_path: Option<String>,

    pub content: ContentConfig,
}

/// Where documentation sources live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Docs directory. Defaults to `<base_path>/docs`.
    pub path: Option<String>,

    /// Source file extension, without the dot.
    pub extension: String,
}

impl Default for FddConfig {
    fn default() -> Self {
        Self {
            project_name: "fdd".to_string(),
            base_path: None,
            content: ContentConfig::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            extension: "md".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FddConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is not an error; defaults and the
    /// environment still apply.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("content");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fdd").join("config.toml"))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Flatten this config into `FDD_`-prefixed environment variable pairs.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value =
            toml::Value::try_from(self).map_err(|e| Error::serialization(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for FddConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_path(&self, content_type: &str) -> Result<PathBuf> {
        match &self.content.path {
            Some(p) => Ok(expand_tilde(p)),
            None => Ok(self.base_path()?.join(content_type)),
        }
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                flatten_toml_value(val, &format!("{prefix}_{}", key.to_uppercase()), out);
            }
        }
        toml::Value::Array(items) => {
            if let Ok(json) = serde_json::to_string(items) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
