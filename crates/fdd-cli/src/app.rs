//! The `fdd` application: logging setup and command dispatch.

use std::sync::Arc;

use chrono::{Datelike, Local, Timelike};
use fdd_content::ContentResolver;
use fdd_content::resolver::DEFAULT_EXTENSION;
use fdd_core::Result;
use fdd_core::traits::ConfigProvider;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::FddConfig;
use crate::content_handlers::{self, ShowFormat};
use crate::{config_handlers, oracle_handlers};

// ============================================================================
// FddCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct FddCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    version: String,
    extension: String,
}

impl FddCli<FddConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = FddConfig::load(args.config.as_deref())?;
        let extension = config.content.extension.clone();
        Ok(Self::new(name, config).with_extension(extension))
    }
}

impl<C: ConfigProvider> FddCli<C> {
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Source file extension documents are looked up with.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Resolver over the configured docs directory.
    pub fn resolver(&self) -> Result<ContentResolver> {
        Ok(ContentResolver::from_config(&*self.config)?.with_extension(&self.extension))
    }

    /// Initialise tracing-based logging on stderr.
    ///
    /// `RUST_LOG` wins when set; otherwise the verbosity flags pick the level.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::List { json }) => {
                content_handlers::handle_list(&self.resolver()?, json).await
            }
            Some(Command::Show { slug, html, json }) => {
                let format = ShowFormat::from_flags(html, json);
                content_handlers::handle_show(&self.resolver()?, &slug, format).await
            }
            Some(Command::Search { query, limit }) => {
                content_handlers::handle_search(&self.resolver()?, &query, limit).await
            }
            Some(Command::Wisdom { context }) => {
                oracle_handlers::handle_wisdom(context.as_deref(), &mut rand::thread_rng())
            }
            Some(Command::Tarot { question }) => {
                oracle_handlers::handle_tarot(question.as_deref(), &mut rand::thread_rng())
            }
            Some(Command::Roles { id }) => oracle_handlers::handle_roles(id.as_deref()),
            Some(Command::Rituals { today }) => {
                oracle_handlers::handle_rituals(today.then(|| Local::now().weekday()))
            }
            Some(Command::Faq { category, search }) => {
                oracle_handlers::handle_faq(category.as_deref(), search.as_deref())
            }
            Some(Command::Sky { activity }) => {
                let now = Local::now();
                oracle_handlers::handle_sky(
                    now.date_naive(),
                    now.hour(),
                    &activity,
                    &mut rand::thread_rng(),
                )
            }
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {} (use --help for usage)", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
