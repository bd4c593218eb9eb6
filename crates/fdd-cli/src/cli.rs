//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Preview FDD documentation and consult the oracle from a terminal.
#[derive(Parser, Debug)]
#[command(name = "fdd", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FDD_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every document, priority documents first.
    List {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve and display one document.
    Show {
        /// Document slug (file name without extension).
        slug: String,

        /// Print the rendered HTML instead of the markdown body.
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the whole document as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search documents by title, body and tags.
    Search {
        /// Text to look for (matched literally, case-insensitive).
        query: String,

        /// Maximum number of results.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Channel a piece of sacred wisdom.
    Wisdom {
        /// Context: deployment, testing, debugging, meeting.
        #[arg(long)]
        context: Option<String>,
    },

    /// Draw a tarot card, or ask the oracle a question.
    Tarot {
        /// Question for the oracle.
        question: Option<String>,
    },

    /// Show the mystical roles, or a single role by id.
    Roles {
        /// Role id, e.g. "fate-master".
        id: Option<String>,
    },

    /// Show the sacred rituals, or only today's calendar entry.
    Rituals {
        /// Only today's ritual.
        #[arg(long)]
        today: bool,
    },

    /// Show frequently asked spiritual questions.
    Faq {
        /// Restrict to a category (deployment, cosmic-events, process, testing, documentation).
        #[arg(long)]
        category: Option<String>,

        /// Restrict to entries mentioning this text.
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Current moon phase, Mercury status and cosmic energy.
    Sky {
        /// Activity the energy is computed for.
        #[arg(short, long, default_value = "coding")]
        activity: String,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "content.path").
        key: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_args_default() {
        let args = parse(&["fdd"]);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_global_flags_after_subcommand() {
        let args = parse(&["fdd", "list", "--verbose", "--config", "/etc/fdd.toml"]);
        assert!(args.verbose);
        assert_eq!(args.config.as_deref(), Some("/etc/fdd.toml"));
        assert!(matches!(args.command, Some(Command::List { json: false })));
    }

    #[test]
    fn test_show_command() {
        let args = parse(&["fdd", "show", "manifesto", "--html"]);
        match args.command {
            Some(Command::Show { slug, html, json }) => {
                assert_eq!(slug, "manifesto");
                assert!(html);
                assert!(!json);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_show_html_conflicts_with_json() {
        assert!(CliArgs::try_parse_from(["fdd", "show", "faq", "--html", "--json"]).is_err());
    }

    #[test]
    fn test_search_command_limit() {
        let args = parse(&["fdd", "search", "ritual", "--limit", "3"]);
        match args.command {
            Some(Command::Search { query, limit }) => {
                assert_eq!(query, "ritual");
                assert_eq!(limit, Some(3));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_tarot_optional_question() {
        let args = parse(&["fdd", "tarot"]);
        assert!(matches!(args.command, Some(Command::Tarot { question: None })));

        let args = parse(&["fdd", "tarot", "should we deploy?"]);
        match args.command {
            Some(Command::Tarot { question }) => {
                assert_eq!(question.as_deref(), Some("should we deploy?"));
            }
            _ => panic!("Expected Tarot command"),
        }
    }

    #[test]
    fn test_sky_default_activity() {
        let args = parse(&["fdd", "sky"]);
        match args.command {
            Some(Command::Sky { activity }) => assert_eq!(activity, "coding"),
            _ => panic!("Expected Sky command"),
        }
    }

    #[test]
    fn test_config_init_command() {
        let args = parse(&["fdd", "config", "init", "--file", "/tmp/fdd.toml", "--force"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert_eq!(file.as_deref(), Some("/tmp/fdd.toml"));
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_faq_filters() {
        let args = parse(&["fdd", "faq", "--category", "testing", "-s", "karma"]);
        match args.command {
            Some(Command::Faq { category, search }) => {
                assert_eq!(category.as_deref(), Some("testing"));
                assert_eq!(search.as_deref(), Some("karma"));
            }
            _ => panic!("Expected Faq command"),
        }
    }
}
