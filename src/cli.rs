//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for cinemate using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search-and-rate terminal UI (default)
//! - **search**: One-shot search, results printed to stdout
//! - **show**: One-shot detail lookup by IMDb identifier
//! - **watched**: Inspect or edit the rated collection
//! - **config**: Show or edit the configuration
//!
//! # Examples
//!
//! ```
//! use cinemate::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Search { query } => println!("searching {}", query.join(" ")),
//!     _ => {}
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rated collection subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum WatchedCommands {
    /// List every rated movie
    #[command(visible_alias = "ls")]
    List,

    /// Show averages over the rated movies
    Summary,

    /// Remove a movie from the collection
    #[command(visible_alias = "rm")]
    Remove {
        /// IMDb identifier (e.g. tt1375666)
        id: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the path of the config file
    Path,

    /// Store the OMDb API key
    #[command(name = "set-key")]
    SetKey {
        /// The API key
        #[arg(value_name = "KEY")]
        key: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "cinemate")]
#[command(about = "Search movies, rate the ones you watched", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this rating store instead of the configured one
    #[arg(long = "store", value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive search and rating (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search query
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Search titles and print the results
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query
        #[arg(value_name = "QUERY", num_args = 1.., required = true)]
        query: Vec<String>,
    },

    /// Show the full record of one movie
    Show {
        /// IMDb identifier (e.g. tt1375666)
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Manage the rated collection
    #[command(visible_alias = "w")]
    Watched {
        #[command(subcommand)]
        command: WatchedCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { query: None })
    }
}

impl Commands {
    /// Search words joined back into one query
    #[must_use]
    pub fn get_search_query(&self) -> Option<String> {
        match self {
            Self::Search { query } => Some(query.join(" ")),
            _ => None,
        }
    }

    /// Whether the command needs the OMDb API
    #[must_use]
    pub const fn needs_api(&self) -> bool {
        matches!(self, Self::Browse { .. } | Self::Search { .. } | Self::Show { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_browse() {
        let cli = Cli::parse_from(["cinemate"]);
        assert_eq!(cli.get_command(), Commands::Browse { query: None });
        assert!(!cli.quiet);
    }

    #[test]
    fn test_browse_with_query() {
        let cli = Cli::parse_from(["cinemate", "b", "heat"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: Some("heat".to_string())
            }
        );
    }

    #[test]
    fn test_search_joins_words() {
        let cli = Cli::parse_from(["cinemate", "search", "the", "matrix"]);
        let command = cli.get_command();
        assert_eq!(command.get_search_query().as_deref(), Some("the matrix"));
        assert!(command.needs_api());
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["cinemate", "search"]).is_err());
    }

    #[test]
    fn test_show() {
        let cli = Cli::parse_from(["cinemate", "show", "tt1375666"]);
        assert_eq!(
            cli.get_command(),
            Commands::Show {
                id: "tt1375666".to_string()
            }
        );
    }

    #[test]
    fn test_watched_remove_alias() {
        let cli = Cli::parse_from(["cinemate", "watched", "rm", "tt1375666"]);
        let command = cli.get_command();
        assert_eq!(
            command,
            Commands::Watched {
                command: WatchedCommands::Remove {
                    id: "tt1375666".to_string()
                }
            }
        );
        assert!(!command.needs_api());
    }

    #[test]
    fn test_config_set_key() {
        let cli = Cli::parse_from(["cinemate", "config", "set-key", "abc"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::SetKey {
                    key: "abc".to_string()
                }
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cinemate", "watched", "list", "-q", "--store", "/tmp/s"]);
        assert!(cli.quiet);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/s")));
    }
}
