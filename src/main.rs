//! Cinemate CLI application entry point
//!
//! Search movies on OMDb, open their details, rate the ones you watched and
//! keep those ratings across sessions.
//!
//! # Usage
//!
//! ```bash
//! # Interactive search and rating (default command)
//! cinemate
//! cinemate browse inception
//!
//! # One-shot lookups
//! cinemate search the matrix
//! cinemate show tt1375666
//!
//! # Rated collection
//! cinemate watched list
//! cinemate watched summary
//! cinemate watched remove tt1375666
//!
//! # Configuration
//! cinemate config set-key <KEY>
//! cinemate config show
//!
//! # Quiet mode (only output results, tab separated)
//! cinemate -q search heat
//! ```
//!
//! # Configuration
//!
//! On first run without an API key, cinemate prompts for one. Configuration is
//! stored in the user's config directory (`~/.config/cinemate/config.toml` on
//! Linux); `CINEMATE_*` environment variables override it.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use cinemate::{
    CinemateError,
    api::OmdbClient,
    cli::{Cli, Commands},
    commands,
    config::CinemateConfig,
    store::RatedStore,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, CinemateError>;

/// Initialise tracing
///
/// The TUI owns the terminal, so interactive sessions log to a file; every
/// other command logs to stderr.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let registry = tracing_subscriber::registry();

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| "cinemate=info".into());
            registry
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| "cinemate=warn".into());
            registry
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
    Ok(())
}

/// Main entry point for the cinemate CLI application
///
/// Parses command-line arguments, loads configuration (prompting for an API
/// key when a command needs one), opens the rating store and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `CinemateError` if configuration loading fails, the store cannot
/// be opened, or any command handler returns an error.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    let log_file = match &command {
        Commands::Browse { .. } => Some(CinemateConfig::data_dir()?.join("cinemate.log")),
        _ => None,
    };
    init_logging(log_file.as_deref())?;

    if let Commands::Config { command } = &command {
        let config = CinemateConfig::load()?;
        return commands::config(config, command, cli.quiet);
    }

    let config = if command.needs_api() {
        CinemateConfig::load_or_setup()?
    } else {
        CinemateConfig::load()?
    };

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => config.store_path()?,
    };
    let mut store = RatedStore::open(&store_path)?;

    match &command {
        Commands::Browse { query } => {
            let api = Arc::new(OmdbClient::new(config.api_config()?));
            commands::browse(api, &config, store, query.clone(), cli.quiet).await?;
        }
        Commands::Search { .. } => {
            let api = OmdbClient::new(config.api_config()?);
            let query = command.get_search_query().unwrap_or_default();
            commands::search(&api, &query, &config.search_options(), cli.quiet).await?;
        }
        Commands::Show { id } => {
            let api = OmdbClient::new(config.api_config()?);
            commands::show(&api, &store, id, cli.quiet).await?;
        }
        Commands::Watched { command } => {
            commands::watched(&mut store, command, cli.quiet)?;
        }
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
