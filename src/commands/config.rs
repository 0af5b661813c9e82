//! Config command - show or edit configuration

use colored::Colorize;

use crate::{CinemateError, cli::ConfigCommands, config::CinemateConfig};

type Result<T> = std::result::Result<T, CinemateError>;

/// Mask all but the last four characters of a key
#[must_use]
pub fn mask_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let visible: String = key.chars().skip(count - 4).collect();
    format!("{}{visible}", "*".repeat(count - 4))
}

/// Execute a config subcommand
///
/// # Errors
/// Returns an error if the config file location cannot be determined or
/// the configuration cannot be saved.
pub fn execute(mut config: CinemateConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let key = config.api_key.as_deref().map_or_else(|| "(not set)".to_string(), mask_key);
            let store = config.store_path()?;
            println!("{} {key}", "api_key:".cyan());
            println!("{} {}", "endpoint:".cyan(), config.endpoint);
            println!("{} {}", "debounce_ms:".cyan(), config.debounce_ms);
            println!("{} {}", "min_query_len:".cyan(), config.min_query_len);
            println!("{} {}", "store_path:".cyan(), store.display());
            println!("{} {}", "default_title:".cyan(), config.default_title);
        }
        ConfigCommands::Path => {
            println!("{}", CinemateConfig::config_path()?.display());
        }
        ConfigCommands::SetKey { key } => {
            config.set_api_key(key)?;
            tracing::info!("API key updated");
            if !quiet {
                println!("API key saved to {}", CinemateConfig::config_path()?.display());
            }
        }
    }
    Ok(())
}
