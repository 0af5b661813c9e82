//! Interactive setup for first-time configuration
//!
//! Asks for the OMDb API key when none is configured yet.

use super::CinemateConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Prompt for an API key and save it into `config`
///
/// Other settings already loaded (for instance from the environment) are
/// kept as they are.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup(mut config: CinemateConfig) -> Result<CinemateConfig, ConfigError> {
    println!("Welcome to cinemate! An OMDb API key is needed to search for movies.");
    println!("Get a free one at https://www.omdbapi.com/apikey.aspx\n");

    let api_key: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("OMDb API key")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("The key must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    config.set_api_key(&api_key)?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

