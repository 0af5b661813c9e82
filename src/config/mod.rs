//! Configuration module for cinemate
//!
//! Manages the OMDb API key, the endpoint, search tuning and the store
//! location. Configuration is stored in the user's config directory and can
//! be overridden with `CINEMATE_*` environment variables.

mod setup;

pub use setup::first_time_setup;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::api::{ApiConfig, DEFAULT_ENDPOINT};
use crate::detail::DEFAULT_TITLE;
use crate::search::{MIN_QUERY_LEN, SearchOptions};

const APP_DIR: &str = "cinemate";
const ENV_PREFIX: &str = "CINEMATE";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_debounce_ms() -> u64 {
    500
}

const fn default_min_query_len() -> usize {
    MIN_QUERY_LEN
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CinemateConfig {
    /// OMDb API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the metadata API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Quiet period after the last keystroke before searching
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Shortest trimmed query that triggers a search
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Override for the rating store directory
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Terminal title while no movie is open
    #[serde(default = "default_title")]
    pub default_title: String,
}

impl Default for CinemateConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            store_path: None,
            default_title: default_title(),
        }
    }
}

impl CinemateConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join(APP_DIR).join("config.toml"))
    }

    /// Directory for the store and the log file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))
    }

    /// Location of the rating store, honouring `store_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no override is set and the data directory
    /// cannot be determined.
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("store")),
        }
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, then apply environment overrides
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, Environment::with_prefix(ENV_PREFIX))
    }

    // Environment values stay strings; numeric fields are converted on deserialize.
    fn load_with(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// See [`save`](Self::save).
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        tracing::debug!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Set the API key and persist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is blank or saving fails.
    pub fn set_api_key(&mut self, key: &str) -> Result<(), ConfigError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::Message("API key must not be empty".to_string()));
        }
        self.api_key = Some(key.to_string());
        self.save()
    }

    /// Settings for the HTTP client
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no API key is configured.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::Message(
                    "No API key configured. Run `cinemate config set-key <KEY>` or set CINEMATE_API_KEY".to_string(),
                )
            })?;

        Ok(ApiConfig::new(key).with_endpoint(&self.endpoint))
    }

    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            debounce: Duration::from_millis(self.debounce_ms),
            min_query_len: self.min_query_len,
        }
    }

    /// Load configuration, running first-time setup if no API key is known
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading, prompting or saving fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        if config.api_key.is_some() {
            Ok(config)
        } else {
            first_time_setup(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;
    use tempfile::TempDir;

    fn load_with_env(vars: &[(&str, &str)]) -> CinemateConfig {
        let dir = TempDir::new().unwrap();
        let env: Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CinemateConfig::load_with(
            &dir.path().join("config.toml"),
            Environment::with_prefix(ENV_PREFIX).source(Some(env)),
        )
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = CinemateConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.endpoint, "https://www.omdbapi.com/");
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.default_title, "CineMate");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CinemateConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.debounce_ms, 500);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = CinemateConfig {
            api_key: Some("abc123".to_string()),
            debounce_ms: 250,
            store_path: Some(PathBuf::from("/tmp/cinemate-store")),
            ..CinemateConfig::default()
        };

        config.save_to(&path).unwrap();
        let loaded = CinemateConfig::load_from(&path).unwrap();

        assert_eq!(loaded.debounce_ms, 250);
        assert_eq!(loaded.store_path, Some(PathBuf::from("/tmp/cinemate-store")));
        assert_eq!(loaded.min_query_len, 3);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min_query_len = 2\n").unwrap();

        let loaded = CinemateConfig::load_from(&path).unwrap();
        assert_eq!(loaded.min_query_len, 2);
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_api_config_requires_key() {
        let config = CinemateConfig::default();
        assert!(config.api_config().is_err());

        let config = CinemateConfig {
            api_key: Some("   ".to_string()),
            ..CinemateConfig::default()
        };
        assert!(config.api_config().is_err());

        let config = CinemateConfig {
            api_key: Some("key".to_string()),
            ..CinemateConfig::default()
        };
        let api = config.api_config().unwrap();
        assert_eq!(api.api_key, "key");
        assert_eq!(api.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_search_options() {
        let config = CinemateConfig {
            debounce_ms: 120,
            min_query_len: 4,
            ..CinemateConfig::default()
        };
        let options = config.search_options();
        assert_eq!(options.debounce, Duration::from_millis(120));
        assert_eq!(options.min_query_len, 4);
    }

    #[test]
    fn test_store_path_override() {
        let config = CinemateConfig {
            store_path: Some(PathBuf::from("/srv/ratings")),
            ..CinemateConfig::default()
        };
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/srv/ratings"));
    }

    #[test]
    fn test_env_api_key_is_kept_verbatim() {
        for key in ["12e45678", "01234567", "abcdef12"] {
            let config = load_with_env(&[("CINEMATE_API_KEY", key)]);
            assert_eq!(config.api_key.as_deref(), Some(key));
            assert_eq!(config.api_config().unwrap().api_key, key);
        }
    }

    #[test]
    fn test_env_numbers_still_deserialize() {
        let config = load_with_env(&[("CINEMATE_DEBOUNCE_MS", "250"), ("CINEMATE_MIN_QUERY_LEN", "2")]);
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.min_query_len, 2);
    }

    #[test]
    fn test_set_api_key_rejects_blank() {
        let mut config = CinemateConfig::default();
        assert!(config.set_api_key("   ").is_err());
        assert!(config.set_api_key("").is_err());
        assert!(config.api_key.is_none());
    }
}
