use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_league_id;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// League the season walk starts from. Each season links to its predecessor,
    /// so this should be the most recent season of the league.
    pub league_id: String,
    /// Base URL of the Sleeper read API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// First week that is never fetched. Defaults to 18.
    #[serde(default = "default_week_limit")]
    pub week_limit: u32,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_week_limit() -> u32 {
    constants::SEASON_WEEK_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            league_id: String::new(),
            api_base_url: default_api_base_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            week_limit: default_week_limit(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts the user for a league id and creates one.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `RIVALRY_LEAGUE_ID` - Override league id
    /// - `RIVALRY_API_BASE_URL` - Override API base URL
    /// - `RIVALRY_LOG_FILE` - Override log file path
    /// - `RIVALRY_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if std::env::var(env_vars::LEAGUE_ID).is_ok() {
            // Filled in by the override pass below
            Config::default()
        } else {
            let config = Config {
                league_id: prompt_for_league_id().await?,
                ..Config::default()
            };
            config.validate()?;
            config.save().await?;
            config
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    /// Unparsable numeric values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(league_id) = lookup(env_vars::LEAGUE_ID) {
            self.league_id = league_id;
        }

        if let Some(api_base_url) = lookup(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("League Id:");
            println!("{}", config.league_id);
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Week Limit:");
            println!("{}", config.week_limit);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}.log", constants::APP_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist. A trailing slash on the base URL is dropped.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
