use super::Config;
use crate::constants::validation::{MAX_WEEK_LIMIT, MIN_WEEK_LIMIT};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - League id cannot be empty and must be numeric (Sleeper ids are digit strings)
/// - API base URL must start with http:// or https://
/// - HTTP timeout must be positive
/// - Week limit must leave room for at least one regular season week
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_league_id(&config.league_id)?;

    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://")
    {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be greater than zero",
        ));
    }

    if !(MIN_WEEK_LIMIT..=MAX_WEEK_LIMIT).contains(&config.week_limit) {
        return Err(AppError::config_error(format!(
            "Week limit must be between {MIN_WEEK_LIMIT} and {MAX_WEEK_LIMIT}, got {}",
            config.week_limit
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Validates a single league id.
pub fn validate_league_id(league_id: &str) -> Result<(), AppError> {
    if league_id.is_empty() {
        return Err(AppError::config_error("League id cannot be empty"));
    }
    if !league_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::config_error(format!(
            "League id must contain only digits, got '{league_id}'"
        )));
    }
    Ok(())
}
