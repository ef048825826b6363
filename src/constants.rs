//! Application-wide constants and configuration values
//!
//! Centralizes the magic numbers used by the fetch layer and the rivalry walk.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default base URL of the Sleeper read API
pub const DEFAULT_API_BASE_URL: &str = "https://api.sleeper.app/v1";

/// First week that is never fetched for a season. Weeks at or beyond this
/// bound are exhibition weeks with no competitive meaning for a rivalry.
pub const SEASON_WEEK_LIMIT: u32 = 18;

/// Name used for the config directory and the default log file
pub const APP_NAME: &str = "league_rivalry";

/// Environment variable names
pub mod env_vars {
    /// Overrides the league the walk starts from
    pub const LEAGUE_ID: &str = "RIVALRY_LEAGUE_ID";

    /// Overrides the API base URL
    pub const API_BASE_URL: &str = "RIVALRY_API_BASE_URL";

    /// Overrides the log file path
    pub const LOG_FILE: &str = "RIVALRY_LOG_FILE";

    /// Overrides the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "RIVALRY_HTTP_TIMEOUT";
}

/// Retry configuration for the generic fetch
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Initial backoff delay, doubled after every attempt (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}

/// Validation bounds for configurable values
pub mod validation {
    /// Smallest accepted week limit (at least one regular season week)
    pub const MIN_WEEK_LIMIT: u32 = 2;

    /// Largest accepted week limit
    pub const MAX_WEEK_LIMIT: u32 = 25;
}
