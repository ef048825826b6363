//! URL building utilities for Sleeper API endpoints

/// Builds the URL of a league (season) record.
///
/// # Example
/// ```
/// use league_rivalry::data_fetcher::api::build_league_url;
///
/// let url = build_league_url("https://api.sleeper.app/v1", "1048302346278506496");
/// assert_eq!(url, "https://api.sleeper.app/v1/league/1048302346278506496");
/// ```
pub fn build_league_url(api_base_url: &str, league_id: &str) -> String {
    format!("{api_base_url}/league/{league_id}")
}

/// Builds the URL listing every roster of a league.
///
/// # Example
/// ```
/// use league_rivalry::data_fetcher::api::build_rosters_url;
///
/// let url = build_rosters_url("https://api.sleeper.app/v1", "42");
/// assert_eq!(url, "https://api.sleeper.app/v1/league/42/rosters");
/// ```
pub fn build_rosters_url(api_base_url: &str, league_id: &str) -> String {
    format!("{api_base_url}/league/{league_id}/rosters")
}

/// Builds the URL of one week's matchups.
///
/// # Example
/// ```
/// use league_rivalry::data_fetcher::api::build_matchups_url;
///
/// let url = build_matchups_url("https://api.sleeper.app/v1", "42", 7);
/// assert_eq!(url, "https://api.sleeper.app/v1/league/42/matchups/7");
/// ```
pub fn build_matchups_url(api_base_url: &str, league_id: &str, week: u32) -> String {
    format!("{api_base_url}/league/{league_id}/matchups/{week}")
}

/// Builds the URL of the current NFL state.
///
/// # Example
/// ```
/// use league_rivalry::data_fetcher::api::build_nfl_state_url;
///
/// let url = build_nfl_state_url("https://api.sleeper.app/v1");
/// assert_eq!(url, "https://api.sleeper.app/v1/state/nfl");
/// ```
pub fn build_nfl_state_url(api_base_url: &str) -> String {
    format!("{api_base_url}/state/nfl")
}
