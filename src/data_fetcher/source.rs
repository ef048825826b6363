//! The collaborators the rivalry walk reads league history through.

use crate::data_fetcher::models::{League, LeagueId, MatchupEntry, NflState, TeamManagers};
use crate::error::AppError;
use std::future::Future;

/// Read-only access to league history.
///
/// [`SleeperClient`](crate::data_fetcher::api::SleeperClient) implements this
/// over HTTP; tests use [`MockLeagueSource`](crate::testing_utils::MockLeagueSource).
pub trait LeagueDataSource {
    /// Fetches the season record for `league_id`.
    fn fetch_league(
        &self,
        league_id: &LeagueId,
    ) -> impl Future<Output = Result<League, AppError>> + Send;

    /// Fetches the current NFL calendar state.
    fn fetch_nfl_state(&self) -> impl Future<Output = Result<NflState, AppError>> + Send;

    /// Fetches the manager → roster mapping for every season reachable from
    /// `league_id`.
    fn fetch_team_managers(
        &self,
        league_id: &LeagueId,
    ) -> impl Future<Output = Result<TeamManagers, AppError>> + Send;

    /// Fetches every roster's matchup row for one week of a season.
    fn fetch_matchups(
        &self,
        league_id: &LeagueId,
        week: u32,
    ) -> impl Future<Output = Result<Vec<MatchupEntry>, AppError>> + Send;
}
