use crate::config::Config;
use crate::data_fetcher::models::{League, LeagueId, MatchupEntry, NflState, Roster, TeamManagers};
use crate::data_fetcher::source::LeagueDataSource;
use crate::error::AppError;
use reqwest::Client;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_league_url, build_matchups_url, build_nfl_state_url, build_rosters_url};

/// [`LeagueDataSource`] backed by the Sleeper read API.
///
/// Season records are kept once fetched, so the roster walk and the rivalry
/// walk share one request per season. Clones share the same records.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    api_base_url: String,
    leagues: Arc<RwLock<HashMap<LeagueId, League>>>,
}

impl SleeperClient {
    /// Builds a client from the configured base URL and timeout.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, &config.api_base_url))
    }

    pub fn with_client(client: Client, api_base_url: &str) -> Self {
        Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            leagues: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn fetch_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>, AppError> {
        let url = build_rosters_url(&self.api_base_url, league_id.as_str());
        // Sleeper answers `null` for a league it does not know
        let rosters = fetch::<Option<Vec<Roster>>>(&self.client, &url).await?;
        Ok(rosters.unwrap_or_default())
    }
}

impl LeagueDataSource for SleeperClient {
    #[instrument(skip(self))]
    async fn fetch_league(&self, league_id: &LeagueId) -> Result<League, AppError> {
        let cached = self.leagues.read().await.get(league_id).cloned();
        if let Some(league) = cached {
            debug!("Using stored season record for league {league_id}");
            return Ok(league);
        }

        let url = build_league_url(&self.api_base_url, league_id.as_str());

        match fetch::<Option<League>>(&self.client, &url).await {
            Ok(Some(league)) => {
                debug!(
                    "Fetched league {} (season {}, playoffs from week {})",
                    league.league_id, league.season, league.settings.playoff_week_start
                );
                self.leagues
                    .write()
                    .await
                    .insert(league_id.clone(), league.clone());
                Ok(league)
            }
            Ok(None) | Err(AppError::ApiNotFound { .. }) => {
                error!("League {league_id} does not exist");
                Err(AppError::league_not_found(league_id.as_str()))
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_nfl_state(&self) -> Result<NflState, AppError> {
        let url = build_nfl_state_url(&self.api_base_url);
        let state = fetch::<NflState>(&self.client, &url).await?;
        info!(
            "NFL state: {:?}, display week {}",
            state.season_type, state.display_week
        );
        Ok(state)
    }

    /// Walks the whole season chain, collecting each season's rosters.
    #[instrument(skip(self))]
    async fn fetch_team_managers(&self, league_id: &LeagueId) -> Result<TeamManagers, AppError> {
        let mut managers = TeamManagers::new();
        let mut visited = HashSet::new();
        let mut next = Some(league_id.clone());

        while let Some(current) = next.take() {
            if !visited.insert(current.clone()) {
                warn!("League chain loops back to {current}, stopping roster walk");
                break;
            }

            let (league, rosters) =
                tokio::try_join!(self.fetch_league(&current), self.fetch_rosters(&current))?;
            debug!(
                "Collected {} rosters for season {}",
                rosters.len(),
                league.season
            );
            managers.insert_season(&current, &rosters);
            next = league.previous_league_id;
        }

        info!("Collected rosters for {} seasons", visited.len());
        Ok(managers)
    }

    #[instrument(skip(self))]
    async fn fetch_matchups(
        &self,
        league_id: &LeagueId,
        week: u32,
    ) -> Result<Vec<MatchupEntry>, AppError> {
        let url = build_matchups_url(&self.api_base_url, league_id.as_str(), week);

        match fetch::<Option<Vec<MatchupEntry>>>(&self.client, &url).await {
            Ok(entries) => Ok(entries.unwrap_or_default()),
            Err(AppError::ApiNotFound { .. }) => Err(AppError::matchups_unavailable(
                league_id.as_str(),
                week,
            )),
            Err(e) => Err(e),
        }
    }
}
