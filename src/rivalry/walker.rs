//! Walks a league's season chain backwards and builds the rivalry record.

use super::extractor::{Extraction, SeasonPairing, extract_rivalry_matchup};
use super::models::{GameTypes, Rivalry, SeasonOutcome, SeasonReport, SkipReason};
use super::weeks::weeks_to_fetch;
use crate::constants::SEASON_WEEK_LIMIT;
use crate::data_fetcher::models::{League, LeagueId, NflState, TeamManagers};
use crate::data_fetcher::source::LeagueDataSource;
use crate::error::AppError;
use futures::future::try_join_all;
use std::collections::HashSet;
use tracing::{debug, error, info, instrument, warn};

/// Knobs for one rivalry computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RivalryOptions {
    pub game_types: GameTypes,
    /// First week that is never fetched.
    pub week_limit: u32,
}

impl Default for RivalryOptions {
    fn default() -> Self {
        Self {
            game_types: GameTypes::default(),
            week_limit: SEASON_WEEK_LIMIT,
        }
    }
}

/// Computes the head-to-head record of two managers over every season
/// reachable from `league_id`.
///
/// Returns `Ok(None)` when either manager id is missing or blank. Seasons in
/// which a manager had no roster are skipped; a season whose weekly fetches
/// fail is reported as failed and the walk moves on. Failing to fetch the NFL
/// state, the roster mapping or a season record is fatal.
///
/// # Example
/// ```rust,no_run
/// use league_rivalry::config::Config;
/// use league_rivalry::data_fetcher::{LeagueId, SleeperClient};
/// use league_rivalry::rivalry::{RivalryOptions, compute_rivalry};
///
/// #[tokio::main]
/// async fn main() -> Result<(), league_rivalry::AppError> {
///     let config = Config::load().await?;
///     let client = SleeperClient::new(&config)?;
///     let league_id = LeagueId::new(config.league_id.clone());
///
///     if let Some(rivalry) = compute_rivalry(
///         &client,
///         &league_id,
///         Some("338218741453520896"),
///         Some("470093015231868928"),
///         RivalryOptions::default(),
///     )
///     .await?
///     {
///         println!("{}-{}-{}", rivalry.wins.one, rivalry.wins.two, rivalry.ties);
///     }
///     Ok(())
/// }
/// ```
#[instrument(skip(source, options))]
pub async fn compute_rivalry<S: LeagueDataSource>(
    source: &S,
    league_id: &LeagueId,
    manager_one: Option<&str>,
    manager_two: Option<&str>,
    options: RivalryOptions,
) -> Result<Option<Rivalry>, AppError> {
    let (Some(manager_one), Some(manager_two)) = (
        manager_one.map(str::trim).filter(|id| !id.is_empty()),
        manager_two.map(str::trim).filter(|id| !id.is_empty()),
    ) else {
        info!("Two manager ids are required, nothing to compare");
        return Ok(None);
    };

    let (state, managers) = tokio::try_join!(
        source.fetch_nfl_state(),
        source.fetch_team_managers(league_id)
    )
    .inspect_err(|e| error!("Failed to load league context: {e}"))?;

    let mut rivalry = Rivalry::default();
    let mut visited = HashSet::new();
    let mut next = Some(league_id.clone());

    while let Some(current) = next.take() {
        if !visited.insert(current.clone()) {
            warn!("League chain loops back to {current}, stopping");
            break;
        }

        let league = source
            .fetch_league(&current)
            .await
            .inspect_err(|e| error!("Failed to fetch league {current}: {e}"))?;

        let outcome = walk_season(
            source,
            &league,
            &managers,
            &state,
            (manager_one, manager_two),
            options,
            &mut rivalry,
        )
        .await;

        rivalry.seasons.push(SeasonReport {
            league_id: league.league_id.clone(),
            year: league.season,
            outcome,
        });
        next = league.previous_league_id;
    }

    rivalry.sort_matchups();
    info!(
        "Rivalry {} vs {}: {}-{}-{} over {} seasons",
        manager_one,
        manager_two,
        rivalry.wins.one,
        rivalry.wins.two,
        rivalry.ties,
        rivalry.seasons.len()
    );

    Ok(Some(rivalry))
}

/// Processes one season and folds its matchups into `rivalry`.
async fn walk_season<S: LeagueDataSource>(
    source: &S,
    league: &League,
    managers: &TeamManagers,
    state: &NflState,
    (manager_one, manager_two): (&str, &str),
    options: RivalryOptions,
    rivalry: &mut Rivalry,
) -> SeasonOutcome {
    let year = league.season;
    let pairing = match resolve_pairing(league, managers, manager_one, manager_two) {
        Ok(pairing) => pairing,
        Err(reason) => {
            debug!("Skipping season {year}: {reason:?}");
            return SeasonOutcome::Skipped { reason };
        }
    };

    let weeks = weeks_to_fetch(
        pairing.playoff_week_start,
        options.game_types,
        options.week_limit,
        state.last_started_week(year),
    );
    debug!("Season {year}: fetching weeks {weeks:?}");

    let week_entries = match try_join_all(
        weeks
            .iter()
            .map(|&week| source.fetch_matchups(&league.league_id, week)),
    )
    .await
    {
        Ok(week_entries) => week_entries,
        Err(e) => {
            error!("Failed to fetch matchups for season {year}: {e}");
            return SeasonOutcome::Failed {
                error: e.to_string(),
            };
        }
    };

    let mut found = 0;
    for (&week, entries) in weeks.iter().zip(&week_entries) {
        match extract_rivalry_matchup(
            entries,
            week,
            &pairing,
            options.game_types,
            options.week_limit,
        ) {
            Extraction::Matchup(matchup) => {
                rivalry.record(matchup);
                found += 1;
            }
            other => debug!("Season {year} week {week}: {other:?}"),
        }
    }

    info!("Season {year}: {found} head-to-head matchups");
    SeasonOutcome::Included {
        weeks_fetched: weeks,
        matchups: found,
    }
}

fn resolve_pairing(
    league: &League,
    managers: &TeamManagers,
    manager_one: &str,
    manager_two: &str,
) -> Result<SeasonPairing, SkipReason> {
    let year = league.season;
    let roster_one = managers.roster_id(manager_one, &league.league_id);
    let roster_two = managers.roster_id(manager_two, &league.league_id);

    match (roster_one, roster_two) {
        (None, None) => Err(SkipReason::BothMissing),
        (None, Some(_)) => Err(SkipReason::ManagerOneMissing),
        (Some(_), None) => Err(SkipReason::ManagerTwoMissing),
        (Some(one), Some(two)) if one == two => Err(SkipReason::SameRoster),
        (Some(roster_one), Some(roster_two)) => Ok(SeasonPairing {
            year,
            playoff_week_start: league.settings.playoff_week_start,
            roster_one,
            roster_two,
        }),
    }
}
