use crate::data_fetcher::models::{
    League, LeagueId, LeagueSettings, MatchupEntry, NflState, SeasonPhase, TeamManagers,
};
use crate::data_fetcher::source::LeagueDataSource;
use crate::error::AppError;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Test utilities for creating mock data
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a season record
    pub fn league(id: &str, year: i32, playoff_week_start: u32, previous: Option<&str>) -> League {
        League {
            league_id: LeagueId::new(id),
            name: Some(format!("Test League {year}")),
            season: year,
            previous_league_id: previous.map(LeagueId::new),
            settings: LeagueSettings { playoff_week_start },
        }
    }

    /// Creates an NFL state
    pub fn nfl_state(season_type: SeasonPhase, display_week: u32, season: i32) -> NflState {
        NflState {
            season_type,
            display_week,
            season: Some(season),
        }
    }

    /// Creates a matchup row with one starter per point value
    pub fn matchup_entry(roster_id: u32, matchup_id: Option<u32>, points: &[f64]) -> MatchupEntry {
        MatchupEntry {
            roster_id,
            matchup_id,
            starters: (0..points.len())
                .map(|slot| format!("{roster_id}-{slot}"))
                .collect(),
            starters_points: points.to_vec(),
        }
    }
}

/// In-memory [`LeagueDataSource`].
///
/// Unknown leagues fail with `LeagueNotFound`; weeks without data come back
/// empty, the way Sleeper answers for unplayed weeks.
pub struct MockLeagueSource {
    leagues: HashMap<LeagueId, League>,
    state: NflState,
    managers: TeamManagers,
    matchups: HashMap<(LeagueId, u32), Vec<MatchupEntry>>,
    failing_weeks: HashSet<(LeagueId, u32)>,
    fail_state: bool,
    requested: Mutex<Vec<(LeagueId, u32)>>,
}

impl MockLeagueSource {
    pub fn new(state: NflState) -> Self {
        Self {
            leagues: HashMap::new(),
            state,
            managers: TeamManagers::new(),
            matchups: HashMap::new(),
            failing_weeks: HashSet::new(),
            fail_state: false,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Adds a season and the roster each listed manager held in it.
    pub fn with_season(mut self, league: League, rosters: &[(&str, u32)]) -> Self {
        for &(manager, roster_id) in rosters {
            self.managers.insert(manager, &league.league_id, roster_id);
        }
        self.leagues.insert(league.league_id.clone(), league);
        self
    }

    /// Sets the raw rows for one week.
    pub fn set_week(&mut self, league_id: &str, week: u32, entries: Vec<MatchupEntry>) {
        self.matchups.insert((LeagueId::new(league_id), week), entries);
    }

    /// Adds a week in which two rosters played each other, plus an unrelated
    /// game between two filler rosters so the week is never trivially small.
    pub fn add_head_to_head(
        &mut self,
        league_id: &str,
        week: u32,
        first: (u32, &[f64]),
        second: (u32, &[f64]),
    ) {
        let entries = vec![
            TestDataBuilder::matchup_entry(90, Some(1), &[33.0, 21.0]),
            TestDataBuilder::matchup_entry(first.0, Some(2), first.1),
            TestDataBuilder::matchup_entry(91, Some(1), &[18.0, 40.0]),
            TestDataBuilder::matchup_entry(second.0, Some(2), second.1),
        ];
        self.set_week(league_id, week, entries);
    }

    /// Makes the matchup fetch for one week fail.
    pub fn fail_week(&mut self, league_id: &str, week: u32) {
        self.failing_weeks.insert((LeagueId::new(league_id), week));
    }

    /// Makes the NFL state fetch fail.
    pub fn fail_state(&mut self) {
        self.fail_state = true;
    }

    /// Weeks requested for `league_id` so far, ascending.
    pub fn requested_weeks(&self, league_id: &str) -> Vec<u32> {
        let requested = self
            .requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut weeks: Vec<u32> = requested
            .iter()
            .filter(|(id, _)| id.as_str() == league_id)
            .map(|&(_, week)| week)
            .collect();
        weeks.sort_unstable();
        weeks
    }
}

impl LeagueDataSource for MockLeagueSource {
    async fn fetch_league(&self, league_id: &LeagueId) -> Result<League, AppError> {
        self.leagues
            .get(league_id)
            .cloned()
            .ok_or_else(|| AppError::league_not_found(league_id.as_str()))
    }

    async fn fetch_nfl_state(&self) -> Result<NflState, AppError> {
        if self.fail_state {
            return Err(AppError::network_timeout("mock://state/nfl"));
        }
        Ok(self.state.clone())
    }

    async fn fetch_team_managers(&self, _league_id: &LeagueId) -> Result<TeamManagers, AppError> {
        Ok(self.managers.clone())
    }

    async fn fetch_matchups(
        &self,
        league_id: &LeagueId,
        week: u32,
    ) -> Result<Vec<MatchupEntry>, AppError> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((league_id.clone(), week));

        let key = (league_id.clone(), week);
        if self.failing_weeks.contains(&key) {
            return Err(AppError::api_server_error(
                500,
                "Internal Server Error",
                format!("mock://league/{league_id}/matchups/{week}"),
            ));
        }
        Ok(self.matchups.get(&key).cloned().unwrap_or_default())
    }
}
