use crate::data_fetcher::models::LeagueId;
use serde::Serialize;
use std::cmp::Reverse;

/// Phase of a fantasy season a matchup belongs to.
///
/// Every week from the playoff start onward is `Postseason`; playoff and
/// consolation brackets are not told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Regular,
    Postseason,
}

/// Which game phases to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameTypes {
    pub regular: bool,
    pub postseason: bool,
}

impl Default for GameTypes {
    fn default() -> Self {
        Self {
            regular: true,
            postseason: true,
        }
    }
}

impl GameTypes {
    pub fn includes(&self, game_type: GameType) -> bool {
        match game_type {
            GameType::Regular => self.regular,
            GameType::Postseason => self.postseason,
        }
    }
}

/// One roster's half of a matchup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupSide {
    pub roster_id: u32,
    pub starters: Vec<String>,
    /// Points per starter, in the same order as `starters`.
    pub points: Vec<f64>,
}

impl MatchupSide {
    pub fn total(&self) -> f64 {
        self.points.iter().sum()
    }
}

/// Which manager won a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    ManagerOne,
    ManagerTwo,
    Tie,
}

/// A week in which the two managers played each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RivalryMatchup {
    pub year: i32,
    pub week: u32,
    pub game_type: GameType,
    /// Index 0 is always the first manager's roster.
    pub sides: [MatchupSide; 2],
}

impl RivalryMatchup {
    pub fn manager_one(&self) -> &MatchupSide {
        &self.sides[0]
    }

    pub fn manager_two(&self) -> &MatchupSide {
        &self.sides[1]
    }

    pub fn outcome(&self) -> Outcome {
        let one = self.manager_one().total();
        let two = self.manager_two().total();
        if one > two {
            Outcome::ManagerOne
        } else if one < two {
            Outcome::ManagerTwo
        } else {
            Outcome::Tie
        }
    }
}

/// A value kept per manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerManager<T> {
    pub one: T,
    pub two: T,
}

/// Why a season contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    ManagerOneMissing,
    ManagerTwoMissing,
    BothMissing,
    SameRoster,
}

/// What happened to one season of the walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeasonOutcome {
    Included {
        weeks_fetched: Vec<u32>,
        matchups: usize,
    },
    Skipped {
        reason: SkipReason,
    },
    /// The weekly batch failed; none of the season's weeks were counted.
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonReport {
    pub league_id: LeagueId,
    pub year: i32,
    pub outcome: SeasonOutcome,
}

/// Head-to-head history of two managers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rivalry {
    pub points: PerManager<f64>,
    pub wins: PerManager<u32>,
    pub ties: u32,
    /// Most recent first.
    pub matchups: Vec<RivalryMatchup>,
    /// Seasons in walk order (most recent first).
    pub seasons: Vec<SeasonReport>,
}

impl Rivalry {
    /// Folds one matchup into the totals and the log.
    pub fn record(&mut self, matchup: RivalryMatchup) {
        self.points.one += matchup.manager_one().total();
        self.points.two += matchup.manager_two().total();
        match matchup.outcome() {
            Outcome::ManagerOne => self.wins.one += 1,
            Outcome::ManagerTwo => self.wins.two += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.matchups.push(matchup);
    }

    /// Orders the log by year, then week, most recent first.
    pub fn sort_matchups(&mut self) {
        self.matchups
            .sort_by_key(|matchup| (Reverse(matchup.year), Reverse(matchup.week)));
    }

    pub fn games_played(&self) -> u32 {
        self.wins.one + self.wins.two + self.ties
    }

    /// True when any season's weekly batch failed, so the record may be incomplete.
    pub fn is_partial(&self) -> bool {
        self.seasons
            .iter()
            .any(|season| matches!(season.outcome, SeasonOutcome::Failed { .. }))
    }
}
