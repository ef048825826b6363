use super::common::optional_season_year;
use serde::{Deserialize, Serialize};

/// Phase of the NFL calendar as reported by Sleeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonPhase {
    Pre,
    Regular,
    Post,
    Off,
    #[serde(other)]
    Other,
}

/// Current NFL state (`/state/nfl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NflState {
    pub season_type: SeasonPhase,
    #[serde(default)]
    pub display_week: u32,
    #[serde(default, deserialize_with = "optional_season_year")]
    pub season: Option<i32>,
}

impl NflState {
    /// Last week of `year` that has been played or is being played.
    ///
    /// During the preseason of `year` nothing has been played yet, so the
    /// bound is week 0. During its regular season it is the display week.
    /// Postseason, offseason and every other year place no bound.
    pub fn last_started_week(&self, year: i32) -> Option<u32> {
        match (self.season_type, self.season) {
            (SeasonPhase::Pre, Some(season)) if season == year => Some(0),
            (SeasonPhase::Regular, Some(season)) if season == year => Some(self.display_week),
            _ => None,
        }
    }
}
