use super::common::null_as_default;
use serde::{Deserialize, Serialize};

/// One roster's row in `/league/{id}/matchups/{week}`.
///
/// The two rosters that played each other share a `matchup_id`. Bye weeks and
/// unscheduled weeks come back with `matchup_id: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub roster_id: u32,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starters_points: Vec<f64>,
}
