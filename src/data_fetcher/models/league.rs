use super::common::season_year;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier of one season's league instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeagueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One season of a league. Seasons form a backward linked chain through
/// `previous_league_id`; `None` marks the first season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub league_id: LeagueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "season_year")]
    pub season: i32,
    #[serde(default, deserialize_with = "previous_league")]
    pub previous_league_id: Option<LeagueId>,
    pub settings: LeagueSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSettings {
    /// First postseason week. Weeks before it are regular season.
    pub playoff_week_start: u32,
}

/// Sleeper marks the start of the chain with `null`, `""` or `"0"`.
fn previous_league<'de, D>(deserializer: D) -> Result<Option<LeagueId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty() && id != "0")
        .map(LeagueId))
}
