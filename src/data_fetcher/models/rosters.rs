use super::common::null_as_default;
use super::league::LeagueId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A roster row from `/league/{id}/rosters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub co_owners: Vec<String>,
}

/// Which roster each manager controlled in each season of a league chain.
///
/// Seasons are keyed by league id rather than by year, so two chain entries
/// that report the same season year keep separate roster maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamManagers {
    seasons: HashMap<LeagueId, HashMap<String, u32>>,
}

impl TeamManagers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the owner and every co-owner of each roster in `league_id`.
    /// Rosters without an owner (orphaned teams) are not recorded.
    pub fn insert_season(&mut self, league_id: &LeagueId, rosters: &[Roster]) {
        let season = self.seasons.entry(league_id.clone()).or_default();
        for roster in rosters {
            for manager in roster.owner_id.iter().chain(roster.co_owners.iter()) {
                season.insert(manager.clone(), roster.roster_id);
            }
        }
    }

    /// Records a single manager/roster pair for `league_id`.
    pub fn insert(&mut self, manager_id: impl Into<String>, league_id: &LeagueId, roster_id: u32) {
        self.seasons
            .entry(league_id.clone())
            .or_default()
            .insert(manager_id.into(), roster_id);
    }

    pub fn roster_id(&self, manager_id: &str, league_id: &LeagueId) -> Option<u32> {
        self.seasons.get(league_id)?.get(manager_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_deserialization_with_null_co_owners() {
        let json = r#"[
            {"roster_id": 1, "owner_id": "111", "co_owners": null, "players": ["4046"]},
            {"roster_id": 2, "owner_id": "222", "co_owners": ["333"]},
            {"roster_id": 3, "owner_id": null}
        ]"#;

        let rosters: Vec<Roster> = serde_json::from_str(json).unwrap();
        assert_eq!(rosters.len(), 3);
        assert!(rosters[0].co_owners.is_empty());
        assert_eq!(rosters[1].co_owners, vec!["333".to_string()]);
        assert_eq!(rosters[2].owner_id, None);
    }

    #[test]
    fn test_team_managers_lookup() {
        let rosters = vec![
            Roster {
                roster_id: 1,
                owner_id: Some("111".to_string()),
                co_owners: vec![],
            },
            Roster {
                roster_id: 2,
                owner_id: Some("222".to_string()),
                co_owners: vec!["333".to_string()],
            },
            Roster {
                roster_id: 3,
                owner_id: None,
                co_owners: vec![],
            },
        ];

        let current = LeagueId::new("300");
        let previous = LeagueId::new("200");
        let mut managers = TeamManagers::new();
        managers.insert_season(&current, &rosters);
        managers.insert("111", &previous, 7);

        assert_eq!(managers.roster_id("111", &current), Some(1));
        assert_eq!(managers.roster_id("222", &current), Some(2));
        assert_eq!(managers.roster_id("333", &current), Some(2));
        assert_eq!(managers.roster_id("111", &previous), Some(7));
        assert_eq!(managers.roster_id("222", &previous), None);
        assert_eq!(managers.roster_id("444", &current), None);
    }

    #[test]
    fn test_seasons_sharing_a_year_stay_separate() {
        let renewed = LeagueId::new("301");
        let original = LeagueId::new("300");
        let mut managers = TeamManagers::new();
        managers.insert("111", &renewed, 4);
        managers.insert("111", &original, 9);

        assert_eq!(managers.roster_id("111", &renewed), Some(4));
        assert_eq!(managers.roster_id("111", &original), Some(9));
    }
}
