//! Finds the matchup between two rosters in one week's raw matchup rows.

use super::models::{GameType, GameTypes, MatchupSide, RivalryMatchup};
use crate::data_fetcher::models::MatchupEntry;
use std::collections::BTreeMap;

/// The two rosters being compared in one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonPairing {
    pub year: i32,
    pub playoff_week_start: u32,
    pub roster_one: u32,
    pub roster_two: u32,
}

/// Result of looking for the rivalry matchup in one week.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The week has no rows at all.
    NoData,
    /// The week's game type is filtered out, or the week is past the limit.
    Excluded,
    /// The two rosters did not meet, or the rows are inconsistent.
    NotPaired,
    Matchup(RivalryMatchup),
}

/// Weeks before the playoff start are regular season, the rest postseason.
pub fn classify_week(week: u32, playoff_week_start: u32) -> GameType {
    if week < playoff_week_start {
        GameType::Regular
    } else {
        GameType::Postseason
    }
}

/// Looks for the single matchup group holding both rosters of `pairing`.
///
/// Rows without a `matchup_id` never pair. If the target rosters are spread
/// over more than one group, or the only group holds just one of them, the
/// week is `NotPaired`; that happens when one manager's team did not exist yet.
pub fn extract_rivalry_matchup(
    entries: &[MatchupEntry],
    week: u32,
    pairing: &SeasonPairing,
    game_types: GameTypes,
    week_limit: u32,
) -> Extraction {
    if entries.is_empty() {
        return Extraction::NoData;
    }

    let game_type = classify_week(week, pairing.playoff_week_start);
    if week >= week_limit || !game_types.includes(game_type) {
        return Extraction::Excluded;
    }

    let mut groups: BTreeMap<u32, Vec<&MatchupEntry>> = BTreeMap::new();
    for entry in entries {
        if entry.roster_id != pairing.roster_one && entry.roster_id != pairing.roster_two {
            continue;
        }
        if let Some(matchup_id) = entry.matchup_id {
            groups.entry(matchup_id).or_default().push(entry);
        }
    }

    let mut groups = groups.into_values();
    let (Some(group), None) = (groups.next(), groups.next()) else {
        return Extraction::NotPaired;
    };

    let [first, second] = group.as_slice() else {
        return Extraction::NotPaired;
    };

    match order_sides(first, second, pairing) {
        Some(sides) => Extraction::Matchup(RivalryMatchup {
            year: pairing.year,
            week,
            game_type,
            sides,
        }),
        None => Extraction::NotPaired,
    }
}

/// Puts the first manager's roster at index 0. `None` unless the two rows
/// are exactly the two target rosters.
fn order_sides(
    first: &MatchupEntry,
    second: &MatchupEntry,
    pairing: &SeasonPairing,
) -> Option<[MatchupSide; 2]> {
    let (one, two) = if first.roster_id == pairing.roster_one
        && second.roster_id == pairing.roster_two
    {
        (first, second)
    } else if first.roster_id == pairing.roster_two && second.roster_id == pairing.roster_one {
        (second, first)
    } else {
        return None;
    };

    Some([to_side(one), to_side(two)])
}

fn to_side(entry: &MatchupEntry) -> MatchupSide {
    MatchupSide {
        roster_id: entry.roster_id,
        starters: entry.starters.clone(),
        points: entry.starters_points.clone(),
    }
}
