use super::models::GameTypes;

/// Weeks of one season to fetch, in ascending order.
///
/// Regular season weeks are `1..playoff_week_start`, postseason weeks are
/// `playoff_week_start..week_limit`. `last_started_week` drops weeks that
/// have not been played yet.
pub fn weeks_to_fetch(
    playoff_week_start: u32,
    game_types: GameTypes,
    week_limit: u32,
    last_started_week: Option<u32>,
) -> Vec<u32> {
    let boundary = playoff_week_start.max(1).min(week_limit);
    let mut weeks = Vec::new();

    if game_types.regular {
        weeks.extend(1..boundary);
    }
    if game_types.postseason {
        weeks.extend(boundary..week_limit);
    }

    if let Some(last) = last_started_week {
        weeks.retain(|&week| week <= last);
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u32 = 18;

    #[test]
    fn test_all_game_types() {
        let weeks = weeks_to_fetch(15, GameTypes::default(), LIMIT, None);
        assert_eq!(weeks, (1..18).collect::<Vec<_>>());
    }

    #[test]
    fn test_regular_only_stops_before_playoffs() {
        let game_types = GameTypes {
            regular: true,
            postseason: false,
        };
        let weeks = weeks_to_fetch(14, game_types, LIMIT, None);
        assert_eq!(weeks, (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn test_postseason_only_respects_limit() {
        let game_types = GameTypes {
            regular: false,
            postseason: true,
        };
        let weeks = weeks_to_fetch(15, game_types, LIMIT, None);
        assert_eq!(weeks, vec![15, 16, 17]);
        assert!(!weeks.contains(&LIMIT));
    }

    #[test]
    fn test_nothing_selected() {
        let game_types = GameTypes {
            regular: false,
            postseason: false,
        };
        assert!(weeks_to_fetch(15, game_types, LIMIT, None).is_empty());
    }

    #[test]
    fn test_playoff_start_beyond_limit() {
        let weeks = weeks_to_fetch(21, GameTypes::default(), LIMIT, None);
        assert_eq!(weeks, (1..18).collect::<Vec<_>>());
    }

    #[test]
    fn test_unplayed_weeks_dropped() {
        let weeks = weeks_to_fetch(15, GameTypes::default(), LIMIT, Some(6));
        assert_eq!(weeks, vec![1, 2, 3, 4, 5, 6]);

        let postseason_only = GameTypes {
            regular: false,
            postseason: true,
        };
        assert!(weeks_to_fetch(15, postseason_only, LIMIT, Some(6)).is_empty());
    }
}
