use league_rivalry::{
    data_fetcher::models::{LeagueId, SeasonPhase},
    rivalry::{
        Extraction, GameType, GameTypes, Rivalry, RivalryOptions, SeasonOutcome, SeasonPairing,
        SkipReason, compute_rivalry, extract_rivalry_matchup,
    },
    testing_utils::{MockLeagueSource, TestDataBuilder},
};

const ALICE: &str = "338218741453520896";
const BOB: &str = "470093015231868928";

/// Three seasons, 2023 back to 2021. Bob joined the league in 2022.
fn three_season_league() -> MockLeagueSource {
    let mut source = MockLeagueSource::new(TestDataBuilder::nfl_state(SeasonPhase::Off, 1, 2024))
        .with_season(
            TestDataBuilder::league("300", 2023, 15, Some("200")),
            &[(ALICE, 4), (BOB, 7)],
        )
        .with_season(
            TestDataBuilder::league("200", 2022, 14, Some("100")),
            &[(ALICE, 3), (BOB, 5)],
        )
        .with_season(
            TestDataBuilder::league("100", 2021, 14, None),
            &[(ALICE, 3)],
        );

    source.add_head_to_head("300", 3, (7, &[60.5, 40.0]), (4, &[50.0, 30.25]));
    source.add_head_to_head("300", 11, (4, &[70.0, 20.0]), (7, &[45.5, 44.5]));
    source.add_head_to_head("300", 16, (4, &[98.0]), (7, &[91.75]));
    source.add_head_to_head("200", 5, (3, &[55.0, 45.0]), (5, &[60.0, 35.0]));
    source.add_head_to_head("200", 15, (5, &[102.5]), (3, &[99.0]));
    // Bob has no roster in 2021, so whatever roster 5 did there must not count
    source.add_head_to_head("100", 2, (3, &[80.0]), (5, &[70.0]));
    source
}

async fn run(source: &MockLeagueSource, options: RivalryOptions) -> Rivalry {
    compute_rivalry(source, &LeagueId::new("300"), Some(ALICE), Some(BOB), options)
        .await
        .expect("rivalry computation should succeed")
        .expect("both managers were given")
}

#[tokio::test]
async fn test_record_adds_up_to_matchup_log() {
    let source = three_season_league();
    let rivalry = run(&source, RivalryOptions::default()).await;

    assert_eq!(rivalry.matchups.len(), 5);
    assert_eq!(
        rivalry.wins.one + rivalry.wins.two + rivalry.ties,
        rivalry.matchups.len() as u32
    );
    assert_eq!(rivalry.wins.one, 2);
    assert_eq!(rivalry.wins.two, 2);
    assert_eq!(rivalry.ties, 1);
}

#[tokio::test]
async fn test_points_are_sums_of_starter_points() {
    let source = three_season_league();
    let rivalry = run(&source, RivalryOptions::default()).await;

    let side_a: f64 = rivalry
        .matchups
        .iter()
        .flat_map(|m| m.manager_one().points.iter())
        .sum();
    let side_b: f64 = rivalry
        .matchups
        .iter()
        .flat_map(|m| m.manager_two().points.iter())
        .sum();

    assert_eq!(rivalry.points.one, side_a);
    assert_eq!(rivalry.points.two, side_b);
    assert_eq!(rivalry.points.one, 80.25 + 90.0 + 98.0 + 100.0 + 99.0);
    assert_eq!(rivalry.points.two, 100.5 + 90.0 + 91.75 + 95.0 + 102.5);
}

#[tokio::test]
async fn test_log_is_most_recent_first_without_duplicates() {
    let source = three_season_league();
    let rivalry = run(&source, RivalryOptions::default()).await;

    let keys: Vec<(i32, u32)> = rivalry.matchups.iter().map(|m| (m.year, m.week)).collect();
    assert_eq!(keys, vec![(2023, 16), (2023, 11), (2023, 3), (2022, 15), (2022, 5)]);
    assert!(keys.windows(2).all(|pair| pair[0] > pair[1]));
}

#[tokio::test]
async fn test_side_a_is_always_first_manager() {
    let source = three_season_league();
    let rivalry = run(&source, RivalryOptions::default()).await;

    for matchup in &rivalry.matchups {
        let (expected_one, expected_two) = match matchup.year {
            2023 => (4, 7),
            2022 => (3, 5),
            year => panic!("unexpected season {year} in log"),
        };
        assert_eq!(matchup.manager_one().roster_id, expected_one);
        assert_eq!(matchup.manager_two().roster_id, expected_two);
    }
}

#[tokio::test]
async fn test_missing_roster_season_is_skipped_and_walk_continues() {
    let source = three_season_league();
    let rivalry = run(&source, RivalryOptions::default()).await;

    assert!(rivalry.matchups.iter().all(|m| m.year != 2021));
    assert_eq!(rivalry.seasons.len(), 3);
    assert_eq!(
        rivalry.seasons[2].outcome,
        SeasonOutcome::Skipped {
            reason: SkipReason::ManagerTwoMissing
        }
    );
    assert!(source.requested_weeks("100").is_empty());
    assert!(!rivalry.is_partial());
}

#[tokio::test]
async fn test_weeks_at_or_past_limit_never_fetched_or_logged() {
    let mut source = three_season_league();
    source.add_head_to_head("300", 17, (4, &[10.0]), (7, &[20.0]));
    source.add_head_to_head("300", 18, (4, &[30.0]), (7, &[40.0]));

    let rivalry = run(&source, RivalryOptions::default()).await;

    assert!(rivalry.matchups.iter().all(|m| m.week < 18));
    assert!(rivalry.matchups.iter().any(|m| m.week == 17));
    assert_eq!(source.requested_weeks("300"), (1..=17).collect::<Vec<_>>());

    let limited = run(
        &source,
        RivalryOptions {
            week_limit: 16,
            ..RivalryOptions::default()
        },
    )
    .await;
    assert!(limited.matchups.iter().all(|m| m.week < 16));
}

#[tokio::test]
async fn test_regular_season_only_fetches_weeks_before_playoffs() {
    let source = three_season_league();
    let options = RivalryOptions {
        game_types: GameTypes {
            regular: true,
            postseason: false,
        },
        ..RivalryOptions::default()
    };

    let rivalry = run(&source, options).await;

    assert_eq!(source.requested_weeks("200"), (1..=13).collect::<Vec<_>>());
    assert_eq!(source.requested_weeks("300"), (1..=14).collect::<Vec<_>>());
    assert!(rivalry
        .matchups
        .iter()
        .all(|m| m.game_type == GameType::Regular));
    assert!(rivalry.matchups.iter().all(|m| m.year != 2022 || m.week < 14));
    assert_eq!(rivalry.matchups.len(), 3);
}

#[tokio::test]
async fn test_postseason_only_excludes_regular_weeks() {
    let source = three_season_league();
    let options = RivalryOptions {
        game_types: GameTypes {
            regular: false,
            postseason: true,
        },
        ..RivalryOptions::default()
    };

    let rivalry = run(&source, options).await;

    let keys: Vec<(i32, u32)> = rivalry.matchups.iter().map(|m| (m.year, m.week)).collect();
    assert_eq!(keys, vec![(2023, 16), (2022, 15)]);
    assert_eq!(source.requested_weeks("200"), (14..=17).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_week_with_target_rosters_in_different_groups_is_not_paired() {
    let entries = vec![
        TestDataBuilder::matchup_entry(4, Some(1), &[50.0]),
        TestDataBuilder::matchup_entry(9, Some(1), &[40.0]),
        TestDataBuilder::matchup_entry(7, Some(2), &[60.0]),
        TestDataBuilder::matchup_entry(8, Some(2), &[30.0]),
        TestDataBuilder::matchup_entry(10, Some(3), &[20.0]),
        TestDataBuilder::matchup_entry(11, Some(3), &[25.0]),
    ];
    let pairing = SeasonPairing {
        year: 2023,
        playoff_week_start: 15,
        roster_one: 4,
        roster_two: 7,
    };

    assert_eq!(
        extract_rivalry_matchup(&entries, 6, &pairing, GameTypes::default(), 18),
        Extraction::NotPaired
    );

    let mut source = three_season_league();
    source.set_week("300", 6, entries);
    let rivalry = run(&source, RivalryOptions::default()).await;
    assert!(rivalry.matchups.iter().all(|m| (m.year, m.week) != (2023, 6)));
    assert_eq!(rivalry.matchups.len(), 5);
}

#[tokio::test]
async fn test_failed_week_marks_season_failed_and_keeps_others() {
    let mut source = three_season_league();
    source.fail_week("200", 9);

    let rivalry = run(&source, RivalryOptions::default()).await;

    assert!(rivalry.is_partial());
    assert!(matches!(
        rivalry.seasons[1].outcome,
        SeasonOutcome::Failed { .. }
    ));
    assert!(rivalry.matchups.iter().all(|m| m.year == 2023));
    assert_eq!(rivalry.matchups.len(), 3);
}

#[tokio::test]
async fn test_identical_inputs_give_identical_rivalries() {
    let first = run(&three_season_league(), RivalryOptions::default()).await;
    let second = run(&three_season_league(), RivalryOptions::default()).await;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_blank_manager_id_returns_none() {
    let source = three_season_league();
    let result = compute_rivalry(
        &source,
        &LeagueId::new("300"),
        Some(ALICE),
        Some("   "),
        RivalryOptions::default(),
    )
    .await
    .unwrap();

    assert!(result.is_none());
    assert!(source.requested_weeks("300").is_empty());
}
