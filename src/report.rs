//! Text and JSON rendering of a rivalry.

use crate::error::AppError;
use crate::rivalry::{GameType, Outcome, Rivalry, SeasonOutcome, SkipReason};
use std::fmt::Write;

/// Renders the record, point totals, every matchup and any season that
/// could not be counted.
pub fn format_rivalry(rivalry: &Rivalry, manager_one: &str, manager_two: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{manager_one} vs {manager_two}");
    let _ = writeln!(out, "────────────────────────────────────");
    if rivalry.matchups.is_empty() {
        let _ = writeln!(out, "These managers have never played each other.");
    } else {
        let _ = writeln!(
            out,
            "Record: {}-{}{}",
            rivalry.wins.one,
            rivalry.wins.two,
            if rivalry.ties > 0 {
                format!("-{}", rivalry.ties)
            } else {
                String::new()
            }
        );
        let _ = writeln!(
            out,
            "Points: {:.2} - {:.2}",
            rivalry.points.one, rivalry.points.two
        );
        let _ = writeln!(out, "────────────────────────────────────");

        for matchup in &rivalry.matchups {
            let marker = match matchup.outcome() {
                Outcome::ManagerOne => "W",
                Outcome::ManagerTwo => "L",
                Outcome::Tie => "T",
            };
            let phase = match matchup.game_type {
                GameType::Regular => "",
                GameType::Postseason => " (postseason)",
            };
            let _ = writeln!(
                out,
                "{} week {:>2}  {}  {:>7.2} - {:<7.2}{}",
                matchup.year,
                matchup.week,
                marker,
                matchup.manager_one().total(),
                matchup.manager_two().total(),
                phase
            );
        }
    }

    for season in &rivalry.seasons {
        match &season.outcome {
            SeasonOutcome::Failed { error } => {
                let _ = writeln!(
                    out,
                    "Warning: season {} could not be loaded ({error}); the record is incomplete.",
                    season.year
                );
            }
            SeasonOutcome::Skipped {
                reason: SkipReason::SameRoster,
            } => {
                let _ = writeln!(
                    out,
                    "Note: both managers shared a roster in {}.",
                    season.year
                );
            }
            _ => {}
        }
    }

    out
}

/// Renders the whole rivalry, season outcomes included, as pretty JSON.
pub fn format_rivalry_json(rivalry: &Rivalry) -> Result<String, AppError> {
    serde_json::to_string_pretty(rivalry).map_err(AppError::OutputSerialize)
}
