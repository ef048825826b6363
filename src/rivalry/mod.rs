//! Head-to-head records between two managers across a league's history.
//!
//! [`compute_rivalry`] walks the season chain backwards from a league id,
//! [`extract_rivalry_matchup`] picks the pair's game out of one week's rows,
//! and [`Rivalry`] collects wins, points and the matchup log.

pub mod extractor;
pub mod models;
pub mod walker;
pub mod weeks;

pub use extractor::{Extraction, SeasonPairing, classify_week, extract_rivalry_matchup};
pub use models::{
    GameType, GameTypes, MatchupSide, Outcome, PerManager, Rivalry, RivalryMatchup,
    SeasonOutcome, SeasonReport, SkipReason,
};
pub use walker::{RivalryOptions, compute_rivalry};
pub use weeks::weeks_to_fetch;
