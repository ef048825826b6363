pub mod api;
pub mod models;
pub mod source;

pub use api::SleeperClient;
pub use models::{League, LeagueId, MatchupEntry, NflState, TeamManagers};
pub use source::LeagueDataSource;
