pub mod common;
pub mod league;
pub mod matchups;
pub mod rosters;
pub mod state;

pub use league::{League, LeagueId, LeagueSettings};
pub use matchups::MatchupEntry;
pub use rosters::{Roster, TeamManagers};
pub use state::{NflState, SeasonPhase};
