//! Sleeper Fantasy Football Rivalry Library
//!
//! This library computes the head-to-head history of two managers in a
//! Sleeper league, following the league's chain of seasons back to the first.
//!
//! # Examples
//!
//! ```rust,no_run
//! use league_rivalry::{AppError, Config, LeagueId, RivalryOptions, SleeperClient, compute_rivalry};
//! use league_rivalry::report::format_rivalry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = SleeperClient::new(&config)?;
//!
//!     let rivalry = compute_rivalry(
//!         &client,
//!         &LeagueId::new(config.league_id.clone()),
//!         Some("338218741453520896"),
//!         Some("470093015231868928"),
//!         RivalryOptions::default(),
//!     )
//!     .await?;
//!
//!     if let Some(rivalry) = rivalry {
//!         print!("{}", format_rivalry(&rivalry, "338218741453520896", "470093015231868928"));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;
pub mod rivalry;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{LeagueDataSource, LeagueId, SleeperClient};
pub use error::AppError;
pub use rivalry::{GameTypes, Rivalry, RivalryOptions, compute_rivalry};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
