//! User prompts for first-time configuration setup

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the league id the season walk starts from.
///
/// The id is the number at the end of the league URL on sleeper.com.
pub async fn prompt_for_league_id() -> Result<String, AppError> {
    println!("Please enter your current Sleeper league id: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
