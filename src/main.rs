// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use league_rivalry::config::validation::validate_league_id;
use league_rivalry::report::{format_rivalry, format_rivalry_json};
use league_rivalry::{
    AppError, Config, LeagueId, RivalryOptions, SleeperClient, compute_rivalry,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.no_regular && args.no_postseason {
        return Err(AppError::config_error(
            "Cannot leave out both regular season and postseason games",
        ));
    }

    // Handle configuration operations before anything touches the network
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if args.is_config_operation() {
        let mut config = Config::load_from_path(&Config::get_config_path())
            .await
            .unwrap_or_default();

        if let Some(league_id) = &args.set_league {
            validate_league_id(league_id)?;
            config.league_id = league_id.clone();
        }

        if let Some(new_log_path) = &args.new_log_file_path {
            config.log_file_path = Some(new_log_path.clone());
        }

        config.validate()?;
        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let mut config = Config::load().await?;
    if let Some(league_id) = &args.league {
        validate_league_id(league_id)?;
        config.league_id = league_id.clone();
    }

    let (log_file_path, _guard) =
        logging::setup_logging(&args, config.log_file_path.as_deref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let client = SleeperClient::new(&config)?;
    let options = RivalryOptions {
        game_types: args.game_types(),
        week_limit: config.week_limit,
    };

    let rivalry = compute_rivalry(
        &client,
        &LeagueId::new(config.league_id.clone()),
        args.manager_one.as_deref(),
        args.manager_two.as_deref(),
        options,
    )
    .await
    .inspect_err(|e| tracing::error!("Rivalry computation failed: {e}"))?;

    let Some(rivalry) = rivalry else {
        println!("Two manager ids are needed. Run with --help for usage.");
        return Ok(());
    };

    if args.json {
        println!("{}", format_rivalry_json(&rivalry)?);
    } else {
        let manager_one = args.manager_one.as_deref().unwrap_or_default().trim();
        let manager_two = args.manager_two.as_deref().unwrap_or_default().trim();
        print!("{}", format_rivalry(&rivalry, manager_one, manager_two));
    }

    Ok(())
}
