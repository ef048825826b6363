use crate::cli::Args;
use league_rivalry::config::Config;
use league_rivalry::constants::APP_NAME;
use league_rivalry::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging for the run.
///
/// Logs always go to a daily rolling file; with `--debug` they are mirrored
/// to stdout at debug level. `RUST_LOG` still applies on top of the default
/// directive.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config_log_path: Option<&str>,
) -> Result<(String, WorkerGuard), AppError> {
    let custom_log_path = args.log_file.as_deref().or(config_log_path);
    let default_file_name = format!("{APP_NAME}.log");
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&default_file_name);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), default_file_name.clone()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call so buffered lines get flushed
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let level = if args.debug { "debug" } else { "info" };
    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(build_filter(level)?);

    if args.debug {
        tracing_subscriber::registry()
            .with(file_layer)
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(build_filter(level)?),
            )
            .try_init()
    } else {
        tracing_subscriber::registry().with(file_layer).try_init()
    }
    .map_err(|e| AppError::log_setup_error(e.to_string()))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

fn build_filter(level: &str) -> Result<EnvFilter, AppError> {
    let directive = format!("{APP_NAME}={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}
