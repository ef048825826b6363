use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use league_rivalry::rivalry::GameTypes;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Head-to-head records between two Sleeper league managers.
///
/// Walks every season of the configured league, from the current one back to
/// the first, and counts each week the two managers played each other.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Sleeper user id of the first manager
    pub manager_one: Option<String>,

    /// Sleeper user id of the second manager
    pub manager_two: Option<String>,

    /// Start from this league id instead of the configured one
    #[arg(long = "league", short = 'L', value_name = "LEAGUE_ID")]
    pub league: Option<String>,

    /// Leave regular season games out
    #[arg(long = "no-regular", help_heading = "Filters")]
    pub no_regular: bool,

    /// Leave postseason games out
    #[arg(long = "no-postseason", help_heading = "Filters")]
    pub no_postseason: bool,

    /// Print the full result as JSON
    #[arg(long = "json", short = 'j', help_heading = "Output")]
    pub json: bool,

    /// Store a new default league id in the config
    #[arg(long = "set-league", help_heading = "Configuration", value_name = "LEAGUE_ID")]
    pub set_league: Option<String>,

    /// Update log file path in config
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write debug logs to the terminal
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn game_types(&self) -> GameTypes {
        GameTypes {
            regular: !self.no_regular,
            postseason: !self.no_postseason,
        }
    }

    /// True when the run only touches configuration.
    pub fn is_config_operation(&self) -> bool {
        self.list_config || self.set_league.is_some() || self.new_log_file_path.is_some()
    }
}
