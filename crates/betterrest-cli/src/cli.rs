//! CLI command definitions and argument parsing.

use betterrest_domain::{ClockStyle, WakeUpTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BetterRest - Find out when to go to bed.
#[derive(Debug, Parser)]
#[command(name = "betterrest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Clock used when displaying times (12h or 24h)
    #[arg(long, global = true)]
    pub clock: Option<ClockStyle>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model artifact (JSON); overrides the configured model
    #[arg(short, long, global = true)]
    pub model: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bedtime only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a bedtime once and exit
    Predict(PredictArgs),

    /// Open the interactive bedtime screen
    #[command(alias = "repl")]
    Screen,

    /// Show the sleep model in use
    Model,

    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the predict command.
///
/// Omitted values fall back to the `[defaults]` section of the config.
#[derive(Debug, Parser)]
pub struct PredictArgs {
    /// Wake-up time (e.g. 07:00, 6:30 AM)
    #[arg(short, long)]
    pub wake: Option<WakeUpTime>,

    /// Desired hours of sleep (2-12)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=12))]
    pub sleep: Option<u8>,

    /// Cups of coffee per day (1-10)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub coffee: Option<u8>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["betterrest"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_predict_command() {
        let cli = Cli::parse_from([
            "betterrest", "predict", "--wake", "6:45", "--sleep", "9", "--coffee", "3",
        ]);
        match cli.command {
            Some(Command::Predict(args)) => {
                assert_eq!(args.wake, Some(WakeUpTime::new(6, 45).unwrap()));
                assert_eq!(args.sleep, Some(9));
                assert_eq!(args.coffee, Some(3));
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_predict_ranges_enforced() {
        assert!(Cli::try_parse_from(["betterrest", "predict", "--sleep", "1"]).is_err());
        assert!(Cli::try_parse_from(["betterrest", "predict", "--sleep", "13"]).is_err());
        assert!(Cli::try_parse_from(["betterrest", "predict", "--coffee", "0"]).is_err());
        assert!(Cli::try_parse_from(["betterrest", "predict", "--coffee", "11"]).is_err());
        assert!(Cli::try_parse_from(["betterrest", "predict", "--wake", "25:00"]).is_err());
        assert!(Cli::try_parse_from(["betterrest", "predict", "--sleep", "2", "--coffee", "10"]).is_ok());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "betterrest", "--clock", "24h", "-f", "json", "--model", "m.json", "screen",
        ]);
        assert_eq!(cli.clock, Some(ClockStyle::TwentyFourHour));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.model, Some(PathBuf::from("m.json")));
        assert!(matches!(cli.command, Some(Command::Screen)));
    }

    #[test]
    fn test_repl_alias() {
        let cli = Cli::parse_from(["betterrest", "repl"]);
        assert!(matches!(cli.command, Some(Command::Screen)));
    }

    #[test]
    fn test_clock_flag() {
        let cli = Cli::parse_from(["betterrest", "--clock", "12", "model"]);
        assert_eq!(cli.clock, Some(ClockStyle::TwelveHour));
        assert!(Cli::try_parse_from(["betterrest", "--clock", "36h"]).is_err());
    }
}
