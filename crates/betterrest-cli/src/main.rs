//! BetterRest CLI - Recommends a bedtime from wake-up time, sleep goal and coffee intake.

use betterrest_cli::commands;
use betterrest_cli::repl;
use betterrest_cli::{Cli, CliError, Command, Config, Formatter};
use betterrest_domain::ClockStyle;
use betterrest_model::{ModelSource, OnDemandModel};
use betterrest_predictor::{BedtimeForm, BedtimePredictor};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => {}
        // The notice has already been printed
        Err(CliError::PredictionFailed) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> betterrest_cli::Result<()> {
    // Load config, defaults if the file is absent
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let config = Config::load_from(&config_path)?;
    if !matches!(cli.command, Some(Command::Config(_))) {
        config.validate()?;
    }

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color and clock settings
    let color_enabled = !cli.no_color && config.settings.color;
    let clock: ClockStyle = cli.clock.unwrap_or(config.settings.clock);

    let formatter = Formatter::new(format, color_enabled, clock);

    // Command-line model wins over the configured one
    let source = ModelSource::from_path(cli.model.or_else(|| config.model.path.clone()));

    match cli.command {
        None | Some(Command::Screen) => {
            let predictor = BedtimePredictor::with_config(
                OnDemandModel::new(source),
                config.predictor.clone(),
            );
            let mut form = BedtimeForm::with_inputs(predictor, config.form_inputs()?);
            repl::run_repl(&mut form, &formatter)?;
        }
        Some(Command::Predict(args)) => {
            let predictor = BedtimePredictor::with_config(
                OnDemandModel::new(source),
                config.predictor.clone(),
            );
            commands::execute_predict(args, &config, &predictor, &formatter)?;
        }
        Some(Command::Model) => {
            commands::execute_model(&source, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
