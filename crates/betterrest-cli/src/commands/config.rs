//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, path, formatter),
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Print the effective configuration.
fn show_config(config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    if path.exists() {
        println!("{}", formatter.info(&format!("Loaded from {}", path.display())));
    } else {
        println!(
            "{}",
            formatter.warning(&format!("{} not found, using defaults", path.display()))
        );
    }
    println!();
    println!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::NotPermitted(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    Ok(())
}
