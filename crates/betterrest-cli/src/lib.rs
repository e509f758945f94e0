//! BetterRest CLI library.
//!
//! This library provides the terminal front end for BetterRest: argument
//! parsing, configuration, the interactive screen, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
