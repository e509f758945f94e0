//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use betterrest_domain::{CaffeineIntake, ClockStyle, SleepGoal, WakeUpTime};
use betterrest_predictor::{FormInputs, PredictorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Model artifact selection
    #[serde(default)]
    pub model: ModelSettings,

    /// Predictor tuning
    #[serde(default)]
    pub predictor: PredictorConfig,

    /// Starting values for the interactive screen
    #[serde(default)]
    pub defaults: Defaults,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Clock used when displaying times
    #[serde(default, with = "clock_style")]
    pub clock: ClockStyle,
}

/// Model artifact selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Path to a JSON artifact; the bundled model is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Initial input values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Wake-up time (HH:MM)
    #[serde(default = "default_wake_up")]
    pub wake_up: String,

    /// Sleep goal in hours
    #[serde(default = "default_sleep_goal")]
    pub sleep_goal: u8,

    /// Coffee cups per day
    #[serde(default = "default_coffee")]
    pub coffee: u8,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// `ClockStyle` as written in the config file ("12h" / "24h").
mod clock_style {
    use betterrest_domain::ClockStyle;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(style: &ClockStyle, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(style.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ClockStyle, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".betterrest").join("config.toml"))
    }

    /// Load configuration from `path`, falling back to defaults if it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.predictor.validate().map_err(CliError::Config)?;
        self.form_inputs()
            .map_err(|e| CliError::Config(format!("[defaults] {}", e)))?;
        Ok(())
    }

    /// Starting inputs for the screen, parsed from `[defaults]`.
    pub fn form_inputs(&self) -> Result<FormInputs> {
        Ok(FormInputs {
            wake_up: self.defaults.wake_up.parse::<WakeUpTime>()?,
            sleep_goal: SleepGoal::new(self.defaults.sleep_goal)?,
            coffee: CaffeineIntake::new(self.defaults.coffee)?,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            clock: ClockStyle::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            wake_up: default_wake_up(),
            sleep_goal: default_sleep_goal(),
            coffee: default_coffee(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_wake_up() -> String {
    "07:00".to_string()
}

fn default_sleep_goal() -> u8 {
    8
}

fn default_coffee() -> u8 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.clock, ClockStyle::TwelveHour);
        assert!(config.model.path.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.form_inputs().unwrap(), FormInputs::default());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.defaults.sleep_goal, 8);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[settings]\nclock = \"24h\"\n\n[model]\npath = \"/opt/sleep.json\"\n\n[defaults]\nwake_up = \"6:30\"\ncoffee = 3\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.clock, ClockStyle::TwentyFourHour);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.model.path, Some(PathBuf::from("/opt/sleep.json")));

        let inputs = config.form_inputs().unwrap();
        assert_eq!(inputs.wake_up, WakeUpTime::new(6, 30).unwrap());
        assert_eq!(inputs.sleep_goal.get(), 8);
        assert_eq!(inputs.coffee.cups(), 3);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_clock_written_as_text() {
        let mut config = Config::default();
        config.settings.clock = ClockStyle::TwentyFourHour;
        assert!(config.to_toml().unwrap().contains("clock = \"24h\""));

        let bad = "[settings]\nclock = \"36h\"\n";
        assert!(toml::from_str::<Config>(bad).is_err());
    }

    #[test]
    fn test_out_of_range_defaults_rejected() {
        let mut config = Config::default();
        config.defaults.sleep_goal = 14;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_predictor_section_rejected() {
        let mut config = Config::default();
        config.predictor.max_sleep_hours = -1.0;
        assert!(config.validate().is_err());
    }
}
