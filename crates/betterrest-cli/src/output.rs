//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use betterrest_domain::{ClockStyle, PredictedBedtime};
use betterrest_model::ModelArtifact;
use betterrest_predictor::{FormInputs, Notice};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// What the screen currently shows.
#[derive(Debug, Clone, Copy)]
pub struct ScreenView<'a> {
    /// The three inputs
    pub inputs: FormInputs,
    /// Displayed bedtime text
    pub bedtime_text: &'a str,
    /// The prediction behind the displayed text, if one succeeded
    pub bedtime: Option<&'a PredictedBedtime>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    clock: ClockStyle,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, clock: ClockStyle) -> Self {
        Self {
            format,
            color_enabled,
            clock,
        }
    }

    /// Clock style used for every time shown.
    pub fn clock(&self) -> ClockStyle {
        self.clock
    }

    /// Format the screen: the three inputs and the bedtime.
    pub fn format_screen(&self, view: &ScreenView<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_screen_json(view),
            OutputFormat::Table => Ok(self.format_screen_table(view)),
            OutputFormat::Quiet => Ok(view.bedtime_text.to_string()),
        }
    }

    /// Format a one-off prediction.
    pub fn format_prediction(&self, inputs: FormInputs, bedtime: &PredictedBedtime) -> Result<String> {
        let text = bedtime.format(self.clock);
        self.format_screen(&ScreenView {
            inputs,
            bedtime_text: &text,
            bedtime: Some(bedtime),
        })
    }

    fn format_screen_json(&self, view: &ScreenView<'_>) -> Result<String> {
        let value = serde_json::json!({
            "wake_up": view.inputs.wake_up.to_string(),
            "sleep_goal_hours": view.inputs.sleep_goal.get(),
            "coffee_cups": view.inputs.coffee.cups(),
            "bedtime": view.bedtime_text,
            "predicted_sleep_hours": view.bedtime.map(|b| b.sleep_hours()),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_screen_table(&self, view: &ScreenView<'_>) -> String {
        let wake_up = view.inputs.wake_up.format(self.clock);
        let sleep_goal = view.inputs.sleep_goal.label();
        let coffee = view.inputs.coffee.label();

        let mut builder = Builder::default();
        builder.push_record(["BetterRest", ""]);
        builder.push_record(["Wake up time", wake_up.as_str()]);
        builder.push_record(["Desired amount of sleep", sleep_goal.as_str()]);
        builder.push_record(["Daily coffee intake", coffee.as_str()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let analysis = format!(
            "You should go to bed at: {}",
            self.colorize(view.bedtime_text, "cyan")
        );
        match view.bedtime {
            Some(bedtime) => format!(
                "{}\n{}\n{}",
                table,
                analysis,
                self.colorize(&format!("(predicted sleep {:.1} hours)", bedtime.sleep_hours()), "blue")
            ),
            None => format!("{}\n{}", table, analysis),
        }
    }

    /// Format the failure notice.
    pub fn notice(&self, notice: &Notice) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "error": { "title": notice.title, "message": notice.message }
            })
            .to_string(),
            _ => format!(
                "{}\n  {}",
                self.colorize(&format!("✗ {}", notice.title), "red"),
                notice.message
            ),
        }
    }

    /// Format model metadata.
    pub fn format_model(&self, artifact: &ModelArtifact, source: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = serde_json::to_value(artifact)?;
                value["source"] = serde_json::Value::String(source.to_string());
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(format!("{} {}", artifact.name, artifact.version)),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Name".to_string(), artifact.name.clone()]);
                builder.push_record(["Version".to_string(), artifact.version.clone()]);
                builder.push_record(["Source".to_string(), source.to_string()]);
                builder.push_record([
                    "Output unit".to_string(),
                    artifact.output_unit.as_str().to_string(),
                ]);
                builder.push_record(["Intercept".to_string(), artifact.intercept.to_string()]);
                builder.push_record([
                    "wake".to_string(),
                    artifact.coefficients.wake.to_string(),
                ]);
                builder.push_record([
                    "estimated_sleep".to_string(),
                    artifact.coefficients.estimated_sleep.to_string(),
                ]);
                builder.push_record([
                    "coffee".to_string(),
                    artifact.coefficients.coffee.to_string(),
                ]);
                if let Some(min) = artifact.min_output {
                    builder.push_record(["Min output".to_string(), min.to_string()]);
                }
                if let Some(max) = artifact.max_output {
                    builder.push_record(["Max output".to_string(), max.to_string()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
