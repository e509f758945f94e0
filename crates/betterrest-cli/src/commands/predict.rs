//! Predict command implementation.

use crate::cli::PredictArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use betterrest_domain::{CaffeineIntake, SleepGoal, SleepModel};
use betterrest_predictor::{BedtimePredictor, FormInputs, Notice};
use tracing::warn;

/// Execute the predict command.
pub fn execute_predict<M>(
    args: PredictArgs,
    config: &Config,
    predictor: &BedtimePredictor<M>,
    formatter: &Formatter,
) -> Result<()>
where
    M: SleepModel,
    M::Error: std::fmt::Display,
{
    let inputs = resolve_inputs(&args, config)?;

    match predictor.predict(inputs.wake_up, inputs.sleep_goal, inputs.coffee) {
        Ok(bedtime) => {
            println!("{}", formatter.format_prediction(inputs, &bedtime)?);
            Ok(())
        }
        Err(e) => {
            warn!("Bedtime prediction failed: {}", e);
            eprintln!("{}", formatter.notice(&Notice::inference_failure()));
            Err(CliError::PredictionFailed)
        }
    }
}

/// Merge command-line values over the configured defaults.
pub fn resolve_inputs(args: &PredictArgs, config: &Config) -> Result<FormInputs> {
    let defaults = config.form_inputs()?;

    Ok(FormInputs {
        wake_up: args.wake.unwrap_or(defaults.wake_up),
        sleep_goal: match args.sleep {
            Some(hours) => SleepGoal::new(hours)?,
            None => defaults.sleep_goal,
        },
        coffee: match args.coffee {
            Some(cups) => CaffeineIntake::new(cups)?,
            None => defaults.coffee,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use betterrest_domain::{ClockStyle, WakeUpTime};
    use betterrest_model::MockSleepModel;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Quiet, false, ClockStyle::TwentyFourHour)
    }

    fn args(wake: Option<WakeUpTime>, sleep: Option<u8>, coffee: Option<u8>) -> PredictArgs {
        PredictArgs { wake, sleep, coffee }
    }

    #[test]
    fn test_defaults_fill_missing_values() {
        let mut config = Config::default();
        config.defaults.coffee = 4;

        let inputs = resolve_inputs(&args(None, Some(10), None), &config).unwrap();
        assert_eq!(inputs.wake_up, WakeUpTime::new(7, 0).unwrap());
        assert_eq!(inputs.sleep_goal.get(), 10);
        assert_eq!(inputs.coffee.cups(), 4);
    }

    #[test]
    fn test_out_of_range_argument_rejected() {
        let result = resolve_inputs(&args(None, Some(1), None), &Config::default());
        assert!(matches!(result, Err(CliError::Input(_))));
    }

    #[test]
    fn test_successful_prediction() {
        let model = MockSleepModel::new(8.0 * 3600.0);
        let predictor = BedtimePredictor::new(model.clone());

        let result = execute_predict(
            args(Some(WakeUpTime::new(6, 0).unwrap()), None, Some(2)),
            &Config::default(),
            &predictor,
            &formatter(),
        );

        assert!(result.is_ok());
        assert_eq!(model.last_features().unwrap().coffee, 2.0);
    }

    #[test]
    fn test_failed_prediction() {
        let predictor = BedtimePredictor::new(MockSleepModel::failing());

        let result = execute_predict(args(None, None, None), &Config::default(), &predictor, &formatter());

        assert!(matches!(result, Err(CliError::PredictionFailed)));
    }
}
