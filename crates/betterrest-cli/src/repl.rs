//! Interactive screen mode.
//!
//! A line-oriented stand-in for the single app screen: each command moves one
//! input control and the bedtime is recomputed straight away.

use crate::error::{CliError, Result};
use crate::output::{Formatter, ScreenView};
use betterrest_domain::{CaffeineIntake, SleepGoal, SleepModel, Step, WakeUpTime};
use betterrest_predictor::{BedtimeForm, Outcome};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive screen until `exit` or end of input.
pub fn run_repl<M>(form: &mut BedtimeForm<M>, formatter: &Formatter) -> Result<()>
where
    M: SleepModel,
    M::Error: std::fmt::Display,
{
    println!("{}", formatter.info("BetterRest - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor; history stays in memory
    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let outcome = form.refresh();
    show_outcome(form, outcome, formatter)?;

    loop {
        match editor.readline("betterrest> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Sleep well!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(ReplCommand::Show) => print_screen(form, formatter)?,
                    Ok(cmd) => {
                        let outcome = apply_command(form, cmd);
                        show_outcome(form, outcome, formatter)?;
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    Ok(())
}

/// A value for a stepper: an absolute setting or one press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperInput<T> {
    /// Jump straight to a value
    Set(T),
    /// Press the stepper once
    Step(Step),
}

/// Screen command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Leave the screen
    Exit,
    /// Print usage
    Help,
    /// Redraw the screen
    Show,
    /// Pick a wake-up time
    Wake(WakeUpTime),
    /// Move the sleep-goal stepper
    Sleep(StepperInput<SleepGoal>),
    /// Move the coffee stepper
    Coffee(StepperInput<CaffeineIntake>),
}

/// Parse a screen command line.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some((&head, args)) = parts.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "show" | "s" => Ok(ReplCommand::Show),
        "wake" | "w" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput("Usage: wake <HH:MM | H:MM AM/PM>".to_string()));
            }
            Ok(ReplCommand::Wake(args.join(" ").parse()?))
        }
        "sleep" => Ok(ReplCommand::Sleep(parse_stepper(args, "sleep <2-12 | + | ->")?)),
        "coffee" | "c" => Ok(ReplCommand::Coffee(parse_stepper(args, "coffee <1-10 | + | ->")?)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

fn parse_stepper<T>(args: &[&str], usage: &str) -> Result<StepperInput<T>>
where
    T: std::str::FromStr<Err = betterrest_domain::InputError>,
{
    let [arg] = args else {
        return Err(CliError::InvalidInput(format!("Usage: {}", usage)));
    };

    match Step::parse(arg) {
        Some(step) => Ok(StepperInput::Step(step)),
        None => Ok(StepperInput::Set(arg.parse()?)),
    }
}

/// Apply an input command to the form.
fn apply_command<M>(form: &mut BedtimeForm<M>, cmd: ReplCommand) -> Outcome
where
    M: SleepModel,
    M::Error: std::fmt::Display,
{
    match cmd {
        ReplCommand::Wake(wake_up) => form.set_wake_up(wake_up),
        ReplCommand::Sleep(StepperInput::Set(goal)) => form.set_sleep_goal(goal),
        ReplCommand::Sleep(StepperInput::Step(step)) => form.step_sleep_goal(step),
        ReplCommand::Coffee(StepperInput::Set(cups)) => form.set_coffee(cups),
        ReplCommand::Coffee(StepperInput::Step(step)) => form.step_coffee(step),
        ReplCommand::Exit | ReplCommand::Help | ReplCommand::Show => Outcome::Unchanged,
    }
}

/// Report an outcome: the notice on failure, then the screen.
fn show_outcome<M>(form: &mut BedtimeForm<M>, outcome: Outcome, formatter: &Formatter) -> Result<()>
where
    M: SleepModel,
    M::Error: std::fmt::Display,
{
    if let Outcome::Failed(notice) = outcome {
        eprintln!("{}", formatter.notice(&notice));
        // Acknowledged as soon as it is shown
        form.dismiss_notice();
    }
    print_screen(form, formatter)
}

fn print_screen<M>(form: &BedtimeForm<M>, formatter: &Formatter) -> Result<()>
where
    M: SleepModel,
    M::Error: std::fmt::Display,
{
    let text = form.displayed_text(formatter.clock());
    let view = ScreenView {
        inputs: form.inputs(),
        bedtime_text: &text,
        bedtime: form.bedtime(),
    };
    println!("{}", formatter.format_screen(&view)?);
    Ok(())
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  wake <time>          - Set wake-up time (07:30, 6:45 AM)");
    println!("  sleep <hours|+|->    - Set or step desired sleep (2-12 hours)");
    println!("  coffee <cups|+|->    - Set or step daily coffee (1-10 cups)");
    println!("  show                 - Show the screen again");
    println!("  help, ?              - Show this help");
    println!("  exit, quit, q        - Leave");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use betterrest_model::MockSleepModel;
    use betterrest_predictor::BedtimePredictor;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("show").unwrap(), ReplCommand::Show);
    }

    #[test]
    fn test_parse_wake() {
        assert_eq!(
            parse_repl_command("wake 6:30 AM").unwrap(),
            ReplCommand::Wake(WakeUpTime::new(6, 30).unwrap())
        );
        assert!(parse_repl_command("wake").is_err());
        assert!(matches!(parse_repl_command("wake 31:00"), Err(CliError::Input(_))));
    }

    #[test]
    fn test_parse_steppers() {
        assert_eq!(
            parse_repl_command("sleep +").unwrap(),
            ReplCommand::Sleep(StepperInput::Step(Step::Up))
        );
        assert_eq!(
            parse_repl_command("coffee 4").unwrap(),
            ReplCommand::Coffee(StepperInput::Set(CaffeineIntake::new(4).unwrap()))
        );
        assert!(parse_repl_command("coffee 11").is_err());
        assert!(parse_repl_command("sleep 1").is_err());
        assert!(parse_repl_command("sleep").is_err());
        assert!(parse_repl_command("sleep 8 9").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_repl_command("nap").unwrap_err();
        assert!(err.to_string().contains("Unknown command: nap"));
    }

    #[test]
    fn test_apply_updates_form() {
        let model = MockSleepModel::default();
        let mut form = BedtimeForm::new(BedtimePredictor::new(model.clone()));

        let outcome = apply_command(&mut form, parse_repl_command("coffee +").unwrap());
        assert!(matches!(outcome, Outcome::Updated(_)));
        assert_eq!(form.inputs().coffee.cups(), 2);

        let outcome = apply_command(&mut form, parse_repl_command("sleep 8").unwrap());
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(model.call_count(), 1);
    }

    #[test]
    fn test_failure_notice_is_dismissed_after_display() {
        let model = MockSleepModel::failing();
        let mut form = BedtimeForm::new(BedtimePredictor::new(model));
        let formatter = Formatter::new(
            crate::config::OutputFormat::Quiet,
            false,
            betterrest_domain::ClockStyle::TwelveHour,
        );

        let outcome = apply_command(&mut form, ReplCommand::Sleep(StepperInput::Step(Step::Up)));
        assert!(form.notice().is_some());

        show_outcome(&mut form, outcome, &formatter).unwrap();
        assert!(form.notice().is_none());
        assert!(form.bedtime().is_none());
    }
}
