//! Model command implementation.

use crate::error::Result;
use crate::output::Formatter;
use betterrest_model::ModelSource;

/// Execute the model command.
///
/// Loads the artifact eagerly so a broken file is reported with its cause.
pub fn execute_model(source: &ModelSource, formatter: &Formatter) -> Result<()> {
    let model = source.load()?;
    println!("{}", formatter.format_model(model.artifact(), &source.describe())?);
    Ok(())
}
