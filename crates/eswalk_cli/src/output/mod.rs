//! Output formatting module

mod json;
mod text;

use miette::Result;

use crate::cli::OutputFormat;
use crate::commands::FileTrace;

/// Prints the traces and returns true if any file failed.
pub fn output_traces(results: &[FileTrace], format: OutputFormat) -> Result<bool> {
    let has_failures = results.iter().any(|r| r.result.is_err());

    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Text => text::output_text(results),
    }

    Ok(has_failures)
}
