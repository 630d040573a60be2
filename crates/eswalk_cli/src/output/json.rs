//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use crate::commands::FileTrace;

pub fn output_json(results: &[FileTrace]) -> Result<()> {
    let output: Vec<_> = results.iter().map(to_json).collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}

fn to_json(result: &FileTrace) -> serde_json::Value {
    let path = result.path.display().to_string();
    match &result.result {
        Ok(trace) => serde_json::json!({
            "path": path,
            "trace": trace,
        }),
        Err(error) => serde_json::json!({
            "path": path,
            "error": error.to_string(),
        }),
    }
}
