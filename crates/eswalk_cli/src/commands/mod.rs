//! Subcommand implementations

mod keys;
mod trace;
mod types;

pub use keys::run_keys;
pub use trace::{FileTrace, TraceFileError, run_trace};
pub use types::run_types;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use eswalk_core::TraverseConfig;

use crate::cli::Cli;

/// Loads the config named by `--config`, or the one discovered in the
/// current directory, or the defaults.
pub fn load_config(cli: &Cli) -> Result<TraverseConfig> {
    if let Some(ref path) = cli.config {
        return TraverseConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = TraverseConfig::discover(".") {
        return TraverseConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(TraverseConfig::new())
}
