//! Trace command implementation

use std::path::{Path, PathBuf};

use miette::Result;
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use eswalk_core::{Trace, TraverseError, Traverser};

use crate::cli::{Cli, OutputFormat};
use crate::output::output_traces;

use super::load_config;

/// Why a single file could not be traced.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TraceFileError {
    #[error("Failed to read file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error(transparent)]
    Traverse(#[from] TraverseError),
}

/// The trace of one input file, or the reason it failed.
#[derive(Debug)]
pub struct FileTrace {
    pub path: PathBuf,
    pub result: Result<Trace, TraceFileError>,
}

pub fn run_trace(
    cli: &Cli,
    files: &[PathBuf],
    lenient: bool,
    format: OutputFormat,
    max_depth: Option<usize>,
) -> Result<bool> {
    let mut config = load_config(cli)?;
    if lenient {
        config = config.lenient();
    }
    if let Some(depth) = max_depth {
        config = config.max_depth(depth);
    }

    let registry = config.registry();
    let traverser = Traverser::with_config(&registry, &config);

    info!("Tracing {} file(s)", files.len());

    let results: Vec<FileTrace> = files
        .par_iter()
        .map(|path| FileTrace {
            path: path.clone(),
            result: trace_file(&traverser, path),
        })
        .collect();

    output_traces(&results, format)
}

fn trace_file(traverser: &Traverser<'_>, path: &Path) -> Result<Trace, TraceFileError> {
    debug!("Tracing {}", path.display());
    let content = std::fs::read_to_string(path).map_err(TraceFileError::Read)?;
    let tree = parse_tree(&content).map_err(TraceFileError::Parse)?;
    let trace = Trace::dump_with(traverser, &tree);
    release(tree);
    Ok(trace?)
}

/// Parses JSON of any nesting depth, growing the stack on the heap as needed.
fn parse_tree(content: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let tree = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(tree)
}

/// Drops a tree without recursing into it.
fn release(tree: Value) {
    let mut pending = vec![tree];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, child)| child)),
            _ => {}
        }
    }
}
