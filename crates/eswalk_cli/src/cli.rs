//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// eswalk - Trace ESTree syntax trees
#[derive(Parser)]
#[command(name = "eswalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the enter/leave trace of ESTree JSON files
    Trace {
        /// ESTree JSON files to trace
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Treat unknown node types as leaves instead of failing
        #[arg(long)]
        lenient: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Fail when nodes nest deeper than this
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Show the child fields visited for a node type
    Keys {
        /// Node type name, e.g. `IfStatement`
        node_type: String,
    },

    /// List every registered node type
    Types,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
