//! CLI argument parsing for ferry
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{PathArgs, SolveArgs};
pub use ferry_core::format::OutputFormat;
use parse::parse_output_format;

/// Ferry - path finding over weighted directed graphs
#[derive(Parser, Debug)]
#[command(name = "ferry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "ferry_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to $FERRY_CONFIG_DIR/config.toml or the
    /// platform config directory)
    #[arg(long, global = true, env = "FERRY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve the missionaries and cannibals river crossing
    Solve(SolveArgs),

    /// Find a path through an edge list loaded from a TOML file
    Path(PathArgs),

    /// Show the effective configuration
    Config,
}
