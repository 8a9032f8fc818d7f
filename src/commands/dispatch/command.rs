//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use ferry_core::config::FerryConfig;
use ferry_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    /// Configuration file values merged over defaults
    pub config: &'a FerryConfig,
    /// File the configuration came from, if any
    pub config_source: Option<&'a Path>,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        config: &'a FerryConfig,
        config_source: Option<&'a Path>,
        start: Instant,
    ) -> Self {
        Self {
            cli,
            config,
            config_source,
            start,
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("ferry {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Path finding over weighted directed graphs.");
        println!();
        println!("Run `ferry --help` for usage information.");
        Ok(())
    }
}
