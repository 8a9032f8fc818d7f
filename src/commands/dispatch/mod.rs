//! Command dispatch logic for ferry

use std::time::Instant;

use crate::cli::Cli;
use ferry_core::config::FerryConfig;
use ferry_core::error::Result;

mod command;
mod commands;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let (config, config_source) = FerryConfig::discover(cli.config.as_deref())?;

    trace_command!(cli, start, "load_config");

    let ctx = CommandContext::new(cli, &config, config_source.as_deref(), start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
