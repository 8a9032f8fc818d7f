//! Subcommand routing

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use ferry_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Solve(args) => crate::commands::solve::execute(ctx, args),
            Commands::Path(args) => crate::commands::path::execute(ctx, args),
            Commands::Config => crate::commands::config::execute(ctx),
        }
    }
}
