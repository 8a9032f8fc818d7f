//! `ferry config` - show the effective configuration

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_records_header};
use ferry_core::error::{FerryError, Result};
use ferry_core::format::quote_record_value;

/// Execute the config command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config;
    let source = ctx
        .config_source
        .map(|path| path.display().to_string());

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "source": source,
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), FerryError>(())
        },
        human => {
            if !ctx.cli.quiet {
                match &source {
                    Some(path) => println!("# loaded from {}", path),
                    None => println!("# defaults (no config file found)"),
                }
            }
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| FerryError::Other(format!("failed to serialize config: {}", e)))?;
            print!("{}", rendered);
        },
        records => {
            let source_field = source.as_deref().unwrap_or("-");
            print_records_header(
                "config",
                &[("source", quote_record_value(source_field))],
            );
            let puzzle = &config.puzzle;
            let search = &config.search;
            println!("C puzzle.cannibals={}", puzzle.cannibals);
            println!("C puzzle.missionaries={}", puzzle.missionaries);
            println!("C puzzle.boat_capacity={}", puzzle.boat_capacity);
            println!("C search.strategy={}", search.strategy);
            match search.max_expansions {
                Some(limit) => println!("C search.max_expansions={}", limit),
                None => println!("C search.max_expansions=-"),
            }
            println!("C search.strict_endpoints={}", search.strict_endpoints);
        }
    )
}
