//! `ferry path` - path finding through an edge list file

pub mod edges;

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, PathArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{
    human_summary, output_by_format_result, print_records_header, print_records_runs,
    GraphSummary, StrategyRun,
};
use ferry_core::config::{FerryConfig, SearchConfig};
use ferry_core::error::Result;
use ferry_core::format::quote_record_value;
use ferry_core::graph::{ClearScope, SearchSession, SearchStrategy};

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let config = FerryConfig {
        puzzle: ctx.config.puzzle,
        search: SearchConfig {
            strategy: args.strategy.unwrap_or(ctx.config.search.strategy),
            max_expansions: args.max_expansions.or(ctx.config.search.max_expansions),
            strict_endpoints: args.strict || ctx.config.search.strict_endpoints,
        },
    };
    config.validate()?;

    let graph = edges::load_edge_list(&args.file)?;
    let summary = GraphSummary::of(&graph);
    trace_command!(ctx.cli, ctx.start, "load_edges");

    let mut session = SearchSession::with_options(graph, config.search.options());
    let mut runs = Vec::new();
    for strategy in config.search.strategy.strategies() {
        let started = Instant::now();
        let result = session.run(&strategy, &args.from, &args.to)?;
        ferry_core::trace_time!(started, "path_strategy", strategy = strategy.name());
        debug!(
            strategy = strategy.name(),
            visited = session.reporter().count(),
            "strategy_finished"
        );
        runs.push(StrategyRun::new(strategy, result));
        session.clear(ClearScope::TraversalOnly);
    }

    output_by_format_result!(ctx.cli.format,
        json => output_json(&args.file, &summary, &runs),
        human => { output_human(ctx.cli, &summary, &runs) },
        records => { output_records(&args.file, &summary, &runs) }
    )
}

fn output_human(cli: &Cli, summary: &GraphSummary, runs: &[StrategyRun<String>]) {
    if !cli.quiet {
        println!("Graph: {} vertices, {} edges", summary.vertices, summary.edges);
        println!();
    }
    for run in runs {
        println!("{}", human_summary(run, "edges"));
        if run.result.found {
            println!("    {}", run.result.path.join(" -> "));
        }
    }
}

fn output_json(file: &Path, summary: &GraphSummary, runs: &[StrategyRun<String>]) -> Result<()> {
    let output = serde_json::json!({
        "file": file.display().to_string(),
        "graph": summary,
        "results": runs,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(file: &Path, summary: &GraphSummary, runs: &[StrategyRun<String>]) {
    print_records_header(
        "path",
        &[
            ("file", quote_record_value(&file.display().to_string())),
            ("vertices", summary.vertices.to_string()),
            ("edges", summary.edges.to_string()),
        ],
    );
    print_records_runs(runs);
}
