//! `ferry solve` - missionaries and cannibals river crossing
//!
//! Builds the state graph for the configured puzzle and runs one strategy or
//! all three on the same store, clearing traversal state between runs.

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::SolveArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{output_by_format_result, GraphSummary, StrategyRun};
use ferry_core::config::{FerryConfig, SearchConfig};
use ferry_core::error::Result;
use ferry_core::graph::{ClearScope, SearchSession, SearchStrategy};
use ferry_core::puzzle::{build_graph, render_path, PuzzleSpec};

use self::format::{output_human, output_json, output_records};

/// Execute the solve command
pub fn execute(ctx: &CommandContext, args: &SolveArgs) -> Result<()> {
    let config = effective_config(ctx.config, args);
    config.validate()?;
    let spec = config.puzzle;

    let graph = build_graph(&spec)?;
    let summary = GraphSummary::of(&graph);
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let mut session = SearchSession::with_options(graph, config.search.options());
    let (start, goal) = (spec.start(), spec.goal());
    let mut runs = Vec::new();

    for strategy in config.search.strategy.strategies() {
        let started = Instant::now();
        let result = session.run(&strategy, &start, &goal)?;
        ferry_core::trace_time!(started, "solve_strategy", strategy = strategy.name());
        debug!(
            strategy = strategy.name(),
            visited = session.reporter().count(),
            "strategy_finished"
        );

        let mut run = StrategyRun::new(strategy, result);
        if args.steps && run.result.found {
            run.steps = Some(render_path(&spec, &run.result.path));
        }
        runs.push(run);
        session.clear(ClearScope::TraversalOnly);
    }

    output_by_format_result!(ctx.cli.format,
        json => output_json(&spec, &summary, &runs),
        human => { output_human(ctx.cli, &spec, &summary, &runs) },
        records => { output_records(&spec, &summary, &runs) }
    )
}

/// Command-line flags layered over the configuration file
pub fn effective_config(base: &FerryConfig, args: &SolveArgs) -> FerryConfig {
    FerryConfig {
        puzzle: PuzzleSpec {
            cannibals: args.cannibals.unwrap_or(base.puzzle.cannibals),
            missionaries: args.missionaries.unwrap_or(base.puzzle.missionaries),
            boat_capacity: args.capacity.unwrap_or(base.puzzle.boat_capacity),
        },
        search: SearchConfig {
            strategy: args.strategy.unwrap_or(base.search.strategy),
            max_expansions: args.max_expansions.or(base.search.max_expansions),
            strict_endpoints: args.strict || base.search.strict_endpoints,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_core::config::StrategyChoice;

    fn args() -> SolveArgs {
        SolveArgs {
            strategy: None,
            cannibals: None,
            missionaries: None,
            capacity: None,
            max_expansions: None,
            strict: false,
            steps: false,
        }
    }

    #[test]
    fn test_effective_config_defaults_to_file_values() {
        let base = FerryConfig {
            puzzle: PuzzleSpec::new(4, 4, 3),
            search: SearchConfig {
                strategy: StrategyChoice::Bfs,
                max_expansions: Some(10),
                strict_endpoints: true,
            },
        };
        assert_eq!(effective_config(&base, &args()), base);
    }

    #[test]
    fn test_flags_override_file_values() {
        let base = FerryConfig::default();
        let args = SolveArgs {
            strategy: Some(StrategyChoice::Dfs),
            capacity: Some(3),
            max_expansions: Some(5),
            ..args()
        };
        let config = effective_config(&base, &args);
        assert_eq!(config.puzzle, PuzzleSpec::new(3, 3, 3));
        assert_eq!(config.search.strategy, StrategyChoice::Dfs);
        assert_eq!(config.search.max_expansions, Some(5));
        assert!(!config.search.strict_endpoints);
    }
}
