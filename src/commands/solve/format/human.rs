//! Human-readable output formatting for solve command

use crate::cli::Cli;
use crate::commands::format::{human_summary, GraphSummary, StrategyRun};
use ferry_core::puzzle::{PuzzleSpec, RiverState};

/// Output in human-readable format
pub fn output_human(
    cli: &Cli,
    spec: &PuzzleSpec,
    summary: &GraphSummary,
    runs: &[StrategyRun<RiverState>],
) {
    if !cli.quiet {
        println!(
            "Puzzle: {} cannibals, {} missionaries, boat capacity {}",
            spec.cannibals, spec.missionaries, spec.boat_capacity
        );
        println!(
            "Graph: {} states, {} crossings",
            summary.vertices, summary.edges
        );
        println!();
    }

    for run in runs {
        println!("{}", human_summary(run, "crossings"));

        for frame in run.steps.iter().flatten() {
            for line in frame.lines() {
                println!("    {}", line);
            }
        }
    }
}
