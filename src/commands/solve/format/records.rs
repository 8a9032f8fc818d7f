//! Records output formatting for solve command

use crate::commands::format::{print_records_header, print_records_runs, GraphSummary, StrategyRun};
use ferry_core::puzzle::{PuzzleSpec, RiverState};

/// Output in records format
pub fn output_records(spec: &PuzzleSpec, summary: &GraphSummary, runs: &[StrategyRun<RiverState>]) {
    print_records_header(
        "solve",
        &[
            ("cannibals", spec.cannibals.to_string()),
            ("missionaries", spec.missionaries.to_string()),
            ("capacity", spec.boat_capacity.to_string()),
            ("vertices", summary.vertices.to_string()),
            ("edges", summary.edges.to_string()),
        ],
    );
    print_records_runs(runs);
}
