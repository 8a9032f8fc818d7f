//! JSON output formatting for solve command

use crate::commands::format::{GraphSummary, StrategyRun};
use ferry_core::error::Result;
use ferry_core::puzzle::{PuzzleSpec, RiverState};

/// Output in JSON format
pub fn output_json(
    spec: &PuzzleSpec,
    summary: &GraphSummary,
    runs: &[StrategyRun<RiverState>],
) -> Result<()> {
    let output = serde_json::json!({
        "puzzle": spec,
        "start": spec.start(),
        "goal": spec.goal(),
        "graph": summary,
        "results": runs,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
