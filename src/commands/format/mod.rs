//! Shared output formatting helpers for commands

pub mod dispatch;
pub mod report;

pub(crate) use dispatch::output_by_format_result;
pub use report::{human_summary, print_records_runs, GraphSummary, StrategyRun};

/// Print a records header line: `H ferry=1 records=1 mode=<mode> k=v ...`
pub fn print_records_header(mode: &str, extra_fields: &[(&str, String)]) {
    let mut parts = vec!["H ferry=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}
