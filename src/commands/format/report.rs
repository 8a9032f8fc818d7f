//! Per-strategy search results, shared by `solve` and `path`

use std::fmt::Display;

use ferry_core::format::quote_record_value;
use ferry_core::graph::{EdgeStore, PathResult, Strategy, Vertex};
use serde::Serialize;

/// Size of the searched graph
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
}

impl GraphSummary {
    pub fn of<V: Vertex>(graph: &EdgeStore<V>) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        }
    }
}

/// One strategy's outcome, with optional rendered steps
#[derive(Debug, Clone, Serialize)]
pub struct StrategyRun<V> {
    pub strategy: Strategy,
    #[serde(flatten)]
    pub result: PathResult<V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

impl<V> StrategyRun<V> {
    pub fn new(strategy: Strategy, result: PathResult<V>) -> Self {
        Self {
            strategy,
            result,
            steps: None,
        }
    }
}

/// One-line summary, e.g. `dijkstra: 11 crossings, total weight 11, visited 15`
pub fn human_summary<V>(run: &StrategyRun<V>, unit: &str) -> String {
    let result = &run.result;
    let label = format!("{}:", run.strategy);
    if result.found {
        format!(
            "{label:<9} {} {unit}, total weight {}, visited {}",
            result.path_length, result.total_weight, result.visited
        )
    } else if result.truncated {
        format!(
            "{label:<9} stopped by {} before reaching the target, visited {}",
            result.truncation_reason.as_deref().unwrap_or("limit"),
            result.visited
        )
    } else {
        format!("{label:<9} no path, visited {}", result.visited)
    }
}

/// `R` summary, `P` path and `S` step lines of one run.
///
/// Path vertices and step headers are quoted so values with spaces stay
/// one field each.
pub fn record_lines<V: Display>(run: &StrategyRun<V>) -> Vec<String> {
    let result = &run.result;
    let mut summary = format!(
        "R {} found={} length={} weight={} visited={}",
        run.strategy, result.found, result.path_length, result.total_weight, result.visited
    );
    if let Some(reason) = &result.truncation_reason {
        summary.push_str(&format!(" truncated={}", reason));
    }
    let mut lines = vec![summary];

    if result.found {
        let path: Vec<String> = result
            .path
            .iter()
            .map(|vertex| quote_record_value(&vertex.to_string()))
            .collect();
        lines.push(format!("P {} {}", run.strategy, path.join(" ")));
    }

    for (step, text) in run.steps.iter().flatten().enumerate() {
        let header = text.lines().next().unwrap_or_default();
        lines.push(format!("S {} {} {}", run.strategy, step, quote_record_value(header)));
    }
    lines
}

pub fn print_records_runs<V: Display>(runs: &[StrategyRun<V>]) {
    for run in runs {
        for line in record_lines(run) {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_core::graph::Weight;

    #[test]
    fn test_human_summary_found() {
        let run = StrategyRun::new(
            Strategy::Bfs,
            PathResult::found("a", "c", vec!["a", "b", "c"], Weight::from(5), 3),
        );
        assert_eq!(
            human_summary(&run, "edges"),
            "bfs:      2 edges, total weight 5, visited 3"
        );
    }

    #[test]
    fn test_human_summary_not_found_and_truncated() {
        let run = StrategyRun::new(Strategy::Dfs, PathResult::not_found("a", "z", 4));
        assert_eq!(human_summary(&run, "edges"), "dfs:      no path, visited 4");

        let run = StrategyRun::new(
            Strategy::Dijkstra,
            PathResult::truncated("a", "z", 2, "max_expansions"),
        );
        assert!(human_summary(&run, "edges").contains("stopped by max_expansions"));
    }

    #[test]
    fn test_record_lines_quote_vertices_with_spaces() {
        let run = StrategyRun::new(
            Strategy::Bfs,
            PathResult::found(
                "new york",
                "boston",
                vec!["new york", "boston"],
                Weight::from(3),
                2,
            ),
        );
        assert_eq!(
            record_lines(&run),
            vec![
                "R bfs found=true length=1 weight=3 visited=2".to_string(),
                "P bfs \"new york\" \"boston\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_record_lines_truncated_has_no_path() {
        let run = StrategyRun::new(
            Strategy::Dfs,
            PathResult::truncated("a", "z", 1, "max_expansions"),
        );
        assert_eq!(
            record_lines(&run),
            vec!["R dfs found=false length=0 weight=0 visited=1 truncated=max_expansions".to_string()]
        );
    }

    #[test]
    fn test_steps_omitted_from_json_when_absent() {
        let run = StrategyRun::new(Strategy::Bfs, PathResult::not_found("a", "b", 0));
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["strategy"], "bfs");
        assert_eq!(json["found"], false);
        assert!(json.get("steps").is_none());
    }
}
