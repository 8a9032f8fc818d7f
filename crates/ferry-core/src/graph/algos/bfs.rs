use crate::error::Result;
use crate::graph::algos::shared::{build_result, build_truncated_result, check_endpoints};
use crate::graph::algos::SearchStrategy;
use crate::graph::state::TraversalState;
use crate::graph::store::EdgeStore;
use crate::graph::types::{PathResult, SearchOptions, Vertex};
use std::collections::VecDeque;

/// Breadth-first search with a FIFO frontier.
///
/// Vertices are marked visited when enqueued, so each is enqueued at most
/// once. The search stops as soon as the target is enqueued; the path found
/// has the fewest edges, not necessarily the least weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl SearchStrategy for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "bfs"
    }

    #[tracing::instrument(skip(self, graph, state, opts), fields(source = %source, target = %target, max_expansions = ?opts.max_expansions))]
    fn find<V: Vertex>(
        &self,
        graph: &EdgeStore<V>,
        state: &mut TraversalState<V>,
        source: &V,
        target: &V,
        opts: &SearchOptions,
    ) -> Result<PathResult<V>> {
        if !check_endpoints(graph, source, target, opts)? {
            return Ok(PathResult::not_found(source.clone(), target.clone(), 0));
        }

        state.mark_visited(source);
        if source == target {
            return Ok(build_result(graph, state, source, target));
        }

        let mut queue = VecDeque::from([source.clone()]);

        while let Some(current) = queue.pop_front() {
            if state.budget_exhausted(opts) {
                return Ok(build_truncated_result(state, source, target));
            }
            state.record_expansion();

            for edge in graph.neighbors_of(&current) {
                if !state.mark_visited(&edge.to) {
                    continue;
                }
                state.record_predecessor(edge.to.clone(), current.clone());

                if &edge.to == target {
                    let result = build_result(graph, state, source, target);
                    tracing::debug!(
                        path_length = result.path_length,
                        visited = result.visited,
                        "bfs_found"
                    );
                    return Ok(result);
                }
                queue.push_back(edge.to.clone());
            }
        }

        tracing::debug!(visited = state.visited_count(), "bfs_not_found");
        Ok(build_result(graph, state, source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(graph: &EdgeStore<&'static str>, from: &'static str, to: &'static str) -> PathResult<&'static str> {
        let mut state = TraversalState::new();
        BreadthFirstSearch
            .find(graph, &mut state, &from, &to, &SearchOptions::default())
            .unwrap()
    }

    #[test]
    fn test_bfs_prefers_fewest_edges_over_weight() {
        let graph = EdgeStore::from_edges([
            ("a", "b", 1),
            ("b", "c", 1),
            ("c", "d", 1),
            ("a", "d", 100),
        ])
        .unwrap();

        let result = run(&graph, "a", "d");
        assert!(result.found);
        assert_eq!(result.path, vec!["a", "d"]);
        assert_eq!(result.path_length, 1);
        assert_eq!(result.total_weight.value(), 100.0);
    }

    #[test]
    fn test_bfs_counts_vertices_off_the_path() {
        // a -> b, a -> c, b -> d: reaching d marks a, b, c, d
        let graph = EdgeStore::from_edges([("a", "b", 1), ("a", "c", 1), ("b", "d", 1)]).unwrap();
        let result = run(&graph, "a", "d");
        assert_eq!(result.path, vec!["a", "b", "d"]);
        assert_eq!(result.visited, 4);
    }

    #[test]
    fn test_bfs_stops_when_target_enqueued() {
        let graph = EdgeStore::from_edges([
            ("a", "t", 1),
            ("a", "x", 1),
            ("x", "y", 1),
        ])
        .unwrap();
        let result = run(&graph, "a", "t");
        assert!(result.found);
        // x is never marked: the target was discovered first
        assert_eq!(result.visited, 2);
    }

    #[test]
    fn test_bfs_not_found() {
        let graph = EdgeStore::from_edges([("a", "b", 1), ("c", "b", 1)]).unwrap();
        let result = run(&graph, "a", "c");
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.path_length, 0);
        assert_eq!(result.visited, 2);
    }

    #[test]
    fn test_bfs_source_equals_target() {
        let graph = EdgeStore::from_edges([("a", "b", 1)]).unwrap();
        let result = run(&graph, "a", "a");
        assert!(result.found);
        assert_eq!(result.path, vec!["a"]);
        assert_eq!(result.path_length, 0);
        assert_eq!(result.visited, 1);
    }

    #[test]
    fn test_bfs_handles_cycles() {
        let graph = EdgeStore::from_edges([
            ("a", "b", 1),
            ("b", "a", 1),
            ("b", "b", 1),
            ("b", "c", 1),
        ])
        .unwrap();
        let result = run(&graph, "a", "c");
        assert_eq!(result.path, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bfs_truncates_on_budget() {
        let graph = EdgeStore::from_edges([("a", "b", 1), ("b", "c", 1), ("c", "d", 1)]).unwrap();
        let mut state = TraversalState::new();
        let opts = SearchOptions {
            max_expansions: Some(1),
            ..Default::default()
        };
        let result = BreadthFirstSearch
            .find(&graph, &mut state, &"a", &"d", &opts)
            .unwrap();
        assert!(!result.found);
        assert!(result.truncated);
        assert_eq!(state.expansions(), 1);
    }
}
