use crate::error::Result;
use crate::graph::algos::shared::{build_result, build_truncated_result, check_endpoints};
use crate::graph::algos::SearchStrategy;
use crate::graph::state::TraversalState;
use crate::graph::store::{EdgeStore, Neighbors};
use crate::graph::types::{PathResult, SearchOptions, Vertex};

/// Depth-first search over an explicit stack.
///
/// Each stack frame holds a vertex and a cursor into its outgoing edges, so
/// the walk matches the recursive formulation without growing the call
/// stack: descend into the earliest-inserted unvisited neighbor of the top
/// frame, pop the frame when none is left. Vertices are marked visited when
/// discovered, and pushing a frame counts as expanding its vertex. The path returned is whatever the descent found first and may be
/// far from the shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl SearchStrategy for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "dfs"
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
        if state.budget_exhausted(opts) {
            return Ok(build_truncated_result(state, source, target));
        }
        state.record_expansion();

        let mut stack: Vec<(V, Neighbors<'_, V>)> =
            vec![(source.clone(), graph.neighbors_of(source))];

        while let Some((current, neighbors)) = stack.last_mut() {
            let Some(edge) = neighbors.find(|edge| !state.is_visited(&edge.to)) else {
                stack.pop();
                continue;
            };
            let current = current.clone();

            state.mark_visited(&edge.to);
            state.record_predecessor(edge.to.clone(), current);

            if &edge.to == target {
                let result = build_result(graph, state, source, target);
                tracing::debug!(
                    path_length = result.path_length,
                    visited = result.visited,
                    depth = stack.len(),
                    "dfs_found"
                );
                return Ok(result);
            }

            if state.budget_exhausted(opts) {
                return Ok(build_truncated_result(state, source, target));
            }
            state.record_expansion();
            stack.push((edge.to.clone(), graph.neighbors_of(&edge.to)));
        }

        tracing::debug!(visited = state.visited_count(), "dfs_not_found");
        Ok(build_result(graph, state, source, target))
    }
}
