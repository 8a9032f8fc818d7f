use crate::error::Result;
use crate::graph::algos::shared::{build_result, build_truncated_result, check_endpoints};
use crate::graph::algos::SearchStrategy;
use crate::graph::state::TraversalState;
use crate::graph::store::EdgeStore;
use crate::graph::types::{PathResult, SearchOptions, Vertex, Weight};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Priority frontier entry, ordered by tentative distance then push order
#[derive(Debug, Clone)]
pub struct HeapEntry<V> {
    pub vertex: V,
    pub distance: Weight,
    /// Monotonic push counter; breaks distance ties in insertion order
    pub seq: u64,
}

impl<V> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for HeapEntry<V> {}

impl<V> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Dijkstra's shortest-path search.
///
/// Precondition: every edge weight is non-negative. `EdgeStore` enforces this
/// on insertion; the result is only guaranteed optimal under it.
///
/// Improved distances are pushed as new heap entries and stale entries are
/// skipped on pop. A vertex counts as visited once it is settled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSearch;

impl SearchStrategy for DijkstraSearch {
    fn name(&self) -> &'static str {
        "dijkstra"
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

        let mut seq: u64 = 0;
        let mut heap = BinaryHeap::new();
        state.set_distance(source.clone(), Weight::ZERO);
        heap.push(Reverse(HeapEntry {
            vertex: source.clone(),
            distance: Weight::ZERO,
            seq,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            if state.is_visited(&entry.vertex) || entry.distance > state.distance(&entry.vertex)
            {
                continue;
            }
            if state.budget_exhausted(opts) {
                return Ok(build_truncated_result(state, source, target));
            }
            state.record_expansion();
            state.mark_visited(&entry.vertex);

            if &entry.vertex == target {
                let result = build_result(graph, state, source, target);
                tracing::debug!(
                    total_weight = %result.total_weight,
                    path_length = result.path_length,
                    visited = result.visited,
                    "dijkstra_found"
                );
                return Ok(result);
            }

            for edge in graph.neighbors_of(&entry.vertex) {
                if state.is_visited(&edge.to) {
                    continue;
                }
                let candidate = entry.distance + edge.weight;
                // sums may overflow to infinity; first reach still counts
                let improves = state
                    .tentative_distance(&edge.to)
                    .is_none_or(|best| candidate < best);
                if improves {
                    state.relax(edge.to.clone(), entry.vertex.clone(), candidate);
                    seq += 1;
                    heap.push(Reverse(HeapEntry {
                        vertex: edge.to.clone(),
                        distance: candidate,
                        seq,
                    }));
                }
            }
        }

        tracing::debug!(settled = state.visited_count(), "dijkstra_not_found");
        Ok(build_result(graph, state, source, target))
    }
}
