use crate::error::{FerryError, Result};
use crate::graph::state::TraversalState;
use crate::graph::store::EdgeStore;
use crate::graph::types::{PathResult, SearchOptions, Vertex, Weight, TRUNCATION_MAX_EXPANSIONS};

/// Apply the unknown-vertex policy to both endpoints.
///
/// Returns `Ok(false)` when an endpoint is absent and the search should
/// report NotFound, or `UnknownVertex` in strict mode.
pub fn check_endpoints<V: Vertex>(
    graph: &EdgeStore<V>,
    source: &V,
    target: &V,
    opts: &SearchOptions,
) -> Result<bool> {
    for endpoint in [source, target] {
        if !graph.contains(endpoint) {
            if opts.strict_endpoints {
                return Err(FerryError::unknown_vertex(endpoint));
            }
            tracing::debug!(vertex = %endpoint, "endpoint_not_in_graph");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Walk predecessor links back from `target` to `source`.
///
/// Returns `None` if the chain is broken. The walk is bounded by the number
/// of recorded visits, so a corrupted (cyclic) map cannot loop forever.
pub fn reconstruct_path<V: Vertex>(
    state: &TraversalState<V>,
    source: &V,
    target: &V,
) -> Option<Vec<V>> {
    let mut path = vec![target.clone()];
    let mut current = target;
    let max_steps = state.visited_count().max(1);

    while current != source {
        if path.len() > max_steps {
            return None;
        }
        current = state.predecessor(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}

/// Sum of edge weights along consecutive vertices of `path`
pub fn path_weight<V: Vertex>(graph: &EdgeStore<V>, path: &[V]) -> Weight {
    path.windows(2)
        .filter_map(|pair| graph.weight_of(&pair[0], &pair[1]))
        .sum()
}

/// Build the final result once `target` has been reached (or not)
pub fn build_result<V: Vertex>(
    graph: &EdgeStore<V>,
    state: &TraversalState<V>,
    source: &V,
    target: &V,
) -> PathResult<V> {
    let visited = state.visited_count();
    let path = if state.is_visited(target) {
        reconstruct_path(state, source, target)
    } else {
        None
    };

    match path {
        Some(path) => {
            let total_weight = path_weight(graph, &path);
            PathResult::found(source.clone(), target.clone(), path, total_weight, visited)
        }
        None => PathResult::not_found(source.clone(), target.clone(), visited),
    }
}

/// Result for a search stopped by `max_expansions`
pub fn build_truncated_result<V: Vertex>(
    state: &TraversalState<V>,
    source: &V,
    target: &V,
) -> PathResult<V> {
    tracing::debug!(
        expansions = state.expansions(),
        visited = state.visited_count(),
        "search_truncated"
    );
    PathResult::truncated(
        source.clone(),
        target.clone(),
        state.visited_count(),
        TRUNCATION_MAX_EXPANSIONS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_path_walks_back_to_source() {
        let mut state = TraversalState::new();
        for v in ["a", "b", "c", "d"] {
            state.mark_visited(&v);
        }
        state.record_predecessor("b", "a");
        state.record_predecessor("c", "b");
        state.record_predecessor("d", "c");

        assert_eq!(
            reconstruct_path(&state, &"a", &"d"),
            Some(vec!["a", "b", "c", "d"])
        );
        assert_eq!(reconstruct_path(&state, &"a", &"a"), Some(vec!["a"]));
    }

    #[test]
    fn test_reconstruct_path_broken_chain() {
        let mut state = TraversalState::new();
        state.mark_visited(&"a");
        state.mark_visited(&"z");
        assert_eq!(reconstruct_path(&state, &"a", &"z"), None);
    }

    #[test]
    fn test_reconstruct_path_stops_on_cycle() {
        let mut state = TraversalState::new();
        state.mark_visited(&"x");
        state.mark_visited(&"y");
        state.record_predecessor("x", "y");
        state.record_predecessor("y", "x");
        assert_eq!(reconstruct_path(&state, &"s", &"x"), None);
    }

    #[test]
    fn test_path_weight() {
        let graph = EdgeStore::from_edges([("a", "b", 2.5), ("b", "c", 0.5)]).unwrap();
        assert_eq!(path_weight(&graph, &["a", "b", "c"]), Weight::new(3.0));
        assert_eq!(path_weight(&graph, &["a"]), Weight::ZERO);
    }

    #[test]
    fn test_check_endpoints_policy() {
        let graph = EdgeStore::from_edges([("a", "b", 1)]).unwrap();
        let lenient = SearchOptions::default();
        let strict = SearchOptions {
            strict_endpoints: true,
            ..Default::default()
        };

        assert!(check_endpoints(&graph, &"a", &"b", &lenient).unwrap());
        assert!(!check_endpoints(&graph, &"a", &"q", &lenient).unwrap());

        let err = check_endpoints(&graph, &"q", &"b", &strict).unwrap_err();
        assert!(matches!(err, FerryError::UnknownVertex { ref vertex } if vertex == "q"));
    }
}
