//! End-to-end searches over the river-crossing graph

use ferry_core::graph::{ClearScope, SearchSession, SearchStrategy, Strategy, TraversalState, Weight};
use ferry_core::puzzle::{build_graph, describe_move, is_safe_state, render_path, PuzzleSpec};

fn session(spec: &PuzzleSpec) -> SearchSession<ferry_core::puzzle::RiverState> {
    SearchSession::new(build_graph(spec).unwrap())
}

#[test]
fn test_classic_puzzle_graph_shape() {
    let graph = build_graph(&PuzzleSpec::default()).unwrap();
    assert_eq!(graph.vertex_count(), 16);
    assert_eq!(graph.edge_count(), 34);
}

#[test]
fn test_bfs_finds_eleven_crossings() {
    let spec = PuzzleSpec::default();
    let mut session = session(&spec);
    let result = session.run(&Strategy::Bfs, &spec.start(), &spec.goal()).unwrap();

    assert!(result.found);
    assert_eq!(result.path_length, 11);
    assert_eq!(result.path.len(), 12);
    assert_eq!(result.path.first(), Some(&spec.start()));
    assert_eq!(result.path.last(), Some(&spec.goal()));
    assert_eq!(result.visited, 15);
}

#[test]
fn test_dijkstra_finds_weight_eleven() {
    let spec = PuzzleSpec::default();
    let mut session = session(&spec);
    let result = session
        .run(&Strategy::Dijkstra, &spec.start(), &spec.goal())
        .unwrap();

    assert!(result.found);
    assert_eq!(result.total_weight, Weight::from(11));
    assert_eq!(result.path_length, 11);
}

#[test]
fn test_dfs_path_is_valid() {
    let spec = PuzzleSpec::default();
    let mut session = session(&spec);
    let result = session.run(&Strategy::Dfs, &spec.start(), &spec.goal()).unwrap();

    assert!(result.found);
    assert_eq!(result.visited, 12);
    for pair in result.path.windows(2) {
        assert!(session.graph().weight_of(&pair[0], &pair[1]).is_some());
        assert!(describe_move(&pair[0], &pair[1]).is_some());
    }
    assert!(result.path.iter().all(is_safe_state));
}

#[test]
fn test_visited_counts_are_bounded() {
    let spec = PuzzleSpec::default();
    let mut session = session(&spec);
    let vertex_count = session.graph().vertex_count();

    let mut visited = Vec::new();
    for strategy in Strategy::ALL {
        let result = session.run(&strategy, &spec.start(), &spec.goal()).unwrap();
        assert!(result.visited <= vertex_count);
        assert_eq!(session.reporter().count(), result.visited);
        visited.push(result.visited);
        session.clear(ClearScope::TraversalOnly);
    }
    // bfs, dfs, dijkstra
    assert!(visited[2] <= visited[0]);
}

#[test]
fn test_unsolvable_puzzle_reports_not_found() {
    // Four pairs with a two-seat boat cannot cross
    let spec = PuzzleSpec::new(4, 4, 2);
    let mut session = session(&spec);

    for strategy in Strategy::ALL {
        let result = session.run(&strategy, &spec.start(), &spec.goal()).unwrap();
        assert!(!result.found, "{strategy} should not find a path");
        assert!(result.path.is_empty());
        assert_eq!(result.path_length, 0);
        assert_eq!(result.visited, 11);
    }
}

#[test]
fn test_larger_boat_shortens_the_trip() {
    let spec = PuzzleSpec::new(4, 4, 3);
    let mut session = session(&spec);
    let result = session
        .run(&Strategy::Dijkstra, &spec.start(), &spec.goal())
        .unwrap();
    assert_eq!(result.path_length, 9);
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let spec = PuzzleSpec::default();
    let graph = build_graph(&spec).unwrap();
    let rebuilt = build_graph(&spec).unwrap();

    for strategy in Strategy::ALL {
        let mut first = TraversalState::new();
        let mut second = TraversalState::new();
        let a = strategy
            .find(&graph, &mut first, &spec.start(), &spec.goal(), &Default::default())
            .unwrap();
        let b = strategy
            .find(&rebuilt, &mut second, &spec.start(), &spec.goal(), &Default::default())
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(first.visit_order(), second.visit_order());
    }
}

#[test]
fn test_clear_is_idempotent() {
    let spec = PuzzleSpec::default();
    let mut session = session(&spec);
    session.run(&Strategy::Bfs, &spec.start(), &spec.goal()).unwrap();

    session.clear(ClearScope::TraversalOnly);
    session.clear(ClearScope::TraversalOnly);
    assert_eq!(session.reporter().count(), 0);
    assert_eq!(session.graph().edge_count(), 34);

    session.clear(ClearScope::Everything);
    session.clear(ClearScope::Everything);
    assert!(session.graph().is_empty());
}

#[test]
fn test_rendered_solution_has_one_frame_per_state() {
    let spec = PuzzleSpec::default();
    let mut session = session(&spec);
    let result = session.run(&Strategy::Bfs, &spec.start(), &spec.goal()).unwrap();

    let frames = render_path(&spec, &result.path);
    assert_eq!(frames.len(), 12);
    assert!(frames[0].contains("CCC MMM |"));
    assert!(frames[11].ends_with("| CCC MMM"));
}

#[test]
fn test_concurrent_searches_use_independent_state() {
    let spec = PuzzleSpec::default();
    let graph = build_graph(&spec).unwrap();
    let (start, goal) = (spec.start(), spec.goal());

    let expected: Vec<_> = Strategy::ALL
        .iter()
        .map(|strategy| {
            let mut state = TraversalState::new();
            strategy
                .find(&graph, &mut state, &start, &goal, &Default::default())
                .unwrap()
        })
        .collect();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = Strategy::ALL
            .into_iter()
            .map(|strategy| {
                let graph = &graph;
                scope.spawn(move || {
                    let mut state = TraversalState::new();
                    strategy
                        .find(graph, &mut state, &start, &goal, &Default::default())
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, expected);
}
