//! Crossing rules and graph production for the river-crossing puzzle
//!
//! Vertices are `RiverState`s; an edge of weight 1 joins two states one
//! boat crossing apart when the resulting state is safe.

use crate::error::Result;
use crate::graph::EdgeStore;
use crate::puzzle::state::{Bank, PuzzleSpec, RiverState};

/// Weight of a single crossing
pub const CROSSING_WEIGHT: u32 = 1;

/// Bank populations are non-negative and missionaries are never outnumbered
/// by cannibals on a bank where any missionary stands.
pub fn is_safe(
    left_cannibals: i64,
    left_missionaries: i64,
    right_cannibals: i64,
    right_missionaries: i64,
) -> bool {
    if left_cannibals < 0 || left_missionaries < 0 || right_cannibals < 0 || right_missionaries < 0
    {
        return false;
    }
    let outnumbered = |cannibals: i64, missionaries: i64| missionaries != 0 && cannibals > missionaries;
    !(outnumbered(left_cannibals, left_missionaries)
        || outnumbered(right_cannibals, right_missionaries))
}

pub fn is_safe_state(state: &RiverState) -> bool {
    is_safe(
        i64::from(state.left_cannibals),
        i64::from(state.left_missionaries),
        i64::from(state.right_cannibals),
        i64::from(state.right_missionaries),
    )
}

/// Boat loads `(cannibals, missionaries)` of exactly `size` people:
/// all cannibals, all missionaries, then the mixed loads.
fn loads_of_size(size: u32) -> Vec<(u32, u32)> {
    let mut loads = vec![(size, 0)];
    if size > 0 {
        loads.push((0, size));
    }
    loads.extend((1..size).rev().map(|c| (c, size - c)));
    loads
}

/// Loads tried for a crossing towards `toward`, in edge insertion order.
///
/// Crossings to the right bank try the fullest boat first; crossings back
/// to the left bank try the lightest boat first.
pub fn crossing_loads(capacity: u32, toward: Bank) -> Vec<(u32, u32)> {
    let sizes: Vec<u32> = match toward {
        Bank::Right => (1..=capacity).rev().collect(),
        Bank::Left => (1..=capacity).collect(),
    };
    sizes.into_iter().flat_map(loads_of_size).collect()
}

/// States reachable from `state` in one crossing, in insertion order
pub fn successors(spec: &PuzzleSpec, state: &RiverState) -> Vec<RiverState> {
    let toward = state.boat.opposite();
    let (from_c, from_m) = state.on(state.boat);
    let (to_c, to_m) = state.on(toward);

    crossing_loads(spec.boat_capacity, toward)
        .into_iter()
        .filter_map(|(c, m)| {
            let from_c = i64::from(from_c) - i64::from(c);
            let from_m = i64::from(from_m) - i64::from(m);
            let to_c = i64::from(to_c) + i64::from(c);
            let to_m = i64::from(to_m) + i64::from(m);

            let (left, right) = match state.boat {
                Bank::Left => ((from_c, from_m), (to_c, to_m)),
                Bank::Right => ((to_c, to_m), (from_c, from_m)),
            };
            if !is_safe(left.0, left.1, right.0, right.1) {
                return None;
            }
            Some(RiverState::new(
                u32::try_from(left.0).ok()?,
                u32::try_from(left.1).ok()?,
                u32::try_from(right.0).ok()?,
                u32::try_from(right.1).ok()?,
                toward,
            ))
        })
        .collect()
}

/// Every `(from, to, weight)` triple of the puzzle graph.
///
/// Boat-on-left states come first, then boat-on-right; within each, states
/// are ordered by left-bank cannibals then left-bank missionaries. Unsafe
/// source states are skipped.
pub fn enumerate_edges(spec: &PuzzleSpec) -> Vec<(RiverState, RiverState, u32)> {
    let mut edges = Vec::new();
    for boat in [Bank::Left, Bank::Right] {
        for i in 0..=spec.cannibals {
            for j in 0..=spec.missionaries {
                let state = RiverState::new(
                    i,
                    j,
                    spec.cannibals - i,
                    spec.missionaries - j,
                    boat,
                );
                if !is_safe_state(&state) {
                    continue;
                }
                for next in successors(spec, &state) {
                    edges.push((state, next, CROSSING_WEIGHT));
                }
            }
        }
    }
    edges
}

/// Build the puzzle graph
#[tracing::instrument(skip(spec), fields(cannibals = spec.cannibals, missionaries = spec.missionaries, boat_capacity = spec.boat_capacity))]
pub fn build_graph(spec: &PuzzleSpec) -> Result<EdgeStore<RiverState>> {
    spec.validate()?;
    let store = EdgeStore::from_edges(enumerate_edges(spec))?;
    tracing::debug!(
        vertices = store.vertex_count(),
        edges = store.edge_count(),
        "puzzle_graph_built"
    );
    Ok(store)
}
