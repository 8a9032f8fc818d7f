//! Per-run traversal bookkeeping

use crate::graph::types::{SearchOptions, Vertex, Weight};
use std::collections::{HashMap, HashSet};

/// Visited set, predecessor links and distance table of one search run.
///
/// A fresh (or freshly reset) state is required per run; strategies never
/// reset it themselves so the caller can inspect it afterwards.
#[derive(Debug, Clone)]
pub struct TraversalState<V> {
    visited: HashSet<V>,
    visit_order: Vec<V>,
    predecessors: HashMap<V, V>,
    distances: HashMap<V, Weight>,
    expansions: usize,
}

impl<V> Default for TraversalState<V> {
    fn default() -> Self {
        Self {
            visited: HashSet::new(),
            visit_order: Vec::new(),
            predecessors: HashMap::new(),
            distances: HashMap::new(),
            expansions: 0,
        }
    }
}

impl<V: Vertex> TraversalState<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded by the last run
    pub fn reset(&mut self) {
        self.visited.clear();
        self.visit_order.clear();
        self.predecessors.clear();
        self.distances.clear();
        self.expansions = 0;
    }

    /// Mark `vertex` visited; returns false if it already was
    pub fn mark_visited(&mut self, vertex: &V) -> bool {
        if self.visited.insert(vertex.clone()) {
            self.visit_order.push(vertex.clone());
            true
        } else {
            false
        }
    }

    pub fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    pub fn visited_count(&self) -> usize {
        self.visit_order.len()
    }

    pub fn visited(&self) -> &HashSet<V> {
        &self.visited
    }

    /// Vertices in the order they were marked
    pub fn visit_order(&self) -> &[V] {
        &self.visit_order
    }

    /// Record how `vertex` was first reached. Later calls for the same vertex
    /// are ignored (BFS/DFS discovery links are immutable).
    pub fn record_predecessor(&mut self, vertex: V, predecessor: V) {
        self.predecessors.entry(vertex).or_insert(predecessor);
    }

    /// Overwrite the best known distance and predecessor of `vertex`
    /// (Dijkstra relaxation; only valid while `vertex` is unsettled)
    pub fn relax(&mut self, vertex: V, predecessor: V, distance: Weight) {
        debug_assert!(!self.visited.contains(&vertex), "relaxing a settled vertex");
        self.distances.insert(vertex.clone(), distance);
        self.predecessors.insert(vertex, predecessor);
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Best known distance from the source; infinite if never reached
    pub fn distance(&self, vertex: &V) -> Weight {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }

    /// Best known distance, or None if `vertex` has not been reached
    pub fn tentative_distance(&self, vertex: &V) -> Option<Weight> {
        self.distances.get(vertex).copied()
    }

    pub fn set_distance(&mut self, vertex: V, distance: Weight) {
        self.distances.insert(vertex, distance);
    }

    /// Count one vertex expansion: the start of a scan over its outgoing
    /// edges (BFS dequeue, DFS frame push, Dijkstra settle)
    pub fn record_expansion(&mut self) {
        self.expansions += 1;
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// True once the expansion budget in `opts` is used up
    pub fn budget_exhausted(&self, opts: &SearchOptions) -> bool {
        opts.max_expansions
            .is_some_and(|max| self.expansions >= max)
    }
}
