//! Read-only reporting over the last run's visited set

use crate::graph::state::TraversalState;
use crate::graph::types::Vertex;
use std::collections::HashSet;

/// Exposes which vertices a strategy examined, for comparing strategies.
///
/// Reflects the state it borrows: the last completed run, or nothing after a
/// reset.
#[derive(Debug, Clone, Copy)]
pub struct RouteReporter<'a, V> {
    state: &'a TraversalState<V>,
}

impl<'a, V: Vertex> RouteReporter<'a, V> {
    pub fn new(state: &'a TraversalState<V>) -> Self {
        Self { state }
    }

    pub fn visited_vertices(&self) -> HashSet<&'a V> {
        self.state.visited().iter().collect()
    }

    /// Visited vertices in marking order
    pub fn visit_order(&self) -> &'a [V] {
        self.state.visit_order()
    }

    pub fn count(&self) -> usize {
        self.state.visited_count()
    }
}
