//! Explicit ownership of one graph and the state of its last search
//!
//! A session replaces the implicit "mutate the graph, run, inspect, clear"
//! sequence with a value that owns both halves and an explicit reset.

use crate::error::Result;
use crate::graph::algos::SearchStrategy;
use crate::graph::report::RouteReporter;
use crate::graph::state::TraversalState;
use crate::graph::store::EdgeStore;
use crate::graph::types::{PathResult, SearchOptions, Vertex, Weight};

/// What `SearchSession::clear` discards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    /// Visited set, predecessors and distances of the last run
    TraversalOnly,
    /// The traversal state and every edge and vertex
    Everything,
}

#[derive(Debug, Clone)]
pub struct SearchSession<V> {
    graph: EdgeStore<V>,
    state: TraversalState<V>,
    options: SearchOptions,
}

impl<V: Vertex> SearchSession<V> {
    pub fn new(graph: EdgeStore<V>) -> Self {
        Self::with_options(graph, SearchOptions::default())
    }

    pub fn with_options(graph: EdgeStore<V>, options: SearchOptions) -> Self {
        Self {
            graph,
            state: TraversalState::new(),
            options,
        }
    }

    pub fn graph(&self) -> &EdgeStore<V> {
        &self.graph
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Add an edge; drops the state of the last run, which no longer
    /// describes the graph
    pub fn add_edge(&mut self, from: V, to: V, weight: impl Into<Weight>) -> Result<()> {
        self.graph.add_edge(from, to, weight)?;
        self.state.reset();
        Ok(())
    }

    /// Run `strategy` from a clean traversal state and keep that state for
    /// reporting
    pub fn run<S: SearchStrategy>(
        &mut self,
        strategy: &S,
        source: &V,
        target: &V,
    ) -> Result<PathResult<V>> {
        self.state.reset();
        let result = strategy.find(&self.graph, &mut self.state, source, target, &self.options);
        if result.is_err() {
            self.state.reset();
        }
        result
    }

    /// Visited-vertex view of the last completed run
    pub fn reporter(&self) -> RouteReporter<'_, V> {
        RouteReporter::new(&self.state)
    }

    pub fn state(&self) -> &TraversalState<V> {
        &self.state
    }

    pub fn clear(&mut self, scope: ClearScope) {
        self.state.reset();
        if scope == ClearScope::Everything {
            self.graph.clear();
        }
    }

    /// Give the graph back, discarding traversal state
    pub fn into_graph(self) -> EdgeStore<V> {
        self.graph
    }
}
