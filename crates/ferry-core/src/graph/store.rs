//! Directed, weighted adjacency storage
//!
//! `EdgeStore` is the only component that mutates graph topology. Searches
//! borrow it immutably, so a store cannot change while a traversal is running.

use crate::error::{FerryError, Result};
use crate::graph::types::{Edge, Vertex, Weight};
use std::collections::HashMap;

/// Adjacency index: vertex -> outgoing edges in insertion order.
///
/// Re-adding an existing `(from, to)` pair replaces its weight in place
/// (last write wins); the edge keeps its original position in the adjacency
/// list, so traversal order is unaffected.
#[derive(Debug, Clone)]
pub struct EdgeStore<V> {
    adjacency: HashMap<V, Vec<Edge<V>>>,
    /// Vertices in first-reference order
    order: Vec<V>,
    edge_count: usize,
}

impl<V> Default for EdgeStore<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<V: Vertex> EdgeStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(from, to, weight)` triples, in order
    pub fn from_edges<W, I>(edges: I) -> Result<Self>
    where
        W: Into<Weight>,
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut store = Self::new();
        for (from, to, weight) in edges {
            store.add_edge(from, to, weight)?;
        }
        Ok(store)
    }

    /// Insert a directed edge.
    ///
    /// Fails with `InvalidWeight` for negative, infinite or NaN weights, leaving the
    /// store untouched.
    pub fn add_edge(&mut self, from: V, to: V, weight: impl Into<Weight>) -> Result<()> {
        let weight = weight.into();
        if !weight.is_valid() {
            return Err(FerryError::invalid_weight(&from, &to, weight.value()));
        }

        self.touch(&from);
        self.touch(&to);

        let edges = self.adjacency.entry(from.clone()).or_default();
        if let Some(existing) = edges.iter_mut().find(|e| e.to == to) {
            tracing::trace!(from = %from, to = %to, old = %existing.weight, new = %weight, "edge_replaced");
            existing.weight = weight;
            return Ok(());
        }

        edges.push(Edge { from, to, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `vertex` in insertion order; empty for unknown vertices
    pub fn neighbors_of(&self, vertex: &V) -> Neighbors<'_, V> {
        let edges = self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[]);
        Neighbors { inner: edges.iter() }
    }

    /// Weight of the edge `from -> to`, if present
    pub fn weight_of(&self, from: &V, to: &V) -> Option<Weight> {
        self.neighbors_of(from)
            .find(|edge| &edge.to == to)
            .map(|edge| edge.weight)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// All vertices in first-reference order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.order.iter()
    }

    /// All edges, grouped by source vertex in first-reference order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> {
        self.order.iter().flat_map(move |v| self.neighbors_of(v))
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Discard all edges and vertices
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.order.clear();
        self.edge_count = 0;
    }

    fn touch(&mut self, vertex: &V) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.clone(), Vec::new());
            self.order.push(vertex.clone());
        }
    }
}

/// Lazy, restartable view over a vertex's outgoing edges
#[derive(Debug, Clone)]
pub struct Neighbors<'a, V> {
    inner: std::slice::Iter<'a, Edge<V>>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = &'a Edge<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}
