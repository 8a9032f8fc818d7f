use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Truncation reason recorded when a search hits `max_expansions`
pub const TRUNCATION_MAX_EXPANSIONS: &str = "max_expansions";

/// Cost of traversing a single edge, or a cumulative path cost.
///
/// Edge weights must be finite and non-negative; `EdgeStore::add_edge`
/// rejects anything else. Path sums may still overflow to infinity. Dijkstra's result is only optimal under that precondition.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    /// Unit edge cost
    pub const DEFAULT: Weight = Weight(1.0);
    /// Tentative distance of an undiscovered vertex
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Weight(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// True for finite non-negative values
    pub fn is_valid(&self) -> bool {
        self.0 >= 0.0 && self.0.is_finite()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total ordering used by the priority frontier
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<u32> for Weight {
    fn from(cost: u32) -> Self {
        Weight(f64::from(cost))
    }
}

impl From<i32> for Weight {
    fn from(cost: i32) -> Self {
        Weight(f64::from(cost))
    }
}

impl From<f64> for Weight {
    fn from(cost: f64) -> Self {
        Weight(cost)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.is_finite() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Identity of a graph vertex.
///
/// Any cloneable value with total equality and a stable hash qualifies;
/// `Display` is used for diagnostics and error messages.
pub trait Vertex: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> Vertex for T {}

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: Weight,
}

/// Knobs shared by every search strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop after expanding this many vertices (None = unbounded). A vertex
    /// is expanded when a strategy starts scanning its outgoing edges.
    pub max_expansions: Option<usize>,
    /// Fail with `UnknownVertex` instead of returning NotFound for endpoints
    /// absent from the store
    pub strict_endpoints: bool,
}

/// Outcome of a single search run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<V> {
    pub source: V,
    pub target: V,
    pub found: bool,
    /// Vertices from source to target inclusive; empty when not found
    pub path: Vec<V>,
    /// Number of edges on the path
    pub path_length: usize,
    /// Sum of edge weights on the path
    pub total_weight: Weight,
    /// Vertices the strategy marked visited (settled, for Dijkstra)
    pub visited: usize,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_reason: Option<String>,
}

impl<V> PathResult<V> {
    pub fn found(source: V, target: V, path: Vec<V>, total_weight: Weight, visited: usize) -> Self {
        let path_length = path.len().saturating_sub(1);
        PathResult {
            source,
            target,
            found: true,
            path,
            path_length,
            total_weight,
            visited,
            truncated: false,
            truncation_reason: None,
        }
    }

    pub fn not_found(source: V, target: V, visited: usize) -> Self {
        PathResult {
            source,
            target,
            found: false,
            path: Vec::new(),
            path_length: 0,
            total_weight: Weight::ZERO,
            visited,
            truncated: false,
            truncation_reason: None,
        }
    }

    /// NotFound because the expansion budget ran out
    pub fn truncated(source: V, target: V, visited: usize, reason: &str) -> Self {
        PathResult {
            truncated: true,
            truncation_reason: Some(reason.to_string()),
            ..Self::not_found(source, target, visited)
        }
    }
}
