//! Graph search strategies
//!
//! Contains the interchangeable path-finding strategies:
//! - `bfs`: Breadth-first search (fewest edges)
//! - `dfs`: Depth-first search (some path, no optimality guarantee)
//! - `dijkstra`: Weighted shortest path (non-negative weights only)
//! - `shared`: Endpoint checks and path reconstruction used by all three

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use dijkstra::DijkstraSearch;
pub use shared::{build_result, check_endpoints, path_weight, reconstruct_path};

use crate::error::{FerryError, Result};
use crate::graph::state::TraversalState;
use crate::graph::store::EdgeStore;
use crate::graph::types::{PathResult, SearchOptions, Vertex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common contract of every search strategy.
///
/// `state` must be fresh or reset; the strategy records its visited set,
/// predecessor links and distances into it and leaves them there for
/// reporting.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn find<V: Vertex>(
        &self,
        graph: &EdgeStore<V>,
        state: &mut TraversalState<V>,
        source: &V,
        target: &V,
        opts: &SearchOptions,
    ) -> Result<PathResult<V>>;
}

/// Strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Strategy {
    /// Every strategy, in comparison order
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::Dijkstra];
}

impl SearchStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => BreadthFirstSearch.name(),
            Strategy::Dfs => DepthFirstSearch.name(),
            Strategy::Dijkstra => DijkstraSearch.name(),
        }
    }

    fn find<V: Vertex>(
        &self,
        graph: &EdgeStore<V>,
        state: &mut TraversalState<V>,
        source: &V,
        target: &V,
        opts: &SearchOptions,
    ) -> Result<PathResult<V>> {
        match self {
            Strategy::Bfs => BreadthFirstSearch.find(graph, state, source, target, opts),
            Strategy::Dfs => DepthFirstSearch.find(graph, state, source, target, opts),
            Strategy::Dijkstra => DijkstraSearch.find(graph, state, source, target, opts),
        }
    }
}

impl FromStr for Strategy {
    type Err = FerryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "dijkstra" => Ok(Strategy::Dijkstra),
            other => Err(FerryError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
