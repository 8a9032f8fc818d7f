//! Weighted directed graph engine
//!
//! Provides path finding between two vertices of an in-memory graph:
//! - `EdgeStore` for adjacency, the only place topology changes
//! - BFS, DFS and Dijkstra strategies behind one `SearchStrategy` contract
//! - `TraversalState` and `RouteReporter` for per-run visit instrumentation
//! - `SearchSession` tying a store to the state of its last search

pub mod algos;
pub mod report;
pub mod session;
pub mod state;
pub mod store;
pub mod types;

pub use algos::{BreadthFirstSearch, DepthFirstSearch, DijkstraSearch, SearchStrategy, Strategy};
pub use report::RouteReporter;
pub use session::{ClearScope, SearchSession};
pub use state::TraversalState;
pub use store::{EdgeStore, Neighbors};
pub use types::{Edge, PathResult, SearchOptions, Vertex, Weight};
