//! Missionaries and cannibals river crossing, expressed as a graph of
//! `RiverState` vertices for the search engine

pub mod render;
pub mod rules;
pub mod state;

pub use render::{describe_move, render_path, render_state, Crossing};
pub use rules::{build_graph, is_safe, is_safe_state, successors};
pub use state::{Bank, PuzzleSpec, RiverState};
