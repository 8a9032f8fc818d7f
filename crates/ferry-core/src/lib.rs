//! Ferry Core Library
//!
//! Weighted directed graph engine with interchangeable path-finding
//! strategies, plus the river-crossing puzzle that exercises it.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod puzzle;
