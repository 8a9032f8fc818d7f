//! CLI commands for ferry

pub mod config;
pub mod dispatch;
pub mod format;
pub mod path;
pub mod solve;
