//! Configuration type definitions

use crate::error::FerryError;
use crate::graph::{SearchOptions, Strategy};
use crate::puzzle::PuzzleSpec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ferry configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FerryConfig {
    /// Puzzle parameters used by `solve`
    #[serde(default)]
    pub puzzle: PuzzleSpec,

    /// Search defaults shared by `solve` and `path`
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for path searches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strategy to run: one of bfs, dfs, dijkstra, or all
    #[serde(default)]
    pub strategy: StrategyChoice,

    /// Stop after expanding this many vertices (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,

    /// Fail instead of reporting "not found" when an endpoint is absent
    #[serde(default)]
    pub strict_endpoints: bool,
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            max_expansions: self.max_expansions,
            strict_endpoints: self.strict_endpoints,
        }
    }
}

/// A single strategy or all of them in comparison order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyChoice {
    #[default]
    All,
    Bfs,
    Dfs,
    Dijkstra,
}

impl StrategyChoice {
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyChoice::All => Strategy::ALL.to_vec(),
            StrategyChoice::Bfs => vec![Strategy::Bfs],
            StrategyChoice::Dfs => vec![Strategy::Dfs],
            StrategyChoice::Dijkstra => vec![Strategy::Dijkstra],
        }
    }
}

impl From<Strategy> for StrategyChoice {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Bfs => StrategyChoice::Bfs,
            Strategy::Dfs => StrategyChoice::Dfs,
            Strategy::Dijkstra => StrategyChoice::Dijkstra,
        }
    }
}

impl FromStr for StrategyChoice {
    type Err = FerryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StrategyChoice::All);
        }
        s.parse::<Strategy>().map(StrategyChoice::from)
    }
}

impl fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyChoice::All => f.write_str("all"),
            StrategyChoice::Bfs => f.write_str("bfs"),
            StrategyChoice::Dfs => f.write_str("dfs"),
            StrategyChoice::Dijkstra => f.write_str("dijkstra"),
        }
    }
}
