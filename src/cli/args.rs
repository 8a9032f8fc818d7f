use super::parse::parse_strategy_choice;
use clap::Args;
use ferry_core::config::StrategyChoice;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Strategy: bfs, dfs, dijkstra, or all
    #[arg(long, short, value_parser = parse_strategy_choice)]
    pub strategy: Option<StrategyChoice>,

    /// Number of cannibals
    #[arg(long)]
    pub cannibals: Option<u32>,

    /// Number of missionaries
    #[arg(long)]
    pub missionaries: Option<u32>,

    /// People the boat carries per crossing
    #[arg(long)]
    pub capacity: Option<u32>,

    /// Stop a search after expanding this many states
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Fail if the start or goal state is missing from the graph
    #[arg(long)]
    pub strict: bool,

    /// Print every crossing of the path found
    #[arg(long)]
    pub steps: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// TOML file with `[[edges]]` entries (from, to, weight)
    pub file: PathBuf,

    /// Source vertex
    pub from: String,

    /// Target vertex
    pub to: String,

    /// Strategy: bfs, dfs, dijkstra, or all
    #[arg(long, short, value_parser = parse_strategy_choice)]
    pub strategy: Option<StrategyChoice>,

    /// Stop a search after expanding this many vertices
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Fail if FROM or TO is not in the edge list
    #[arg(long)]
    pub strict: bool,
}
