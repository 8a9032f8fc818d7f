use ferry_core::config::StrategyChoice;
use ferry_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse strategy choice from string
pub fn parse_strategy_choice(s: &str) -> std::result::Result<StrategyChoice, String> {
    s.parse::<StrategyChoice>().map_err(|e| e.to_string())
}
