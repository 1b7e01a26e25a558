//! Compare command - match one stored value against one query

use super::{build_strategies, OutputFormat};
use anyhow::Result;
use foldmatch_cli::output::match_mark;
use foldmatch_search::{MatchEngine, MatchResult, MatcherConfig, QueryTerm, StoredValue, StrategyKind};
use owo_colors::OwoColorize;

/// Run compare command
pub fn run(
    config: &MatcherConfig,
    stored: &str,
    query: &str,
    strategy: Option<StrategyKind>,
    format: OutputFormat,
) -> Result<()> {
    let stored = StoredValue::new(stored);
    let query = QueryTerm::new(query);

    let results: Vec<MatchResult> = build_strategies(config, strategy)?
        .into_iter()
        .map(|s| MatchEngine::new(s).evaluate(&stored, &query))
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{} \"{}\"  {} \"{}\"", "stored".dimmed(), stored, "query".dimmed(), query);
    for result in &results {
        println!("  {:<12} {}", result.strategy.name().bold(), match_mark(result.matched));
    }

    Ok(())
}
