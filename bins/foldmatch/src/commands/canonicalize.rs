//! Canonicalize command - show the comparison key per strategy

use super::{build_strategies, OutputFormat};
use anyhow::Result;
use foldmatch_search::{MatcherConfig, StrategyKind};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonKey {
    strategy: StrategyKind,
    key: String,
}

/// Run canonicalize command
pub fn run(
    config: &MatcherConfig,
    text: &str,
    strategy: Option<StrategyKind>,
    format: OutputFormat,
) -> Result<()> {
    let keys: Vec<JsonKey> = build_strategies(config, strategy)?
        .iter()
        .map(|s| JsonKey {
            strategy: s.kind(),
            key: s.canonicalize(text).into_string(),
        })
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&keys)?);
        return Ok(());
    }

    for entry in &keys {
        println!("{:<12} {}", entry.strategy.name().bold(), format!("\"{}\"", entry.key).cyan());
    }

    Ok(())
}
