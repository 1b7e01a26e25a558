//! Search command - find stored values matching a query

use super::{build_strategies, OutputFormat};
use anyhow::{anyhow, Result};
use foldmatch_cli::output::{format_count, Status};
use foldmatch_search::{default_corpus, MatchEngine, MatcherConfig, QueryTerm, StoredValue, StrategyKind};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonSearchOutput<'a> {
    strategy: StrategyKind,
    query: &'a QueryTerm,
    matches: Vec<&'a StoredValue>,
}

/// Run search command
pub fn run(
    config: &MatcherConfig,
    query: &str,
    values: &[String],
    strategy: Option<StrategyKind>,
    format: OutputFormat,
) -> Result<()> {
    let kind = strategy.unwrap_or(config.strategy);
    let engine = build_strategies(config, Some(kind))?
        .into_iter()
        .next()
        .map(MatchEngine::new)
        .ok_or_else(|| anyhow!("No strategy built for {}", kind))?;

    let stored = if values.is_empty() {
        corpus_values()
    } else {
        values.iter().map(|v| StoredValue::new(v.as_str())).collect()
    };

    let query = QueryTerm::new(query);
    let hits = engine.search(&stored, &query);

    tracing::debug!(strategy = %kind, candidates = stored.len(), hits = hits.len(), "Search finished");

    if format == OutputFormat::Json {
        let output = JsonSearchOutput { strategy: kind, query: &query, matches: hits };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if hits.is_empty() {
        Status::warning(&format!("No values match \"{}\" under {}", query, kind));
        return Ok(());
    }

    Status::info(&format!("{} under {}", format_count(hits.len(), "match", "matches"), kind));
    for hit in hits {
        println!("  \"{}\"", hit);
    }

    Ok(())
}

/// Distinct stored values of the built-in corpus, in first-seen order.
fn corpus_values() -> Vec<StoredValue> {
    let mut values: Vec<StoredValue> = Vec::new();
    for case in default_corpus() {
        if !values.contains(&case.stored) {
            values.push(case.stored);
        }
    }
    values
}
