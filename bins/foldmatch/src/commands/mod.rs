//! CLI command implementations

use anyhow::Result;
use clap::ValueEnum;
use foldmatch_search::{MatcherConfig, Strategy, StrategyKind};

pub mod canonicalize;
pub mod compare;
pub mod matrix;
pub mod search;

/// Output format shared by all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON on stdout
    Json,
}

/// Builds the strategies a command runs with.
///
/// `selected` narrows the run to one kind; otherwise every kind is built.
/// The accent map picks up any diacritic adjustments from the config.
pub fn build_strategies(config: &MatcherConfig, selected: Option<StrategyKind>) -> Result<Vec<Strategy>> {
    let kinds = match selected {
        Some(kind) => vec![kind],
        None => StrategyKind::ALL.to_vec(),
    };

    kinds
        .into_iter()
        .map(|kind| {
            let config = MatcherConfig { strategy: kind, ..config.clone() };
            Ok(config.build_strategy()?)
        })
        .collect()
}
