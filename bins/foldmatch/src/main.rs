//! foldmatch - compare accent-insensitive matching strategies
//!
//! Canonicalizes text, compares stored values with query terms, and runs the
//! comparison matrix across the minimal, accent map and collation strategies.

use clap::{Parser, Subcommand};
use foldmatch_search::{MatcherConfig, StrategyKind};
use foldmatch_telemetry::TelemetryConfig;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{canonicalize, compare, matrix, search, OutputFormat};

/// Accent-insensitive matching strategy comparison
#[derive(Parser)]
#[command(name = "foldmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to ./.foldmatch.toml or ./foldmatch.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical key of a value
    Canonicalize {
        /// Text to normalize
        text: String,

        /// Only this strategy (all strategies if not specified)
        #[arg(short, long)]
        strategy: Option<StrategyKind>,
    },

    /// Check whether a stored value matches a query
    Compare {
        /// Value as stored
        stored: String,

        /// Query as typed
        query: String,

        /// Only this strategy (all strategies if not specified)
        #[arg(short, long)]
        strategy: Option<StrategyKind>,
    },

    /// Find stored values matching a query
    Search {
        /// Query as typed
        query: String,

        /// Values to search (the built-in corpus if not specified)
        values: Vec<String>,

        /// Strategy to use (the configured one if not specified)
        #[arg(short, long)]
        strategy: Option<StrategyKind>,
    },

    /// Run the comparison matrix and check every expected result
    Matrix,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = foldmatch_telemetry::init_with_config(TelemetryConfig::for_cli(
        cli.verbose,
        cli.format == OutputFormat::Json,
    )) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    let result = MatcherConfig::load(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| match cli.command {
            Commands::Canonicalize { text, strategy } => {
                canonicalize::run(&config, &text, strategy, cli.format)
            }
            Commands::Compare { stored, query, strategy } => {
                compare::run(&config, &stored, &query, strategy, cli.format)
            }
            Commands::Search { query, values, strategy } => {
                search::run(&config, &query, &values, strategy, cli.format)
            }
            Commands::Matrix => matrix::run(&config, cli.format),
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
