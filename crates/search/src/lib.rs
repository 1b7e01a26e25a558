//! Accent-insensitive text matching.
//!
//! This crate provides:
//! - A table-driven diacritic fold ([`DiacriticTable`])
//! - Three normalization strategies: minimal, accent map, and collation
//! - A match engine comparing stored values with query terms
//! - A comparison harness recording where the strategies disagree
//!
//! # Example
//!
//! ```
//! use foldmatch_search::{MatchEngine, Strategy};
//!
//! let engine = MatchEngine::new(Strategy::accent_map());
//! assert!(engine.matches(&"Maçã de Arroz".into(), &"maca de arroz".into()));
//! assert!(!engine.matches(&"ºC".into(), &"oc".into()));
//! ```

mod collation;
pub mod config;
mod diacritics;
mod engine;
mod error;
pub mod harness;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use collation::{collation_cmp, collation_equals, primary_key};
pub use config::MatcherConfig;
pub use diacritics::{DiacriticTable, DEFAULT_DIACRITICS};
pub use engine::{matches, MatchEngine, MatchResult, QueryTerm, StoredValue};
pub use error::{MatchError, MatchErrorCode, Result};
pub use harness::{
    default_corpus, CaseOutcome, ComparisonCase, ComparisonHarness, Expected, HarnessReport,
};
pub use strategy::{CanonicalKey, Strategy, StrategyKind};
