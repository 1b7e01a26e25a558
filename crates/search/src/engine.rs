//! Matching stored values against query terms.

use crate::config::MatcherConfig;
use crate::error::Result;
use crate::strategy::{Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value as it was originally entered and stored.
///
/// Normalization happens at read time; the stored text is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredValue {
    text: String,
}

impl StoredValue {
    /// Wraps stored text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Validates raw bytes as UTF-8 and wraps them.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        Ok(Self::new(std::str::from_utf8(raw)?))
    }

    /// The originally entered text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for StoredValue {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Raw text supplied by a caller at match time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryTerm {
    text: String,
}

impl QueryTerm {
    /// Wraps query text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Validates raw bytes as UTF-8 and wraps them.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        Ok(Self::new(std::str::from_utf8(raw)?))
    }

    /// The query text as supplied.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for QueryTerm {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for QueryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Outcome of one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the stored value matched the query
    pub matched: bool,
    /// Strategy that decided
    pub strategy: StrategyKind,
    /// Value compared against
    pub stored: StoredValue,
    /// Query as supplied
    pub query: QueryTerm,
}

/// Returns true if `stored` and `query` are equivalent under `strategy`.
///
/// # Example
/// ```
/// use foldmatch_search::{matches, Strategy};
///
/// assert!(!matches(&Strategy::Minimal, "José", "jose"));
/// assert!(matches(&Strategy::accent_map(), "José", "jose"));
/// assert!(matches(&Strategy::Collation, "José", "jose"));
/// ```
#[inline]
pub fn matches(strategy: &Strategy, stored: &str, query: &str) -> bool {
    strategy.equivalent(stored, query)
}

/// Compares values under one statically chosen strategy.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    strategy: Strategy,
}

impl MatchEngine {
    /// Creates an engine for `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Creates an engine from a loaded configuration.
    pub fn from_config(config: &MatcherConfig) -> Result<Self> {
        Ok(Self::new(config.build_strategy()?))
    }

    /// The strategy this engine applies.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Returns true if `stored` matches `query`.
    pub fn matches(&self, stored: &StoredValue, query: &QueryTerm) -> bool {
        matches(&self.strategy, stored.as_str(), query.as_str())
    }

    /// Compares `stored` and `query` and records the outcome.
    pub fn evaluate(&self, stored: &StoredValue, query: &QueryTerm) -> MatchResult {
        MatchResult {
            matched: self.matches(stored, query),
            strategy: self.strategy.kind(),
            stored: stored.clone(),
            query: query.clone(),
        }
    }

    /// Byte-level variant of [`MatchEngine::matches`]; both inputs must be UTF-8.
    pub fn matches_bytes(&self, stored: &[u8], query: &[u8]) -> Result<bool> {
        let stored = std::str::from_utf8(stored)?;
        let query = std::str::from_utf8(query)?;
        Ok(matches(&self.strategy, stored, query))
    }

    /// Returns every stored value that matches `query`, in stored order.
    pub fn search<'a>(&self, stored: &'a [StoredValue], query: &QueryTerm) -> Vec<&'a StoredValue> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            stored
                .par_iter()
                .filter(|value| self.matches(value, query))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            stored
                .iter()
                .filter(|value| self.matches(value, query))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    fn products() -> Vec<StoredValue> {
        ["José", "Maçã de Arroz", "ºC", "m3/d", "m²", "µS/cm"]
            .into_iter()
            .map(StoredValue::from)
            .collect()
    }

    #[test]
    fn test_minimal_scenarios() {
        let engine = MatchEngine::new(Strategy::Minimal);
        let jose = StoredValue::new("José");
        assert!(!engine.matches(&jose, &"jose".into()));
        assert!(engine.matches(&jose, &"josé".into()));
    }

    #[test]
    fn test_accent_map_scenarios() {
        let engine = MatchEngine::new(Strategy::accent_map());
        assert!(engine.matches(&"Maçã de Arroz".into(), &"maca de arroz".into()));
        assert!(engine.matches(&"m³/día".into(), &"m³/dia".into()));
        assert!(!engine.matches(&"ºC".into(), &"oc".into()));
    }

    #[test]
    fn test_evaluate_records_inputs() {
        let engine = MatchEngine::new(Strategy::Collation);
        let result = engine.evaluate(&"José".into(), &"JOSE".into());
        assert!(result.matched);
        assert_eq!(result.strategy, StrategyKind::Collation);
        assert_eq!(result.stored.as_str(), "José");
        assert_eq!(result.query.as_str(), "JOSE");
    }

    #[test]
    fn test_matches_bytes() {
        let engine = MatchEngine::new(Strategy::accent_map());
        assert!(engine.matches_bytes("José".as_bytes(), b"jose").unwrap());

        let err = engine.matches_bytes(b"jose", &[0xE9]).unwrap_err();
        assert!(matches!(err, MatchError::InvalidEncoding { valid_up_to: 0 }));
    }

    #[test]
    fn test_from_bytes_rejects_invalid() {
        assert!(StoredValue::from_bytes(&[0xFF]).is_err());
        assert_eq!(QueryTerm::from_bytes(b"m3/d").unwrap().as_str(), "m3/d");
    }

    #[test]
    fn test_search_preserves_order() {
        let stored = products();
        let engine = MatchEngine::new(Strategy::Collation);

        let hits = engine.search(&stored, &"oc".into());
        assert_eq!(hits, vec![&stored[2]]);

        let hits = engine.search(&stored, &"m2".into());
        assert_eq!(hits, vec![&stored[4]]);
    }

    #[test]
    fn test_search_no_hits() {
        let stored = products();
        let engine = MatchEngine::new(Strategy::Minimal);
        assert!(engine.search(&stored, &"maca de arroz".into()).is_empty());
        assert_eq!(engine.search(&stored, &"MAÇÃ DE ARROZ".into()).len(), 1);
    }

    #[test]
    fn test_stored_value_untouched() {
        let engine = MatchEngine::new(Strategy::accent_map());
        let stored = StoredValue::new(" Maçã ");
        assert!(engine.matches(&stored, &"maca".into()));
        assert_eq!(stored.as_str(), " Maçã ");
    }
}
