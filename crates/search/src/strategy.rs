//! Normalization strategies.
//!
//! Every strategy maps raw text to a [`CanonicalKey`]. Two values are
//! equivalent under a strategy when their keys are equal:
//!
//! | Strategy    | Trim | Lowercase | Accents folded           |
//! |-------------|------|-----------|--------------------------|
//! | `Minimal`   | yes  | yes       | no                       |
//! | `AccentMap` | yes  | yes       | [`DiacriticTable`] only  |
//! | `Collation` | no   | yes       | all, plus compat forms   |

use crate::collation;
use crate::diacritics::DiacriticTable;
use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Identifies a strategy; the static selection made at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Trim and lowercase only
    Minimal,
    /// Trim, lowercase, then fold through the diacritic table
    AccentMap,
    /// Primary-strength collation
    Collation,
}

impl StrategyKind {
    /// All strategies, in the order reports list them.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Minimal,
        StrategyKind::AccentMap,
        StrategyKind::Collation,
    ];

    /// Stable identifier used in config files and reports.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Minimal => "minimal",
            StrategyKind::AccentMap => "accent_map",
            StrategyKind::Collation => "collation",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "minimal" | "simple_lower" | "lower" => Ok(StrategyKind::Minimal),
            "accent_map" | "replace" => Ok(StrategyKind::AccentMap),
            "collation" | "icu" => Ok(StrategyKind::Collation),
            _ => Err(MatchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Normalized form of a value; the unit of equality under a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Borrow the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CanonicalKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A configured normalization strategy.
///
/// Strategies are immutable and cheap to clone; the accent map shares its
/// table through an `Arc`.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Trim surrounding whitespace, then full Unicode lowercase
    Minimal,
    /// [`Strategy::Minimal`] followed by a table lookup per code point
    AccentMap(Arc<DiacriticTable>),
    /// Primary-strength collation
    Collation,
}

impl Strategy {
    /// Accent map over the built-in diacritic table.
    pub fn accent_map() -> Self {
        Strategy::AccentMap(DiacriticTable::default_table())
    }

    /// Accent map over a custom table.
    pub fn accent_map_with(table: DiacriticTable) -> Self {
        Strategy::AccentMap(Arc::new(table))
    }

    /// Builds the strategy for `kind` with default settings.
    pub fn from_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Minimal => Strategy::Minimal,
            StrategyKind::AccentMap => Strategy::accent_map(),
            StrategyKind::Collation => Strategy::Collation,
        }
    }

    /// One strategy of each kind, with default settings.
    pub fn all() -> Vec<Strategy> {
        StrategyKind::ALL.into_iter().map(Strategy::from_kind).collect()
    }

    /// Which kind of strategy this is.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Minimal => StrategyKind::Minimal,
            Strategy::AccentMap(_) => StrategyKind::AccentMap,
            Strategy::Collation => StrategyKind::Collation,
        }
    }

    /// Maps `raw` to its canonical key. Total: every string has a key.
    ///
    /// # Example
    /// ```
    /// use foldmatch_search::Strategy;
    ///
    /// assert_eq!(Strategy::Minimal.canonicalize("  José "), "josé");
    /// assert_eq!(Strategy::accent_map().canonicalize("Maçã"), "maca");
    /// assert_eq!(Strategy::accent_map().canonicalize("ºC"), "ºc");
    /// ```
    pub fn canonicalize(&self, raw: &str) -> CanonicalKey {
        let key = match self {
            Strategy::Minimal => lower_trimmed(raw),
            Strategy::AccentMap(table) => lower_trimmed(raw)
                .chars()
                .map(|c| table.base_letter_for(c).unwrap_or(c))
                .collect(),
            Strategy::Collation => collation::primary_key(raw),
        };
        CanonicalKey(key)
    }

    /// Like [`Strategy::canonicalize`], for raw bytes that must be UTF-8.
    pub fn canonicalize_bytes(&self, raw: &[u8]) -> Result<CanonicalKey> {
        let text = std::str::from_utf8(raw)?;
        Ok(self.canonicalize(text))
    }

    /// Returns true if `a` and `b` fall in the same equivalence class.
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        match self {
            Strategy::Collation => collation::collation_equals(a, b),
            _ => self.canonicalize(a) == self.canonicalize(b),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::accent_map()
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        Strategy::from_kind(kind)
    }
}

fn lower_trimmed(raw: &str) -> String {
    raw.trim().to_lowercase()
}
