//! Matcher configuration loading.
//!
//! ```toml
//! strategy = "accent_map"
//!
//! [diacritics]
//! replace_defaults = false
//! extra = { "ÿ" = "y", "ø" = "o" }
//! ```

use crate::diacritics::DiacriticTable;
use crate::error::{MatchError, Result};
use crate::strategy::{Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured strategy.
pub const STRATEGY_ENV: &str = "FOLDMATCH_STRATEGY";

/// Files searched, in order, when no explicit path is given.
pub const CONFIG_CANDIDATES: &[&str] = &[
    ".foldmatch.toml",
    "foldmatch.toml",
    ".config/foldmatch.toml",
];

/// Matcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Strategy the engine is built with
    pub strategy: StrategyKind,
    /// Diacritic table adjustments for the accent map
    pub diacritics: DiacriticsConfig,
    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Diacritic table section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiacriticsConfig {
    /// Start from an empty table instead of the built-in one
    pub replace_defaults: bool,
    /// Additional accented letter to base letter entries
    pub extra: BTreeMap<String, String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::AccentMap,
            diacritics: DiacriticsConfig::default(),
            source: None,
        }
    }
}

impl MatcherConfig {
    /// Load configuration from a file path, or from the first standard
    /// location that exists, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let mut config = match config_path {
            Some(p) => {
                let content = std::fs::read_to_string(&p)?;
                let mut config = Self::from_toml_str(&content)?;
                config.source = Some(p);
                config
            }
            None => Self::default(),
        };

        config.apply_env_override()?;

        tracing::debug!(
            strategy = %config.strategy,
            source = ?config.source,
            extra_diacritics = config.diacritics.extra.len(),
            "Matcher configuration loaded"
        );

        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies [`STRATEGY_ENV`] when set.
    pub fn apply_env_override(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var(STRATEGY_ENV) {
            self.strategy = value.parse()?;
        }
        Ok(())
    }

    /// Builds the diacritic table described by this configuration.
    pub fn build_table(&self) -> Result<DiacriticTable> {
        let extra = self
            .diacritics
            .extra
            .iter()
            .map(|(accented, base)| -> Result<(char, char)> {
                Ok((single_char(accented)?, single_char(base)?))
            })
            .collect::<Result<Vec<_>>>()?;

        if self.diacritics.replace_defaults {
            DiacriticTable::from_entries(extra)
        } else {
            DiacriticTable::default_table().extended_with(extra)
        }
    }

    /// Builds the configured strategy.
    ///
    /// The built-in table is shared when no adjustments are configured.
    pub fn build_strategy(&self) -> Result<Strategy> {
        match self.strategy {
            StrategyKind::AccentMap
                if self.diacritics.replace_defaults || !self.diacritics.extra.is_empty() =>
            {
                Ok(Strategy::accent_map_with(self.build_table()?))
            }
            kind => Ok(Strategy::from_kind(kind)),
        }
    }
}

fn find_config_file() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(MatchError::Config(format!(
            "diacritic entry \"{}\" must be exactly one code point",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = MatcherConfig::default();
        assert_eq!(config.strategy, StrategyKind::AccentMap);
        assert!(config.source.is_none());
        assert!(matches!(config.build_strategy().unwrap(), Strategy::AccentMap(_)));
    }

    #[test]
    fn test_parse_full() {
        let config = MatcherConfig::from_toml_str(
            r#"
            strategy = "collation"

            [diacritics]
            extra = { "ÿ" = "y" }
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, StrategyKind::Collation);
        assert_eq!(config.diacritics.extra.get("ÿ").map(String::as_str), Some("y"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = MatcherConfig::from_toml_str("strategy = \"minimal\"\nfold = true").unwrap_err();
        assert!(matches!(err, MatchError::Toml(_)));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(MatcherConfig::from_toml_str("strategy = \"soundex\"").is_err());
    }

    #[test]
    fn test_extra_entries_extend_defaults() {
        let mut config = MatcherConfig::default();
        config.diacritics.extra.insert("ÿ".into(), "y".into());

        let strategy = config.build_strategy().unwrap();
        assert_eq!(strategy.canonicalize("Ÿ José"), "y jose");
    }

    #[test]
    fn test_replace_defaults() {
        let mut config = MatcherConfig::default();
        config.diacritics.replace_defaults = true;
        config.diacritics.extra.insert("ç".into(), "c".into());

        let table = config.build_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(config.build_strategy().unwrap().canonicalize("Maçã"), "macã");
    }

    #[test]
    fn test_duplicate_extra_is_config_error() {
        let mut config = MatcherConfig::default();
        config.diacritics.extra.insert("é".into(), "e".into());
        assert!(matches!(config.build_table(), Err(MatchError::Config(_))));
    }

    #[test]
    fn test_whitespace_base_rejected() {
        let mut config = MatcherConfig::from_toml_str("[diacritics]\nextra = { \"ÿ\" = \" \" }").unwrap();
        assert!(matches!(config.build_strategy(), Err(MatchError::Config(_))));

        config.diacritics.extra.insert("ÿ".into(), "y".into());
        let strategy = config.build_strategy().unwrap();
        let once = strategy.canonicalize("xÿ");
        assert_eq!(strategy.canonicalize(once.as_str()), once);
    }

    #[test]
    fn test_multi_char_entry_rejected() {
        let mut config = MatcherConfig::default();
        config.diacritics.extra.insert("ae".into(), "a".into());
        let err = config.build_table().unwrap_err();
        assert!(err.to_string().contains("exactly one code point"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"minimal\"").unwrap();

        let config = MatcherConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.source.as_deref(), Some(file.path()));
        if std::env::var(STRATEGY_ENV).is_err() {
            assert_eq!(config.strategy, StrategyKind::Minimal);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = MatcherConfig::load(Some(Path::new("/nonexistent/foldmatch.toml"))).unwrap_err();
        assert!(matches!(err, MatchError::Io(_)));
    }
}
