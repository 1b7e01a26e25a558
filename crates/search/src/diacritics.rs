//! Table-driven diacritic folding.
//!
//! A [`DiacriticTable`] maps lowercase accented code points to their
//! unaccented base letter. Strategies lowercase their input before looking
//! anything up, so only lowercase keys are stored. Decorative symbols such as
//! `º`, `ª`, `²`, `³`, `µ`, `•` and Greek letters are absent by construction.

use crate::error::{MatchError, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The canonical fold set: lowercase Latin vowels with grave, acute,
/// circumflex, tilde, diaeresis and ring, plus `ç`, `ñ` and `ý`.
#[rustfmt::skip]
pub const DEFAULT_DIACRITICS: &[(char, char)] = &[
    ('à', 'a'), ('á', 'a'), ('â', 'a'), ('ã', 'a'), ('ä', 'a'), ('å', 'a'),
    ('è', 'e'), ('é', 'e'), ('ê', 'e'), ('ë', 'e'),
    ('ì', 'i'), ('í', 'i'), ('î', 'i'), ('ï', 'i'),
    ('ò', 'o'), ('ó', 'o'), ('ô', 'o'), ('õ', 'o'), ('ö', 'o'),
    ('ù', 'u'), ('ú', 'u'), ('û', 'u'), ('ü', 'u'),
    ('ç', 'c'),
    ('ñ', 'n'),
    ('ý', 'y'),
];

static DEFAULT_TABLE: Lazy<Arc<DiacriticTable>> = Lazy::new(|| {
    Arc::new(
        DiacriticTable::from_entries(DEFAULT_DIACRITICS.iter().copied())
            .expect("built-in diacritic table is well-formed"),
    )
});

/// Immutable mapping from accented lowercase code points to base letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiacriticTable {
    entries: BTreeMap<char, char>,
}

impl DiacriticTable {
    /// Returns the shared built-in table.
    pub fn default_table() -> Arc<DiacriticTable> {
        Arc::clone(&DEFAULT_TABLE)
    }

    /// Builds a table, rejecting duplicate keys and malformed entries.
    ///
    /// An entry is malformed when the key maps to itself, the key is plain
    /// ASCII, the key is not its own lowercase form, or the value is not a
    /// lowercase letter. A value that is also a key is rejected too, so
    /// folding never needs more than one lookup per code point.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut map = BTreeMap::new();

        for (accented, base) in entries {
            validate_entry(accented, base)?;
            if let Some(existing) = map.insert(accented, base) {
                return Err(MatchError::Config(format!(
                    "duplicate diacritic entry '{}' (U+{:04X}) maps to both '{}' and '{}'",
                    accented, accented as u32, existing, base
                )));
            }
        }

        if let Some((accented, base)) = map.iter().find(|(_, base)| map.contains_key(*base)) {
            return Err(MatchError::Config(format!(
                "diacritic entry '{}' maps to '{}', which is itself folded",
                accented, base
            )));
        }

        tracing::debug!(entries = map.len(), "Diacritic table built");

        Ok(Self { entries: map })
    }

    /// Returns a new table with `extra` entries added on top of this one.
    ///
    /// Keys already present are reported as duplicates.
    pub fn extended_with<I>(&self, extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        Self::from_entries(self.iter().chain(extra))
    }

    /// Returns the unaccented equivalent of `c`, if the table folds it.
    #[inline]
    pub fn base_letter_for(&self, c: char) -> Option<char> {
        self.entries.get(&c).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table folds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in code point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

fn validate_entry(accented: char, base: char) -> Result<()> {
    if accented == base {
        return Err(MatchError::Config(format!(
            "diacritic entry '{}' maps to itself",
            accented
        )));
    }
    if accented.is_ascii() {
        return Err(MatchError::Config(format!(
            "diacritic entry '{}' is plain ASCII",
            accented
        )));
    }
    if !is_own_lowercase(accented) {
        return Err(MatchError::Config(format!(
            "diacritic entry '{}' is not lowercase; input is lowercased before lookup",
            accented
        )));
    }
    if !base.is_alphabetic() {
        return Err(MatchError::Config(format!(
            "base letter {:?} for '{}' is not a letter",
            base, accented
        )));
    }
    if !is_own_lowercase(base) {
        return Err(MatchError::Config(format!(
            "base letter '{}' for '{}' is not lowercase",
            base, accented
        )));
    }
    Ok(())
}

fn is_own_lowercase(c: char) -> bool {
    c.to_lowercase().eq(std::iter::once(c))
}
