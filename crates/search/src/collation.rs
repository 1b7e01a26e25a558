//! Primary-strength collation.
//!
//! Primary strength compares base letters only: case, accents and
//! compatibility variants (superscripts, ordinal indicators, the micro sign)
//! are all ignored. This mirrors an ICU `und-u-ks-level1` collation for Latin
//! text without linking ICU. Whitespace and punctuation stay significant.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letters with no Unicode decomposition that primary strength still treats
/// as their base letters.
fn primary_expansion(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ø' => Some("o"),
        'đ' => Some("d"),
        'ł' => Some("l"),
        'ħ' => Some("h"),
        _ => None,
    }
}

/// Builds the primary-strength comparison key for `raw`.
///
/// Two strings compare equal under the collation exactly when their keys are
/// equal.
///
/// # Example
/// ```
/// use foldmatch_search::primary_key;
///
/// assert_eq!(primary_key("Maçã"), "maca");
/// assert_eq!(primary_key("ºC"), "oc");
/// ```
pub fn primary_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());

    // Lowercasing can reintroduce marks ('İ' -> "i\u{307}"), so decompose twice.
    let chars = raw
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .nfkd()
        .filter(|c| !is_combining_mark(*c));

    for c in chars {
        match primary_expansion(c) {
            Some(expanded) => key.push_str(expanded),
            None => key.push(c),
        }
    }

    key
}

/// Returns true if `a` and `b` are equal at primary strength.
pub fn collation_equals(a: &str, b: &str) -> bool {
    a == b || primary_key(a) == primary_key(b)
}

/// Orders `a` and `b` at primary strength.
///
/// Strings that are equal at primary strength compare as `Equal`; no
/// tie-break on case or accents is applied.
pub fn collation_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a).cmp(&primary_key(b))
}
