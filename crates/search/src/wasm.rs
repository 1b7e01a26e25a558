//! WASM bindings for matching utilities.

use crate::{MatchEngine, QueryTerm, StoredValue, Strategy, StrategyKind};
use wasm_bindgen::prelude::*;

fn strategy_for(name: &str) -> Result<Strategy, JsValue> {
    name.parse::<StrategyKind>()
        .map(Strategy::from_kind)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Canonical comparison key for `text` under the named strategy.
#[wasm_bindgen]
pub fn canonicalize(strategy: &str, text: &str) -> Result<String, JsValue> {
    Ok(strategy_for(strategy)?.canonicalize(text).into_string())
}

/// Check whether `stored` and `query` match under the named strategy.
#[wasm_bindgen]
pub fn matches(strategy: &str, stored: &str, query: &str) -> Result<bool, JsValue> {
    Ok(crate::matches(&strategy_for(strategy)?, stored, query))
}

/// Search stored values and return the matches as JSON.
///
/// # Arguments
/// * `strategy` - Strategy name (`minimal`, `accent_map`, `collation`)
/// * `query` - Search query
/// * `values_json` - JSON array of stored strings
///
/// # Returns
/// JSON array of the matching strings, in input order
#[wasm_bindgen]
pub fn search_values(strategy: &str, query: &str, values_json: &str) -> Result<String, JsValue> {
    let engine = MatchEngine::new(strategy_for(strategy)?);

    let values: Vec<StoredValue> =
        serde_json::from_str(values_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let hits = engine.search(&values, &QueryTerm::new(query));

    serde_json::to_string(&hits).map_err(|e| JsValue::from_str(&e.to_string()))
}
