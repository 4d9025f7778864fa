//! Gamma `public-search` response types.
//!
//! `outcomes` and `outcomePrices` arrive either as JSON arrays or as
//! JSON-encoded strings holding an array. Both shapes are accepted.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub events: Vec<GammaEvent>,
}

/// A group of markets about one fixture.
#[derive(Debug, Default, Deserialize)]
pub struct GammaEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<GammaMarket>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaMarket {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub outcomes: Option<Value>,
    #[serde(default)]
    pub outcome_prices: Option<Value>,
}

impl GammaMarket {
    /// Outcome labels, in listing order.
    pub fn outcome_names(&self) -> Vec<String> {
        string_list(self.outcomes.as_ref(), "outcomes", &self.question)
    }

    /// Outcome prices; entries that do not parse as decimals are `None`.
    pub fn outcome_prices(&self) -> Vec<Option<Decimal>> {
        string_list(self.outcome_prices.as_ref(), "outcomePrices", &self.question)
            .iter()
            .map(|raw| raw.trim().parse::<Decimal>().ok())
            .collect()
    }
}

fn string_list(value: Option<&Value>, field: &str, question: &str) -> Vec<String> {
    let items = match value {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(encoded)) => match serde_json::from_str::<Vec<Value>>(encoded) {
            Ok(items) => items,
            Err(e) => {
                debug!(error = %e, raw = %encoded, field, question, "Failed to parse encoded list");
                return Vec::new();
            }
        },
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .collect()
}
