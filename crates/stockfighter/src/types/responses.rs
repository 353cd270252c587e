/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Generic response envelope and typed list wrappers
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::models::{OrderResult, Stock};

/// Every response is a JSON object of the form
/// `{"ok": bool, "error": string, ...endpoint fields}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiEnvelope(pub Map<String, Value>);

impl ApiEnvelope {
    /// Failure only when `ok` is literally `false`; `true`, a missing
    /// field and non-boolean values all count as success.
    pub fn is_failure(&self) -> bool {
        matches!(self.0.get("ok"), Some(Value::Bool(false)))
    }

    /// Server-supplied `error` string, empty when absent or not a string
    pub fn error_message(&self) -> &str {
        self.0.get("error").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockList {
    pub symbols: Vec<Stock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResultList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub orders: Vec<OrderResult>,
}
