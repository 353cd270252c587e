/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: Single OrderResult accepts both `orderType` and `type` wire names
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Direction, OrderType};

/// A symbol listed on a venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub name: String,
    pub symbol: String,
}

/// Top-of-book snapshot for a stock.
///
/// The API leaves out `bid`, `ask`, `last`, `lastSize` and `lastTrade`
/// when the book has nothing to report for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub venue: String,
    #[serde(default)]
    pub bid: Option<u64>,
    #[serde(default)]
    pub ask: Option<u64>,
    #[serde(default)]
    pub bid_size: u64,
    #[serde(default)]
    pub ask_size: u64,
    #[serde(default)]
    pub bid_depth: u64,
    #[serde(default)]
    pub ask_depth: u64,
    #[serde(default)]
    pub last: Option<u64>,
    #[serde(default)]
    pub last_size: Option<u64>,
    #[serde(default)]
    pub last_trade: Option<DateTime<Utc>>,
    pub quote_time: DateTime<Utc>,
}

/// One resting order level in the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntry {
    pub is_buy: bool,
    pub price: u64,
    pub qty: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub symbol: String,
    pub venue: String,
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub asks: Vec<BookEntry>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub bids: Vec<BookEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub price: u64,
    pub qty: u64,
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
}

/// State of an order as reported by the venue.
///
/// Order placement answers with `orderType` while some status endpoints
/// answer with `type`; both land in `order_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub symbol: String,
    pub venue: String,
    pub direction: Direction,
    pub original_qty: u64,
    /// Quantity still outstanding
    pub qty: u64,
    pub price: u64,
    #[serde(rename = "orderType", alias = "type")]
    pub order_type: OrderType,
    pub id: u64,
    pub account: String,
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub fills: Vec<Fill>,
    pub total_filled: u64,
    pub open: bool,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};

    /// Empty sides of the book come back as `null` rather than `[]`
    pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
