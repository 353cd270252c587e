/*
[INPUT]:  User-provided order parameters
[OUTPUT]: Serialized request bodies for API calls
[POS]:    Data layer - request type definitions
[UPDATE]: When API request schema changes
*/

use serde::{Deserialize, Serialize};

use super::enums::{Direction, OrderType};

/// Body of `POST /venues/{venue}/stocks/{stock}/orders`.
///
/// Field order matches the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub account: String,
    pub venue: String,
    pub stock: String,
    pub price: u64,
    pub qty: u64,
    pub direction: Direction,
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
}

impl NewOrderRequest {
    pub fn new(
        account: impl Into<String>,
        venue: impl Into<String>,
        stock: impl Into<String>,
        price: u64,
        qty: u64,
        direction: Direction,
        order_type: OrderType,
    ) -> Self {
        Self {
            account: account.into(),
            venue: venue.into(),
            stock: stock.into(),
            price,
            qty,
            direction,
            order_type,
        }
    }
}
