/*
[INPUT]:  Order parameters, order ids and account identifiers
[OUTPUT]: Order results and order listings
[POS]:    HTTP layer - trading endpoints (place, status, cancel, list)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;

use crate::http::client::{NO_BODY, endpoint_path};
use crate::http::{Result, StockfighterClient};
use crate::types::{Direction, NewOrderRequest, OrderResult, OrderResultList, OrderType};

impl StockfighterClient {
    /// Place an order for a stock
    ///
    /// POST /venues/{venue}/stocks/{stock}/orders
    #[allow(clippy::too_many_arguments)]
    pub async fn place_stock_order(
        &self,
        account: &str,
        venue: &str,
        stock: &str,
        price: u64,
        qty: u64,
        direction: Direction,
        order_type: OrderType,
    ) -> Result<OrderResult> {
        let req = NewOrderRequest::new(account, venue, stock, price, qty, direction, order_type);
        self.place_order(&req).await
    }

    /// Place a prebuilt order; venue and stock in the path come from `req`
    pub async fn place_order(&self, req: &NewOrderRequest) -> Result<OrderResult> {
        let endpoint = endpoint_path(&["venues", req.venue.as_str(), "stocks", req.stock.as_str(), "orders"])?;
        self.send_json(Method::POST, &endpoint, Some(req)).await
    }

    /// Get the status of an existing order
    ///
    /// GET /venues/{venue}/stocks/{stock}/orders/{id}
    pub async fn get_order_status(&self, venue: &str, stock: &str, id: u64) -> Result<OrderResult> {
        let id = id.to_string();
        let endpoint = endpoint_path(&["venues", venue, "stocks", stock, "orders", id.as_str()])?;
        self.send_json(Method::GET, &endpoint, NO_BODY).await
    }

    /// Cancel an order. The result reflects the order after cancellation,
    /// including any fills that landed first.
    ///
    /// DELETE /venues/{venue}/stocks/{stock}/orders/{id}
    pub async fn cancel_order(&self, venue: &str, stock: &str, id: u64) -> Result<OrderResult> {
        let id = id.to_string();
        let endpoint = endpoint_path(&["venues", venue, "stocks", stock, "orders", id.as_str()])?;
        self.send_json(Method::DELETE, &endpoint, NO_BODY).await
    }

    /// List every order an account has on a venue
    ///
    /// GET /venues/{venue}/accounts/{account}/orders
    pub async fn list_venue_order_status(&self, venue: &str, account: &str) -> Result<OrderResultList> {
        let endpoint = endpoint_path(&["venues", venue, "accounts", account, "orders"])?;
        self.send_json(Method::GET, &endpoint, NO_BODY).await
    }

    /// List an account's orders for one stock on a venue
    ///
    /// GET /venues/{venue}/accounts/{account}/stocks/{stock}/orders
    pub async fn list_venue_stock_order_status(
        &self,
        venue: &str,
        stock: &str,
        account: &str,
    ) -> Result<OrderResultList> {
        let endpoint = endpoint_path(&["venues", venue, "accounts", account, "stocks", stock, "orders"])?;
        self.send_json(Method::GET, &endpoint, NO_BODY).await
    }
}
