/*
[INPUT]:  Venue and stock symbols
[OUTPUT]: Health checks and market data (stock list, order book, quote)
[POS]:    HTTP layer - venue and market data endpoints
[UPDATE]: When adding new venue endpoints or changing response format
*/

use reqwest::Method;
use tracing::debug;

use crate::http::client::{NO_BODY, endpoint_path};
use crate::http::{Result, StockfighterClient};
use crate::types::{OrderBook, Stock, StockList, StockQuote};

impl StockfighterClient {
    /// Check that the API is up, keeping the failure cause
    ///
    /// GET /heartbeat
    pub async fn try_heartbeat(&self) -> Result<()> {
        self.call(Method::GET, "/heartbeat", NO_BODY).await?;
        Ok(())
    }

    /// Check that the API is up
    pub async fn heartbeat(&self) -> bool {
        match self.try_heartbeat().await {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "heartbeat failed");
                false
            }
        }
    }

    /// Check that a venue is up, keeping the failure cause
    ///
    /// GET /venues/{venue}/heartbeat
    pub async fn try_venue_health_check(&self, venue: &str) -> Result<()> {
        let endpoint = endpoint_path(&["venues", venue, "heartbeat"])?;
        self.call(Method::GET, &endpoint, NO_BODY).await?;
        Ok(())
    }

    /// Check that a venue is up
    pub async fn venue_health_check(&self, venue: &str) -> bool {
        match self.try_venue_health_check(venue).await {
            Ok(()) => true,
            Err(err) => {
                debug!(venue, error = %err, "venue heartbeat failed");
                false
            }
        }
    }

    /// List the stocks traded on a venue
    ///
    /// GET /venues/{venue}/stocks
    pub async fn list_venue_stocks(&self, venue: &str) -> Result<Vec<Stock>> {
        let endpoint = endpoint_path(&["venues", venue, "stocks"])?;
        let list: StockList = self.send_json(Method::GET, &endpoint, NO_BODY).await?;
        Ok(list.symbols)
    }

    /// Get the order book for a stock
    ///
    /// GET /venues/{venue}/stocks/{stock}
    pub async fn get_stock_orderbook(&self, venue: &str, stock: &str) -> Result<OrderBook> {
        let endpoint = endpoint_path(&["venues", venue, "stocks", stock])?;
        self.send_json(Method::GET, &endpoint, NO_BODY).await
    }

    /// Get the latest quote for a stock
    ///
    /// GET /venues/{venue}/stocks/{stock}/quote
    pub async fn quote_stock(&self, venue: &str, stock: &str) -> Result<StockQuote> {
        let endpoint = endpoint_path(&["venues", venue, "stocks", stock, "quote"])?;
        self.send_json(Method::GET, &endpoint, NO_BODY).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{AUTH_HEADER, ClientConfig, StockfighterClient, StockfighterError};
    use crate::types::{BookEntry, Stock};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> StockfighterClient {
        let config = ClientConfig::new("test-token").with_base_url(server.uri());
        StockfighterClient::with_config(config).expect("client init")
    }

    #[tokio::test]
    async fn test_heartbeat() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/heartbeat"))
            .and(header(AUTH_HEADER, "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "error": "",
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client_for(&server).heartbeat().await);
    }

    #[tokio::test]
    async fn test_venue_health_check_down() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/venues/NOEX/heartbeat"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "ok": false,
                "error": "No venue exists with the symbol NOEX",
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(!client.venue_health_check("NOEX").await);

        let err = client.try_venue_health_check("NOEX").await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert!(err.to_string().contains("No venue exists"));
    }

    #[tokio::test]
    async fn test_list_venue_stocks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/venues/TESTEX/stocks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "symbols": [{"name": "Apple", "symbol": "AAPL"}],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let stocks = client_for(&server)
            .list_venue_stocks("TESTEX")
            .await
            .expect("list_venue_stocks failed");

        assert_eq!(
            stocks,
            vec![Stock {
                name: "Apple".to_string(),
                symbol: "AAPL".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_get_stock_orderbook() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "ok": true,
            "venue": "OGEX",
            "symbol": "FAC",
            "bids": [
                {"price": 5200, "qty": 1000, "isBuy": true},
                {"price": 815, "qty": 15, "isBuy": true}
            ],
            "asks": [
                {"price": 5205, "qty": 150, "isBuy": false}
            ],
            "ts": "2015-12-04T09:02:16.680986205Z"
        }"#;

        Mock::given(method("GET"))
            .and(path("/venues/OGEX/stocks/FAC"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let book = client_for(&server)
            .get_stock_orderbook("OGEX", "FAC")
            .await
            .expect("get_stock_orderbook failed");

        assert_eq!(book.symbol, "FAC");
        assert_eq!(book.bids.len(), 2);
        assert_eq!(book.bids[0].price, 5200);
        assert_eq!(
            book.asks,
            vec![BookEntry {
                is_buy: false,
                price: 5205,
                qty: 150,
            }]
        );
    }

    #[tokio::test]
    async fn test_quote_stock_encodes_symbol() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/venues/TESTEX/stocks/FOO%23/quote"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "symbol": "FOO#",
                "venue": "TESTEX",
                "quoteTime": "2015-07-13T05:38:17.33640392Z",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let quote = client_for(&server)
            .quote_stock("TESTEX", "FOO#")
            .await
            .expect("quote_stock failed");
        assert_eq!(quote.symbol, "FOO#");
    }

    #[tokio::test]
    async fn test_quote_stock_shape_mismatch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/venues/TESTEX/stocks/FOO/quote"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "symbol": "FOO",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .quote_stock("TESTEX", "FOO")
            .await
            .unwrap_err();
        assert!(matches!(err, StockfighterError::Decode(_)));
    }
}
