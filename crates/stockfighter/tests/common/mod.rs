/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for stockfighter tests

use stockfighter::{ClientConfig, StockfighterClient};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, authenticated with [`TEST_TOKEN`]
pub fn client_for(server: &MockServer) -> StockfighterClient {
    let config = ClientConfig::new(TEST_TOKEN).with_base_url(server.uri());
    StockfighterClient::with_config(config).expect("client init")
}

/// Order payload as returned by the venue, using `order_type_key` for the type field
#[allow(dead_code)]
pub fn order_fixture(id: u64, order_type_key: &str) -> serde_json::Value {
    let mut order = serde_json::json!({
        "ok": true,
        "symbol": "FOOBAR",
        "venue": "TESTEX",
        "direction": "sell",
        "originalQty": 100,
        "qty": 20,
        "price": 5100,
        "id": id,
        "account": "EXB123456",
        "ts": "2015-07-05T22:16:18+00:00",
        "fills": [
            {"price": 5050, "qty": 50, "ts": "2015-07-05T22:16:18+00:00"},
            {"price": 5100, "qty": 30, "ts": "2015-07-05T22:16:19+00:00"}
        ],
        "totalFilled": 80,
        "open": true,
    });
    order[order_type_key] = serde_json::json!("limit");
    order
}
