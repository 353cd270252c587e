/*
[INPUT]:  API token (STOCKFIGHTER_API_KEY) and trading account
[OUTPUT]: Order placement, status, listing and cancellation
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use anyhow::{Context, Result, anyhow};
use stockfighter::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const ACCOUNT: &str = "EXB123456";
const VENUE: &str = "TESTEX";
const STOCK: &str = "FOOBAR";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info")?;

    let token = std::env::var("STOCKFIGHTER_API_KEY").context("STOCKFIGHTER_API_KEY must be set")?;
    let client = StockfighterClient::new(token).context("create client")?;

    // Bid well under the market so the order rests on the book.
    let order = client
        .place_stock_order(ACCOUNT, VENUE, STOCK, 100, 10, Direction::Buy, OrderType::Limit)
        .await
        .context("place order")?;
    info!(id = order.id, open = order.open, filled = order.total_filled, "order placed");

    let status = client
        .get_order_status(VENUE, STOCK, order.id)
        .await
        .context("order status")?;
    info!(id = status.id, remaining = status.qty, "order status");

    let orders = client
        .list_venue_stock_order_status(VENUE, STOCK, ACCOUNT)
        .await
        .context("list orders")?;
    info!(count = orders.orders.len(), "orders on {STOCK}");

    match client.cancel_order(VENUE, STOCK, order.id).await {
        Ok(cancelled) => info!(id = cancelled.id, filled = cancelled.total_filled, "order cancelled"),
        Err(StockfighterError::Api { code, message }) => {
            warn!(code, %message, "venue refused cancellation")
        }
        Err(err) => return Err(err).context("cancel order"),
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
