/*
[INPUT]:  API token (STOCKFIGHTER_API_KEY), venue and stock symbol
[OUTPUT]: Venue health, listed stocks, order book and quote
[POS]:    Examples - market data queries
[UPDATE]: When adding new market data endpoints
*/

use anyhow::{Context, Result, anyhow};
use stockfighter::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const VENUE: &str = "TESTEX";
const STOCK: &str = "FOOBAR";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info,stockfighter=debug")?;

    let token = std::env::var("STOCKFIGHTER_API_KEY").context("STOCKFIGHTER_API_KEY must be set")?;
    let client = StockfighterClient::new(token).context("create client")?;

    if !client.heartbeat().await {
        return Err(anyhow!("API at {} is down", client.base_url()));
    }
    client
        .try_venue_health_check(VENUE)
        .await
        .with_context(|| format!("venue {VENUE} is down"))?;
    info!(venue = VENUE, "venue is up");

    for stock in client.list_venue_stocks(VENUE).await.context("list stocks")? {
        info!(symbol = %stock.symbol, name = %stock.name, "listed stock");
    }

    let book = client
        .get_stock_orderbook(VENUE, STOCK)
        .await
        .context("fetch order book")?;
    info!(
        bids = book.bids.len(),
        asks = book.asks.len(),
        best_bid = ?book.bids.first().map(|entry| entry.price),
        best_ask = ?book.asks.first().map(|entry| entry.price),
        "order book"
    );

    let quote = client.quote_stock(VENUE, STOCK).await.context("fetch quote")?;
    info!(bid = ?quote.bid, ask = ?quote.ask, last = ?quote.last, at = %quote.quote_time, "quote");

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
