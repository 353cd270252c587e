/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod order;
pub mod venue;

pub use error::{Result, StockfighterError};

pub use client::{AUTH_HEADER, CallResponse, ClientConfig, DEFAULT_BASE_URL, StockfighterClient};
