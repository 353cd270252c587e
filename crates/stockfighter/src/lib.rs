/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Stockfighter client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the Stockfighter trading-simulation API.
//!
//! Every call is an independent authenticated round trip. Failures are split
//! into transport faults, API-reported faults (`"ok": false`) and decode
//! faults, see [`StockfighterError`].

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    AUTH_HEADER,
    CallResponse,
    ClientConfig,
    DEFAULT_BASE_URL,
    Result,
    StockfighterClient,
    StockfighterError,
};

// Re-export all types
pub use types::*;
