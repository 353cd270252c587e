/*
[INPUT]:  Error sources (transport, API envelope, deserialization, configuration)
[OUTPUT]: Structured error type separating client faults from API faults
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Stockfighter client
#[derive(Error, Debug)]
pub enum StockfighterError {
    /// The request never produced a response (request build, connect, timeout, body read)
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API processed the request and answered `ok: false`
    #[error("stockfighter api error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body did not match the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StockfighterError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        StockfighterError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    /// The client failed before the API could answer
    pub fn is_transport(&self) -> bool {
        matches!(self, StockfighterError::Transport(_))
    }

    /// The API answered and reported a failure
    pub fn is_api(&self) -> bool {
        matches!(self, StockfighterError::Api { .. })
    }

    /// The response body did not have the expected shape
    pub fn is_decode(&self) -> bool {
        matches!(self, StockfighterError::Decode(_))
    }

    /// HTTP status carried by an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StockfighterError::Api { code, .. } => Some(*code),
            StockfighterError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Stockfighter operations
pub type Result<T> = std::result::Result<T, StockfighterError>;
