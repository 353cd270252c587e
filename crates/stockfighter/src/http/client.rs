/*
[INPUT]:  HTTP configuration (base URL, auth token, timeouts) and optional transport
[OUTPUT]: Authenticated request pipeline returning decoded envelopes or classified errors
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{Result, StockfighterError};
use crate::types::ApiEnvelope;

/// Default location of the Stockfighter order-book API
pub const DEFAULT_BASE_URL: &str = "https://api.stockfighter.io/ob/api";

/// Header carrying the API token on every request
pub const AUTH_HEADER: &str = "X-Starfighter-Authorization";

/// Payload for calls that send no request body
pub(crate) const NO_BODY: Option<&()> = None;

/// HTTP client configuration
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Default configuration authenticated with `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Point the client at another API location
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overall per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Outcome of a successful [`StockfighterClient::call`]
#[derive(Debug, Clone)]
pub struct CallResponse {
    pub status: StatusCode,
    /// Body decoded as a generic JSON object
    pub body: ApiEnvelope,
    /// Untouched body bytes, kept for typed re-decoding
    pub raw: Vec<u8>,
}

impl CallResponse {
    /// Decode the raw body into an endpoint-specific structure
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.raw)?)
    }
}

/// Join path segments into an endpoint, percent-encoding each one so a
/// `/`, `?` or `#` inside a symbol stays part of that segment.
pub(crate) fn endpoint_path(segments: &[&str]) -> Result<String> {
    let mut url = Url::parse("http://localhost/")?;
    url.path_segments_mut()
        .map_err(|_| StockfighterError::Config("cannot build endpoint path".to_string()))?
        .clear()
        .extend(segments);
    Ok(url.path().to_string())
}

/// HTTP client for the Stockfighter API.
///
/// Holds only immutable configuration plus the pooled transport, so a single
/// instance can be shared across tasks and used concurrently.
#[derive(Debug, Clone)]
pub struct StockfighterClient {
    http_client: Client,
    base_url: String,
    config: ClientConfig,
}

impl StockfighterClient {
    /// Create a new client against the default API location
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| StockfighterError::Config(format!("failed to build HTTP client: {err}")))?;

        Self::with_http_client(config, http_client)
    }

    /// Create a client on top of an existing transport.
    ///
    /// Timeouts in `config` are ignored; the transport's own settings apply.
    pub fn with_http_client(config: ClientConfig, http_client: Client) -> Result<Self> {
        Url::parse(&config.base_url)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http_client,
            base_url,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Paths are appended verbatim so a base path such as `/ob/api` survives
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Build a request for `endpoint` with the auth header attached
    pub fn authorized_request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.http_client
            .request(method, self.endpoint_url(endpoint))
            .header(AUTH_HEADER, &self.config.token)
    }

    /// Run one request/response round trip.
    ///
    /// `payload` is sent as a JSON body when present; otherwise the request
    /// has no body. Fails with [`StockfighterError::Api`] when the response
    /// envelope carries `"ok": false`.
    pub async fn call<T>(&self, method: Method, endpoint: &str, payload: Option<&T>) -> Result<CallResponse>
    where
        T: Serialize + ?Sized,
    {
        debug!(%method, endpoint, has_body = payload.is_some(), "stockfighter request");

        let mut builder = self.authorized_request(method, endpoint);
        if let Some(payload) = payload {
            // Serialization failures surface from `send` as transport errors
            builder = builder.json(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let raw = response.bytes().await?.to_vec();

        let body: ApiEnvelope = serde_json::from_slice(&raw)?;
        if body.is_failure() {
            debug!(endpoint, status = status.as_u16(), error = body.error_message(), "stockfighter api error");
            return Err(StockfighterError::api_error(status, body.error_message()));
        }

        debug!(endpoint, status = status.as_u16(), "stockfighter response");
        Ok(CallResponse { status, body, raw })
    }

    /// `call` followed by a typed decode of the raw body
    pub(crate) async fn send_json<T, R>(&self, method: Method, endpoint: &str, payload: Option<&T>) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(method, endpoint, payload).await?.decode()
    }
}
