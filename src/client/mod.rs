//! HTTP client for the characters API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Unlike a typical API client it does not turn
//! error statuses into errors: the smoke tests need to see the status code itself,
//! so only transport failures are reported as [`ApiError`].

mod async_wrapper;
pub use async_wrapper::{AsyncCharacterClient, AsyncCharacterClientImpl};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::metrics::{HttpTimer, Metrics};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Status code and body of one endpoint response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// HTTP client for the characters endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct CharacterClient {
    /// Characters endpoint URL
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl CharacterClient {
    /// Create a new CharacterClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a CharacterClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the request URL, appending the name filter as-is.
    fn build_url(&self, name: Option<&str>) -> String {
        match name {
            Some(name) => format!("{}?name={}", self.base_url, name),
            None => self.base_url.clone(),
        }
    }

    /// Fetch the characters listing, optionally filtered by name.
    ///
    /// Any HTTP status is returned as an [`ApiResponse`]; only failures to get
    /// a response at all are errors.
    pub fn get_characters(&self, name: Option<&str>) -> ApiResult<ApiResponse> {
        let url = self.build_url(name);
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("GET {}", url);

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                timer.complete_with_error();
                let err = map_transport(transport);
                tracing::error!("GET {} - Error: {}", url, err);
                return Err(err);
            }
        };

        let status = response.status();
        let body = match response.into_string() {
            Ok(body) => body,
            Err(e) => {
                timer.complete_with_error();
                return Err(ApiError::Io(e.to_string()));
            }
        };
        timer.complete();

        tracing::debug!("GET {} - status {} ({} bytes)", url, status, body.len());
        Ok(ApiResponse { status, body })
    }
}

/// Map a ureq transport failure to an ApiError, keeping its message.
fn map_transport(transport: ureq::Transport) -> ApiError {
    let timed_out = is_timeout(&transport);
    let message = transport.to_string();
    match transport.kind() {
        ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed => {
            ApiError::ConnectionFailed(message)
        }
        ureq::ErrorKind::Io if timed_out => ApiError::Timeout(message),
        ureq::ErrorKind::Io => ApiError::Io(message),
        _ => ApiError::HttpError(message),
    }
}

/// Whether the transport failed because a socket deadline expired.
///
/// Read timeouts surface as `WouldBlock` on some platforms.
fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
}
