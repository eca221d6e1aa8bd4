//! Executes the core's `HttpRequest` values against the network.
//!
//! # Design
//! The core never performs I/O; this module is the host side of that
//! contract. `Transport` is the seam handlers are generic over, so tests can
//! substitute canned responses without a socket. Every call is a single
//! attempt; nothing here retries.

use std::future::Future;
use std::time::Duration;

use pokedex_core::{HttpRequest, HttpResponse, UpstreamError};

/// Performs one HTTP round-trip.
///
/// Implementations return `Ok` for any status the upstream answered with;
/// only failures to obtain a response at all become `Err` (as
/// `UpstreamError::Unreachable`). Status interpretation belongs to the core.
pub trait Transport: Send + Sync + 'static {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, UpstreamError>> + Send;
}

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// `timeout` of `None` leaves outbound calls unbounded.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, UpstreamError> {
        tracing::debug!(url = %request.url, "upstream request");

        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|error| {
            tracing::warn!(url = %request.url, %error, "upstream request failed");
            UpstreamError::Unreachable(error.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|error| UpstreamError::Unreachable(error.to_string()))?;

        tracing::debug!(url = %request.url, status, "upstream response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
