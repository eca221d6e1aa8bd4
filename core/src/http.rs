//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe upstream requests and responses as plain data. The
//! core builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network; the server owns the actual I/O through its
//! transport. Every upstream call is a GET, so no method is carried.

/// Header sent on every upstream request.
pub const ACCEPT_JSON: (&str, &str) = ("accept", "application/json");

/// An outbound GET request described as plain data.
///
/// Built by `PokeApiClient::build_*` methods. The caller is responsible for
/// executing it and returning the corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub(crate) fn get(url: String) -> Self {
        Self {
            url,
            headers: vec![(ACCEPT_JSON.0.to_string(), ACCEPT_JSON.1.to_string())],
        }
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `PokeApiClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
