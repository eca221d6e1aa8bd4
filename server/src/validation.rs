//! Strict input filtering, run as middleware before any handler.
//!
//! # Design
//! Each route declares the query and body fields it accepts in a
//! `RequestShape`. A request carrying anything else is rejected whole with
//! 400 rather than having the extra fields dropped. The path `id` is not
//! checked here; handlers coerce it with `PokemonId::coerce`.

use axum::{
    body::{to_bytes, Body},
    extract::{Query, Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

/// Largest request body inspected.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Fields a route accepts beyond its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestShape {
    pub query: &'static [&'static str],
    pub body: &'static [&'static str],
}

impl RequestShape {
    /// Accepts no query parameters and no body fields.
    pub const NONE: RequestShape = RequestShape {
        query: &[],
        body: &[],
    };

    /// Names from `query` and `body` that this shape does not declare, in
    /// first-seen order without repeats.
    pub fn undeclared(&self, query: &[String], body: &[String]) -> Vec<String> {
        let mut undeclared: Vec<String> = Vec::new();
        let query_extra = query.iter().filter(|f| !self.query.iter().any(|d| *d == f.as_str()));
        let body_extra = body.iter().filter(|f| !self.body.iter().any(|d| *d == f.as_str()));
        for field in query_extra.chain(body_extra) {
            if !undeclared.contains(field) {
                undeclared.push(field.clone());
            }
        }
        undeclared
    }
}

pub async fn reject_undeclared_fields(
    State(shape): State<RequestShape>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();

    let query = query_fields(&parts.uri)?;
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| ApiError::bad_request("request body could not be read"))?;
    let body_fields = body_fields(&bytes)?;

    let undeclared = shape.undeclared(&query, &body_fields);
    if !undeclared.is_empty() {
        tracing::debug!(uri = %parts.uri, ?undeclared, "rejecting undeclared fields");
        return Err(ApiError::undeclared_fields(&undeclared));
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

/// Keys of the query string, in order.
fn query_fields(uri: &Uri) -> Result<Vec<String>, ApiError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|_| ApiError::bad_request("query string could not be parsed"))?;
    Ok(pairs.into_iter().map(|(key, _)| key).collect())
}

/// Top-level keys of a JSON object body. An empty body has none.
fn body_fields(bytes: &[u8]) -> Result<Vec<String>, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(serde_json::Value::Object(map)) => Ok(map.keys().cloned().collect()),
        _ => Err(ApiError::bad_request("request body must be a JSON object")),
    }
}
