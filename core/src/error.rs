//! Error types for upstream calls.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the detail endpoint answers
//! "the pokemon does not exist" differently from "the upstream misbehaved."
//! Transport failures land in `Unreachable`; every other non-2xx status and
//! any body that does not match the expected shape collapse into the `Other`
//! kind, keeping the raw status and message for logging.

use thiserror::Error;

/// Errors produced while fetching from the upstream API.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// The request could not complete (connection refused, DNS, timeout,
    /// truncated body).
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// The upstream returned 404.
    #[error("upstream resource not found")]
    NotFound,

    /// The upstream returned a non-2xx status other than 404.
    #[error("upstream returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("malformed upstream payload: {0}")]
    Malformed(String),
}

/// Coarse classification handlers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    NotFound,
    Unreachable,
    Other,
}

impl UpstreamError {
    pub fn kind(&self) -> UpstreamErrorKind {
        match self {
            UpstreamError::NotFound => UpstreamErrorKind::NotFound,
            UpstreamError::Unreachable(_) => UpstreamErrorKind::Unreachable,
            UpstreamError::Http { .. } | UpstreamError::Malformed(_) => UpstreamErrorKind::Other,
        }
    }

    /// Upstream HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::NotFound => Some(404),
            UpstreamError::Http { status, .. } => Some(*status),
            UpstreamError::Unreachable(_) | UpstreamError::Malformed(_) => None,
        }
    }
}
