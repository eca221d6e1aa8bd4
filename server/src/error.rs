//! HTTP error responses.
//!
//! Every failure leaves the server as `{"statusCode": <code>, "message": <text>}`.
//! Upstream error detail is logged by the handler and never placed in the body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status_code: u16,
    message: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Any upstream failure on the list endpoint.
    pub fn list_failed() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Failed to fetch Pokemon list")
    }

    pub fn pokemon_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Pokemon not found")
    }

    pub fn detail_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch Pokemon details")
    }

    /// Any failure on the translations endpoint, not-found included.
    pub fn translations_failed() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch Pokemon types and translations",
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Rejection for fields the route does not declare.
    pub fn undeclared_fields(fields: &[String]) -> Self {
        let message = fields
            .iter()
            .map(|field| format!("property {field} should not exist"))
            .collect::<Vec<_>>()
            .join(", ");
        Self::bad_request(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status_code: self.status.as_u16(),
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn renders_status_code_and_message() {
        let response = ApiError::pokemon_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"statusCode": 404, "message": "Pokemon not found"}));
    }

    #[test]
    fn list_failures_are_client_errors() {
        assert_eq!(ApiError::list_failed().status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn undeclared_fields_lists_each_property() {
        let err = ApiError::undeclared_fields(&["limit".to_string(), "debug".to_string()]);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "property limit should not exist, property debug should not exist"
        );
    }
}
