#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::Request;
use http_body_util::BodyExt;
use pokedex_core::{HttpRequest, HttpResponse, PokeApiClient, UpstreamError};
use pokedex_server::{app, PokemonService, Transport};
use serde_json::Value;
use tower::ServiceExt;

pub const BASE: &str = "http://upstream.test";

/// Transport answering from canned responses keyed by URL. Unknown URLs are
/// `Unreachable`. Records every URL it was asked for.
#[derive(Clone, Default)]
pub struct StubTransport {
    responses: Arc<Mutex<HashMap<String, Result<HttpResponse, UpstreamError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, url: &str, body: Value) -> Self {
        self.status(url, 200, &body.to_string())
    }

    pub fn status(self, url: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self, url: &str, error: UpstreamError) -> Self {
        self.responses.lock().unwrap().insert(url.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, UpstreamError> {
        self.calls.lock().unwrap().push(request.url.clone());
        let canned = self.responses.lock().unwrap().get(&request.url).cloned();
        canned.unwrap_or_else(|| Err(UpstreamError::Unreachable(format!("no stub for {}", request.url))))
    }
}

pub fn router(transport: StubTransport) -> axum::Router {
    app(PokemonService::new(PokeApiClient::new(BASE), transport))
}

pub async fn send(router: axum::Router, request: Request<String>) -> (u16, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(router: axum::Router, uri: &str) -> (u16, Value) {
    send(router, Request::builder().uri(uri).body(String::new()).unwrap()).await
}

pub fn type_payload(names: &[(&str, &str)]) -> Value {
    let names: Vec<Value> = names
        .iter()
        .map(|(code, name)| {
            serde_json::json!({
                "language": {"name": code, "url": format!("{BASE}/language/{code}/")},
                "name": name,
            })
        })
        .collect();
    serde_json::json!({ "names": names })
}
