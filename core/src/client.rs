//! Stateless request builder and response parser for the upstream API.
//!
//! # Design
//! `PokeApiClient` holds only a `base_url` and carries no mutable state
//! between calls. Each upstream call is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The server executes the round-trip in between, keeping
//! this crate deterministic and free of I/O.

use serde::de::DeserializeOwned;

use crate::error::UpstreamError;
use crate::http::{HttpRequest, HttpResponse};
use crate::id::PokemonId;
use crate::upstream::{Pokemon, PokemonPage, TypeResource};

/// Number of entries requested from the upstream list endpoint.
pub const LIST_LIMIT: u32 = 100;

/// Synchronous, stateless client for the upstream Pokémon API.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_pokemon(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/pokemon?limit={LIST_LIMIT}", self.base_url))
    }

    pub fn build_get_pokemon(&self, id: PokemonId) -> HttpRequest {
        HttpRequest::get(format!("{}/pokemon/{id}", self.base_url))
    }

    /// Type resources are addressed by the absolute URL the upstream put in
    /// the pokemon payload, not relative to `base_url`.
    pub fn build_get_type(&self, type_url: &str) -> HttpRequest {
        HttpRequest::get(type_url.to_string())
    }

    pub fn parse_list_pokemon(&self, response: HttpResponse) -> Result<PokemonPage, UpstreamError> {
        parse_json(response)
    }

    pub fn parse_get_pokemon(&self, response: HttpResponse) -> Result<Pokemon, UpstreamError> {
        parse_json(response)
    }

    pub fn parse_get_type(&self, response: HttpResponse) -> Result<TypeResource, UpstreamError> {
        parse_json(response)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, UpstreamError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| UpstreamError::Malformed(e.to_string()))
}

/// Map non-success status codes to the appropriate `UpstreamError` variant.
fn check_status(response: &HttpResponse) -> Result<(), UpstreamError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(UpstreamError::NotFound);
    }
    Err(UpstreamError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
