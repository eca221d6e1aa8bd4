//! HTTP handlers for the three pokemon endpoints.
//!
//! Each handler owns its upstream-error-to-status mapping. The list endpoint
//! answers every failure with 400; detail separates not-found (404) from the
//! rest (500); translations answers every failure with 500.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use pokedex_core::{PokemonAndTypes, PokemonDetail, PokemonId, PokemonList, UpstreamErrorKind};

use crate::error::ApiError;
use crate::service::PokemonService;
use crate::upstream::Transport;

pub struct AppState<T> {
    pub service: Arc<PokemonService<T>>,
}

impl<T> AppState<T> {
    pub fn new(service: PokemonService<T>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// Manual impl: deriving would demand `T: Clone`.
impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

pub async fn list_pokemon<T: Transport>(
    State(state): State<AppState<T>>,
) -> Result<Json<PokemonList>, ApiError> {
    state.service.list().await.map(Json).map_err(|error| {
        tracing::error!(%error, kind = ?error.kind(), "failed to fetch pokemon list");
        ApiError::list_failed()
    })
}

pub async fn get_pokemon<T: Transport>(
    State(state): State<AppState<T>>,
    Path(raw_id): Path<String>,
) -> Result<Json<PokemonDetail>, ApiError> {
    let id = PokemonId::coerce(&raw_id);
    match state.service.detail(id).await {
        Ok(detail) => Ok(Json(detail)),
        Err(error) if error.kind() == UpstreamErrorKind::NotFound => {
            tracing::debug!(%raw_id, %id, "pokemon not found");
            Err(ApiError::pokemon_not_found())
        }
        Err(error) => {
            tracing::error!(%raw_id, %error, kind = ?error.kind(), "failed to fetch pokemon details");
            Err(ApiError::detail_failed())
        }
    }
}

/// Unlike `get_pokemon`, a missing pokemon here is a 500 as well. The kind
/// is logged so the two cases stay distinguishable in the logs.
pub async fn get_pokemon_and_types<T: Transport>(
    State(state): State<AppState<T>>,
    Path(raw_id): Path<String>,
) -> Result<Json<PokemonAndTypes>, ApiError> {
    let id = PokemonId::coerce(&raw_id);
    state
        .service
        .detail_with_translations(id)
        .await
        .map(Json)
        .map_err(|error| {
            tracing::error!(
                %raw_id,
                %error,
                kind = ?error.kind(),
                status = ?error.status(),
                "failed to fetch pokemon types and translations"
            );
            ApiError::translations_failed()
        })
}
