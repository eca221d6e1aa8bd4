//! Backend-for-frontend over the public Pokémon API.
//!
//! # Overview
//! Three read-only endpoints under `/api/pokemon` fetch from the upstream
//! API, reshape its JSON into narrower DTOs (one of them with Spanish type
//! names), and map upstream failures to HTTP statuses. Request building,
//! parsing and reshaping live in `pokedex-core`; this crate performs the I/O
//! and owns the HTTP surface.
//!
//! # Design
//! - `PokemonService` is built explicitly from a client and a `Transport`
//!   and passed to `app`; handlers are generic over the transport.
//! - Strict input filtering runs as route middleware ahead of every handler.
//! - No state is shared across requests beyond the immutable service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;
pub mod upstream;
pub mod validation;

use std::future::Future;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use handlers::AppState;
pub use service::PokemonService;
pub use upstream::{ReqwestTransport, Transport};
pub use validation::RequestShape;

use handlers::{get_pokemon, get_pokemon_and_types, list_pokemon};
use validation::reject_undeclared_fields;

pub fn app<T: Transport>(service: PokemonService<T>) -> Router {
    Router::new()
        .route("/api/pokemon", get(list_pokemon::<T>))
        .route("/api/pokemon/{id}", get(get_pokemon::<T>))
        .route("/api/pokemon/types/{id}", get(get_pokemon_and_types::<T>))
        .route_layer(middleware::from_fn_with_state(
            RequestShape::NONE,
            reject_undeclared_fields,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(service))
}

pub async fn run<T: Transport>(
    listener: TcpListener,
    service: PokemonService<T>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown)
        .await
}
