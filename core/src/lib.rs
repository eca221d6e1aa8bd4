//! I/O-free core of the Pokémon backend-for-frontend.
//!
//! # Overview
//! Builds `HttpRequest` values for the upstream Pokémon API, parses the
//! `HttpResponse` values the host hands back, and reshapes the upstream
//! payloads into the proxy's DTOs. The host (the server crate) performs the
//! actual HTTP round-trips, so everything here is deterministic.
//!
//! # Design
//! - `PokeApiClient` is stateless; it holds only `base_url`.
//! - Each upstream call is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - Upstream wire shapes (`upstream`) and outgoing DTOs (`types`) are
//!   separate types joined only by the pure functions in `translate`.

pub mod client;
pub mod error;
pub mod http;
pub mod id;
pub mod translate;
pub mod types;
pub mod upstream;

pub use client::{PokeApiClient, LIST_LIMIT};
pub use error::{UpstreamError, UpstreamErrorKind};
pub use http::{HttpRequest, HttpResponse};
pub use id::PokemonId;
pub use translate::SPANISH;
pub use types::{
    Language, LanguageName, PokemonAndTypes, PokemonDetail, PokemonList, PokemonSummary,
    TranslatedTypeRef, TranslatedTypeSlot, TypeRef, TypeSlot,
};
pub use upstream::{NamedResource, Pokemon, PokemonPage, PokemonTypeSlot, TypeResource};
