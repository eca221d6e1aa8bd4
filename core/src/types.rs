//! DTOs returned to callers of the proxy.
//!
//! # Design
//! These types are the proxy's own contract and are kept apart from the
//! upstream wire shapes in `upstream`, even where the fields coincide, so a
//! change upstream cannot silently widen what the proxy serves. Every value
//! is built once per request and serialized; none is mutated afterwards.

use serde::{Deserialize, Serialize};

/// One entry of the pokemon list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

/// Body of `GET /pokemon`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonList {
    pub results: Vec<PokemonSummary>,
}

/// Body of `GET /pokemon/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonDetail {
    pub name: String,
    /// In upstream slot order.
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSlot {
    /// 1-based position as reported upstream.
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: TypeRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub url: String,
}

/// Body of `GET /pokemon/types/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonAndTypes {
    pub name: String,
    pub types: Vec<TranslatedTypeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatedTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: TranslatedTypeRef,
}

/// A type reference plus its names in a single language. `names` may be
/// empty when the upstream has no entry for that language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatedTypeRef {
    pub name: String,
    pub url: String,
    pub names: Vec<LanguageName>,
}

/// One localized name. Shared with the upstream type payload, whose
/// entries have exactly this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageName {
    pub language: Language,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub url: String,
}
