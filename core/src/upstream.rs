//! Wire shapes of the upstream Pokémon API.
//!
//! # Design
//! Only the fields the translation layer reads are declared. Upstream
//! payloads carry far more (stats, sprites, moves...) and serde ignores
//! anything undeclared, so upstream growth never breaks parsing.

use serde::{Deserialize, Serialize};

use crate::types::LanguageName;

/// `{name, url}` reference used throughout the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Response of `GET /pokemon?limit=N`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonPage {
    pub results: Vec<NamedResource>,
}

/// Response of `GET /pokemon/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub types: Vec<PokemonTypeSlot>,
}

/// One entry of `Pokemon::types`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Response of a type resource URL, reduced to its localized names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeResource {
    pub names: Vec<LanguageName>,
}
