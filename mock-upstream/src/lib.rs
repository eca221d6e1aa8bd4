//! Stub of the upstream Pokémon API backed by a small fixed dataset.
//!
//! # Design
//! Serves the three upstream shapes the proxy consumes. Resource URLs in the
//! payloads are absolute and point back at this server, so a client that
//! follows them (as the translations endpoint does) stays on the stub.
//! Resource URLs end in `/` as upstream's do, and both forms are routed.
//! The dataset includes a type with no Spanish name (`shadow`) and a pokemon
//! (`glitchmon`) whose second type URL resolves to nothing.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Page size when `limit` is absent, as upstream does.
pub const DEFAULT_LIMIT: usize = 20;

struct Species {
    id: u32,
    name: &'static str,
    /// `(type name, type id)` in slot order.
    types: &'static [(&'static str, u32)],
}

struct Kind {
    id: u32,
    name: &'static str,
    /// `(language code, localized name)`.
    names: &'static [(&'static str, &'static str)],
}

const SPECIES: &[Species] = &[
    Species { id: 1, name: "bulbasaur", types: &[("grass", 12), ("poison", 4)] },
    Species { id: 4, name: "charmander", types: &[("fire", 10)] },
    Species { id: 6, name: "charizard", types: &[("fire", 10), ("flying", 3)] },
    Species { id: 7, name: "squirtle", types: &[("water", 11)] },
    Species { id: 25, name: "pikachu", types: &[("electric", 13)] },
    Species { id: 9998, name: "glitchmon", types: &[("normal", 1), ("bird", 9999)] },
    Species { id: 9999, name: "missingno", types: &[("normal", 1), ("shadow", 10002)] },
];

const KINDS: &[Kind] = &[
    Kind { id: 1, name: "normal", names: &[("ja-Hrkt", "ノーマル"), ("fr", "Normal"), ("es", "Normal"), ("en", "Normal")] },
    Kind { id: 3, name: "flying", names: &[("fr", "Vol"), ("es", "Volador"), ("en", "Flying")] },
    Kind { id: 4, name: "poison", names: &[("fr", "Poison"), ("es", "Veneno"), ("en", "Poison")] },
    Kind { id: 10, name: "fire", names: &[("ja-Hrkt", "ほのお"), ("fr", "Feu"), ("es", "Fuego"), ("en", "Fire")] },
    Kind { id: 11, name: "water", names: &[("fr", "Eau"), ("es", "Agua"), ("en", "Water")] },
    Kind { id: 12, name: "grass", names: &[("fr", "Plante"), ("es", "Planta"), ("en", "Grass")] },
    Kind { id: 13, name: "electric", names: &[("fr", "Électrik"), ("es", "Eléctrico"), ("en", "Electric")] },
    Kind { id: 10002, name: "shadow", names: &[("fr", "Obscur"), ("en", "Shadow")] },
];

fn language_id(code: &str) -> u32 {
    match code {
        "ja-Hrkt" => 1,
        "fr" => 5,
        "de" => 6,
        "es" => 7,
        "en" => 9,
        _ => 0,
    }
}

#[derive(Clone)]
struct Upstream {
    base_url: Arc<str>,
}

impl Upstream {
    fn pokemon_url(&self, id: u32) -> String {
        format!("{}/pokemon/{id}/", self.base_url)
    }

    fn type_url(&self, id: u32) -> String {
        format!("{}/type/{id}/", self.base_url)
    }

    fn language_url(&self, code: &str) -> String {
        format!("{}/language/{}/", self.base_url, language_id(code))
    }
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
}

/// Router whose payload URLs are rooted at `base_url`.
pub fn app(base_url: &str) -> Router {
    let state = Upstream {
        base_url: Arc::from(base_url.trim_end_matches('/')),
    };
    Router::new()
        .route("/pokemon", get(list_pokemon))
        .route("/pokemon/{id}", get(get_pokemon))
        .route("/pokemon/{id}/", get(get_pokemon))
        .route("/type/{id}", get(get_type))
        .route("/type/{id}/", get(get_type))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let base_url = format!("http://{}", listener.local_addr()?);
    axum::serve(listener, app(&base_url)).await
}

async fn list_pokemon(State(upstream): State<Upstream>, Query(params): Query<ListParams>) -> Json<Value> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let results: Vec<Value> = SPECIES
        .iter()
        .skip(params.offset)
        .take(limit)
        .map(|species| json!({ "name": species.name, "url": upstream.pokemon_url(species.id) }))
        .collect();
    Json(json!({
        "count": SPECIES.len(),
        "next": null,
        "previous": null,
        "results": results,
    }))
}

/// Lookup by numeric id or by name, as upstream allows.
async fn get_pokemon(
    State(upstream): State<Upstream>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let species = SPECIES
        .iter()
        .find(|s| s.name == key || key.parse::<u32>().ok() == Some(s.id))
        .ok_or(StatusCode::NOT_FOUND)?;
    let types: Vec<Value> = species
        .types
        .iter()
        .enumerate()
        .map(|(index, (name, id))| {
            json!({
                "slot": index + 1,
                "type": { "name": name, "url": upstream.type_url(*id) },
            })
        })
        .collect();
    Ok(Json(json!({
        "id": species.id,
        "name": species.name,
        "order": species.id,
        "types": types,
    })))
}

async fn get_type(
    State(upstream): State<Upstream>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let kind = KINDS
        .iter()
        .find(|k| k.name == key || key.parse::<u32>().ok() == Some(k.id))
        .ok_or(StatusCode::NOT_FOUND)?;
    let names: Vec<Value> = kind
        .names
        .iter()
        .map(|(code, localized)| {
            json!({
                "language": { "name": code, "url": upstream.language_url(code) },
                "name": localized,
            })
        })
        .collect();
    Ok(Json(json!({
        "id": kind.id,
        "name": kind.name,
        "names": names,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bird_is_a_dangling_type_reference() {
        let dangling: Vec<_> = SPECIES
            .iter()
            .flat_map(|s| s.types.iter())
            .filter(|(name, id)| !KINDS.iter().any(|k| k.id == *id && k.name == *name))
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(dangling, ["bird"]);
    }

    #[test]
    fn shadow_has_no_spanish_name() {
        let shadow = KINDS.iter().find(|k| k.name == "shadow").unwrap();
        assert!(shadow.names.iter().all(|(code, _)| *code != "es"));
    }

    #[test]
    fn urls_are_rooted_at_base() {
        let upstream = Upstream {
            base_url: Arc::from("http://127.0.0.1:4000"),
        };
        assert_eq!(upstream.type_url(10), "http://127.0.0.1:4000/type/10/");
        assert_eq!(upstream.pokemon_url(1), "http://127.0.0.1:4000/pokemon/1/");
        assert_eq!(upstream.language_url("es"), "http://127.0.0.1:4000/language/7/");
    }

    #[test]
    fn list_params_default_offset() {
        let params: ListParams = serde_json::from_str(r#"{"limit":5}"#).unwrap();
        assert_eq!(params.limit, Some(5));
        assert_eq!(params.offset, 0);
    }
}
