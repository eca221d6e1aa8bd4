//! Pure mapping from upstream shapes to the proxy's DTOs.
//!
//! Every function here preserves input order and never deduplicates; the
//! handlers rely on that for slot ordering.

use crate::types::{
    LanguageName, PokemonAndTypes, PokemonDetail, PokemonList, PokemonSummary, TranslatedTypeRef,
    TranslatedTypeSlot, TypeRef, TypeSlot,
};
use crate::upstream::{Pokemon, PokemonPage, PokemonTypeSlot, TypeResource};

/// Language code the translations endpoint keeps.
pub const SPANISH: &str = "es";

pub fn summarize(page: PokemonPage) -> PokemonList {
    PokemonList {
        results: page
            .results
            .into_iter()
            .map(|entry| PokemonSummary {
                name: entry.name,
                url: entry.url,
            })
            .collect(),
    }
}

pub fn detail(pokemon: Pokemon) -> PokemonDetail {
    PokemonDetail {
        name: pokemon.name,
        types: pokemon
            .types
            .into_iter()
            .map(|slot| TypeSlot {
                slot: slot.slot,
                kind: TypeRef {
                    name: slot.kind.name,
                    url: slot.kind.url,
                },
            })
            .collect(),
    }
}

/// Entries whose `language.name` equals `code`, in their original order.
pub fn filter_language(names: &[LanguageName], code: &str) -> Vec<LanguageName> {
    names
        .iter()
        .filter(|entry| entry.language.name == code)
        .cloned()
        .collect()
}

/// Combine a slot from the pokemon payload with its fetched type resource.
pub fn translate_slot(slot: PokemonTypeSlot, resource: TypeResource, code: &str) -> TranslatedTypeSlot {
    TranslatedTypeSlot {
        slot: slot.slot,
        kind: TranslatedTypeRef {
            name: slot.kind.name,
            url: slot.kind.url,
            names: filter_language(&resource.names, code),
        },
    }
}

pub fn pokemon_and_types(name: String, types: Vec<TranslatedTypeSlot>) -> PokemonAndTypes {
    PokemonAndTypes { name, types }
}
