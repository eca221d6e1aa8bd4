//! Upstream orchestration behind the three endpoints.
//!
//! # Design
//! `PokemonService` is constructed explicitly from a `PokeApiClient` and a
//! `Transport` and handed to the router; nothing is wired implicitly. It
//! returns raw `UpstreamError`s so each handler decides its own status
//! mapping.

use futures::future::try_join_all;
use pokedex_core::{
    translate, PokeApiClient, Pokemon, PokemonAndTypes, PokemonDetail, PokemonId, PokemonList,
    PokemonTypeSlot, TranslatedTypeSlot, UpstreamError, SPANISH,
};

use crate::upstream::Transport;

pub struct PokemonService<T> {
    client: PokeApiClient,
    transport: T,
}

impl<T: Transport> PokemonService<T> {
    pub fn new(client: PokeApiClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// First `LIST_LIMIT` pokemon as summaries, in upstream order.
    pub async fn list(&self) -> Result<PokemonList, UpstreamError> {
        let response = self.transport.execute(self.client.build_list_pokemon()).await?;
        let page = self.client.parse_list_pokemon(response)?;
        Ok(translate::summarize(page))
    }

    pub async fn detail(&self, id: PokemonId) -> Result<PokemonDetail, UpstreamError> {
        let pokemon = self.pokemon(id).await?;
        Ok(translate::detail(pokemon))
    }

    /// Detail plus the Spanish names of every type.
    ///
    /// The type resources are fetched concurrently and joined all-or-nothing:
    /// the first failing fetch fails the whole call. `try_join_all` yields
    /// results in input order, so slot order survives the fan-out.
    pub async fn detail_with_translations(&self, id: PokemonId) -> Result<PokemonAndTypes, UpstreamError> {
        let pokemon = self.pokemon(id).await?;
        let lookups = pokemon.types.into_iter().map(|slot| self.translate_slot(slot));
        let types = try_join_all(lookups).await?;
        Ok(translate::pokemon_and_types(pokemon.name, types))
    }

    async fn pokemon(&self, id: PokemonId) -> Result<Pokemon, UpstreamError> {
        let response = self.transport.execute(self.client.build_get_pokemon(id)).await?;
        self.client.parse_get_pokemon(response)
    }

    async fn translate_slot(&self, slot: PokemonTypeSlot) -> Result<TranslatedTypeSlot, UpstreamError> {
        let response = self
            .transport
            .execute(self.client.build_get_type(&slot.kind.url))
            .await?;
        let resource = self.client.parse_get_type(response)?;
        Ok(translate::translate_slot(slot, resource, SPANISH))
    }
}
