//! Driving port for Pokémon mutations.

use async_trait::async_trait;

use crate::domain::{Error, Pokemon, PokemonId, PokemonPatch};

/// Domain use-case port for creating, updating, and deleting records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonCommand: Send + Sync {
    /// Persist `pokemon`, inserting when it has no id and overwriting
    /// otherwise. Name uniqueness is not checked.
    async fn save(&self, pokemon: Pokemon) -> Result<Pokemon, Error>;

    /// Merge `patch` into the record with `id`.
    ///
    /// Returns `None` when no such record exists.
    async fn partial_update(
        &self,
        id: PokemonId,
        patch: PokemonPatch,
    ) -> Result<Option<Pokemon>, Error>;

    /// Remove the record with `id`. Callers check existence first.
    async fn delete(&self, id: PokemonId) -> Result<(), Error>;
}
