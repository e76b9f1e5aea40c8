//! Pokémon record service.
//!
//! Implements the driving ports on top of a [`PokemonRepository`]. The
//! service holds no state between calls; each operation works on a copy
//! fetched from storage and writes it back explicitly.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    PokemonCommand, PokemonPersistenceError, PokemonQuery, PokemonRepository,
};
use crate::domain::{Error, Pokemon, PokemonId, PokemonPatch};

/// Service implementing [`PokemonQuery`] and [`PokemonCommand`].
#[derive(Clone)]
pub struct PokemonService<R> {
    repository: Arc<R>,
}

impl<R> PokemonService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> PokemonService<R>
where
    R: PokemonRepository,
{
    fn map_persistence_error(error: PokemonPersistenceError) -> Error {
        match error {
            PokemonPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("pokemon repository unavailable: {message}"))
            }
            PokemonPersistenceError::Query { message } => {
                Error::internal(format!("pokemon repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> PokemonQuery for PokemonService<R>
where
    R: PokemonRepository,
{
    async fn list_all(&self) -> Result<Vec<Pokemon>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn exists_by_id(&self, id: PokemonId) -> Result<bool, Error> {
        self.repository
            .exists_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<R> PokemonCommand for PokemonService<R>
where
    R: PokemonRepository,
{
    async fn save(&self, pokemon: Pokemon) -> Result<Pokemon, Error> {
        self.repository
            .save(&pokemon)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn partial_update(
        &self,
        id: PokemonId,
        patch: PokemonPatch,
    ) -> Result<Option<Pokemon>, Error> {
        let Some(mut pokemon) = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
        else {
            debug!(pokemon_id = %id, "partial update skipped: record absent");
            return Ok(None);
        };

        pokemon.apply_patch(patch);
        let saved = self
            .repository
            .save(&pokemon)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(Some(saved))
    }

    async fn delete(&self, id: PokemonId) -> Result<(), Error> {
        self.repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[cfg(test)]
#[path = "pokemon_service_tests.rs"]
mod tests;
