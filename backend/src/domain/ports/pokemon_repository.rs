//! Driven port for Pokémon storage adapters and their errors.
//!
//! Adapters provide the five storage primitives the domain relies on. They
//! carry no business rules: merging and validation live in the service.

use async_trait::async_trait;

use crate::domain::{Pokemon, PokemonId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by Pokémon repository adapters.
    pub enum PokemonPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "pokemon repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "pokemon repository query failed: {message}",
    }
}

/// Storage collaborator for [`Pokemon`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Return every stored record.
    async fn find_all(&self) -> Result<Vec<Pokemon>, PokemonPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, PokemonPersistenceError>;

    /// Insert the record when it has no id, otherwise insert or overwrite the
    /// row with that id. Returns the stored record with its id populated.
    async fn save(&self, pokemon: &Pokemon) -> Result<Pokemon, PokemonPersistenceError>;

    /// Remove the record with `id`; succeeds when no such record exists.
    async fn delete_by_id(&self, id: PokemonId) -> Result<(), PokemonPersistenceError>;

    /// Report whether a record with `id` is stored.
    async fn exists_by_id(&self, id: PokemonId) -> Result<bool, PokemonPersistenceError>;
}
