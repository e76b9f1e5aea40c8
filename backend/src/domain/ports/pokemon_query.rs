//! Driving port for Pokémon reads.
//!
//! Inbound adapters use this port to look records up without importing
//! outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, Pokemon, PokemonId};

/// Domain use-case port for reading Pokémon records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonQuery: Send + Sync {
    /// Every stored record, in storage order.
    async fn list_all(&self) -> Result<Vec<Pokemon>, Error>;

    /// The record with `id`, or `None` when absent.
    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, Error>;

    /// Whether a record with `id` is stored.
    async fn exists_by_id(&self, id: PokemonId) -> Result<bool, Error>;
}
