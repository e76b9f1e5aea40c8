//! In-process `PokemonRepository` used when no database is configured.
//!
//! Records live in an ordered map keyed by id, so `find_all` returns them in
//! ascending id order. Ids come from a monotonic counter starting at 1 and are
//! never handed out twice, even after deletes.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{PokemonPersistenceError, PokemonRepository};
use crate::domain::{Pokemon, PokemonId};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<PokemonId, Pokemon>,
    last_id: i64,
}

impl Table {
    fn next_id(&mut self) -> Result<PokemonId, PokemonPersistenceError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| PokemonPersistenceError::query("pokemon id space exhausted"))?;
        self.last_id = next;
        Ok(PokemonId::new(next))
    }
}

/// Thread-safe in-memory Pokémon store.
#[derive(Debug, Default)]
pub struct InMemoryPokemonRepository {
    table: RwLock<Table>,
}

impl InMemoryPokemonRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> PokemonPersistenceError {
    PokemonPersistenceError::query("in-memory table lock poisoned")
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn find_all(&self) -> Result<Vec<Pokemon>, PokemonPersistenceError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, PokemonPersistenceError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, pokemon: &Pokemon) -> Result<Pokemon, PokemonPersistenceError> {
        let mut table = self.table.write().map_err(poisoned)?;
        let id = match pokemon.id {
            Some(id) => {
                table.last_id = table.last_id.max(id.get());
                id
            }
            None => table.next_id()?,
        };
        let stored = pokemon.clone().with_id(id);
        table.rows.insert(id, stored.clone());
        debug!(pokemon_id = %id, "pokemon stored in memory");
        Ok(stored)
    }

    async fn delete_by_id(&self, id: PokemonId) -> Result<(), PokemonPersistenceError> {
        let mut table = self.table.write().map_err(poisoned)?;
        table.rows.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: PokemonId) -> Result<bool, PokemonPersistenceError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.contains_key(&id))
    }
}
