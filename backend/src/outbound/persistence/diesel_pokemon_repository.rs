//! PostgreSQL-backed `PokemonRepository` implementation using Diesel ORM.
//!
//! Saves without an id insert and let the `bigserial` column assign one.
//! Saves with an id upsert through `ON CONFLICT (id) DO UPDATE`, so the row is
//! overwritten when present and created under that id otherwise.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PokemonPersistenceError, PokemonRepository};
use crate::domain::{Pokemon, PokemonId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPokemonRow, PokemonRow, PokemonRowWithId, PokemonUpdate};
use super::pool::DbPool;
use super::schema::pokemon;

/// Diesel-backed implementation of the `PokemonRepository` port.
#[derive(Clone)]
pub struct DieselPokemonRepository {
    pool: DbPool,
}

impl DieselPokemonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_pokemon(row: PokemonRow) -> Pokemon {
    Pokemon {
        id: Some(PokemonId::new(row.id)),
        name: row.name,
        category: row.category,
        level: row.level,
    }
}

#[async_trait]
impl PokemonRepository for DieselPokemonRepository {
    async fn find_all(&self) -> Result<Vec<Pokemon>, PokemonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PokemonRow> = pokemon::table
            .order(pokemon::id.asc())
            .select(PokemonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_pokemon).collect())
    }

    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, PokemonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = pokemon::table
            .filter(pokemon::id.eq(id.get()))
            .select(PokemonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_pokemon))
    }

    async fn save(&self, record: &Pokemon) -> Result<Pokemon, PokemonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = match record.id {
            None => {
                let new_row = NewPokemonRow {
                    name: &record.name,
                    category: &record.category,
                    level: record.level,
                };
                diesel::insert_into(pokemon::table)
                    .values(&new_row)
                    .returning(PokemonRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?
            }
            Some(id) => {
                let row = PokemonRowWithId {
                    id: id.get(),
                    name: &record.name,
                    category: &record.category,
                    level: record.level,
                };
                let changes = PokemonUpdate {
                    name: &record.name,
                    category: &record.category,
                    level: record.level,
                };
                diesel::insert_into(pokemon::table)
                    .values(&row)
                    .on_conflict(pokemon::id)
                    .do_update()
                    .set(&changes)
                    .returning(PokemonRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?
            }
        };

        debug!(pokemon_id = row.id, "pokemon row written");
        Ok(row_to_pokemon(row))
    }

    async fn delete_by_id(&self, id: PokemonId) -> Result<(), PokemonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(pokemon::table.filter(pokemon::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(pokemon_id = %id, removed, "pokemon delete executed");
        Ok(())
    }

    async fn exists_by_id(&self, id: PokemonId) -> Result<bool, PokemonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            pokemon::table.filter(pokemon::id.eq(id.get())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; queries are exercised against a live database
    //! only.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn row_to_pokemon_copies_every_column() {
        let row = PokemonRow {
            id: 25,
            name: "Pikachu".to_owned(),
            category: "Electric".to_owned(),
            level: 12,
        };

        let pokemon = row_to_pokemon(row);

        assert_eq!(pokemon.id, Some(PokemonId::new(25)));
        assert_eq!(pokemon.name, "Pikachu");
        assert_eq!(pokemon.category, "Electric");
        assert_eq!(pokemon.level, 12);
    }

    #[rstest]
    fn repository_is_cheap_to_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<DieselPokemonRepository>();
    }
}
