//! Internal Diesel row structs for the `pokemon` table.
//!
//! These types are implementation details of the persistence layer and never
//! leave it.

use diesel::prelude::*;

use super::schema::pokemon;

/// Row struct for reading from the pokemon table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pokemon)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PokemonRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub level: i32,
}

/// Insertable struct for rows whose id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pokemon)]
pub(crate) struct NewPokemonRow<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub level: i32,
}

/// Insertable struct for rows written under a caller-supplied id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pokemon)]
pub(crate) struct PokemonRowWithId<'a> {
    pub id: i64,
    pub name: &'a str,
    pub category: &'a str,
    pub level: i32,
}

/// Changeset applied when an upsert hits an existing id.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = pokemon)]
pub(crate) struct PokemonUpdate<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub level: i32,
}
