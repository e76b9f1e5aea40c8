//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the provisioned table exactly. The table is
//! created outside this crate:
//!
//! ```sql
//! CREATE TABLE pokemon (
//!     id       BIGSERIAL PRIMARY KEY,
//!     name     VARCHAR NOT NULL,
//!     category VARCHAR NOT NULL,
//!     level    INTEGER NOT NULL
//! );
//! ```

diesel::table! {
    /// Pokémon records keyed by a database-generated identifier.
    pokemon (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Display name; not unique.
        name -> Varchar,
        /// Elemental category.
        category -> Varchar,
        /// Experience level.
        level -> Int4,
    }
}
