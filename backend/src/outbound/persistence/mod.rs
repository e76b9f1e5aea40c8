//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the Diesel implementation of the `PokemonRepository` port, with
//! async support through `diesel-async` and `bb8` connection pooling.
//!
//! Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//! private to this module. Database failures are mapped to
//! `PokemonPersistenceError` before they leave it.
//!
//! # Example
//!
//! ```ignore
//! use pokedex::outbound::persistence::{DbPool, DieselPokemonRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/pokedex");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselPokemonRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_pokemon_repository;
mod models;
mod pool;
mod schema;

pub use diesel_pokemon_repository::DieselPokemonRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
