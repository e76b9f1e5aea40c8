//! Translation of pool and Diesel failures into Pokémon persistence errors.
//!
//! Raw driver messages are logged at `debug` and replaced with fixed strings
//! so database internals never reach the domain.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::PokemonPersistenceError;

use super::pool::PoolError;

/// Map pool errors to connection failures.
pub(crate) fn map_pool_error(error: PoolError) -> PokemonPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PokemonPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to query or connection failures.
pub(crate) fn map_diesel_error(error: DieselError) -> PokemonPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => PokemonPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            PokemonPersistenceError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PokemonPersistenceError::connection("database connection error")
        }
        _ => PokemonPersistenceError::query("database error"),
    }
}
