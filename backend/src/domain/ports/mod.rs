//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod pokemon_command;
mod pokemon_query;
mod pokemon_repository;

#[cfg(test)]
pub use pokemon_command::MockPokemonCommand;
pub use pokemon_command::PokemonCommand;
#[cfg(test)]
pub use pokemon_query::MockPokemonQuery;
pub use pokemon_query::PokemonQuery;
#[cfg(test)]
pub use pokemon_repository::MockPokemonRepository;
pub use pokemon_repository::{PokemonPersistenceError, PokemonRepository};
