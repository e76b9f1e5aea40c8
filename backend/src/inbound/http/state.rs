//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PokemonCommand, PokemonQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub pokemon: Arc<dyn PokemonCommand>,
    pub pokemon_query: Arc<dyn PokemonQuery>,
}

impl HttpState {
    /// Construct state from the Pokémon ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use pokedex::domain::PokemonService;
    /// use pokedex::inbound::http::state::HttpState;
    /// use pokedex::outbound::memory::InMemoryPokemonRepository;
    ///
    /// let service = Arc::new(PokemonService::new(Arc::new(InMemoryPokemonRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.pokemon_query.clone();
    /// ```
    pub fn new(pokemon: Arc<dyn PokemonCommand>, pokemon_query: Arc<dyn PokemonQuery>) -> Self {
        Self {
            pokemon,
            pokemon_query,
        }
    }
}
