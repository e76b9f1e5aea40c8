//! Builders for the HTTP state from the configured storage adapter.

use std::sync::Arc;

use tracing::info;

use crate::domain::PokemonService;
use crate::domain::ports::PokemonRepository;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryPokemonRepository;
use crate::outbound::persistence::{DbPool, DieselPokemonRepository, PoolError};

use super::ServerSettings;

/// Wrap `repository` in a [`PokemonService`] serving both driving ports.
pub fn http_state_for<R>(repository: R) -> HttpState
where
    R: PokemonRepository + 'static,
{
    let service = Arc::new(PokemonService::new(Arc::new(repository)));
    HttpState::new(service.clone(), service)
}

/// HTTP state backed by a fresh in-memory store.
pub fn in_memory_http_state() -> HttpState {
    http_state_for(InMemoryPokemonRepository::new())
}

/// Build the HTTP state for `settings`.
///
/// Opens a PostgreSQL pool when a database URL is configured; otherwise the
/// records live in memory for the lifetime of the process.
///
/// # Errors
/// Returns [`PoolError`] when the pool cannot be built.
pub async fn build_http_state(settings: &ServerSettings) -> Result<HttpState, PoolError> {
    match settings.pool_config() {
        Some(config) => {
            info!(max_connections = config.max_size(), "using PostgreSQL storage");
            let pool = DbPool::new(config).await?;
            Ok(http_state_for(DieselPokemonRepository::new(pool)))
        }
        None => {
            info!("no database configured; using in-memory storage");
            Ok(in_memory_http_state())
        }
    }
}
