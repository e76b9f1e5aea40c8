//! Server settings loaded via OrthoConfig.
//!
//! Values come from `POKEDEX_*` environment variables, command-line flags, or
//! a configuration file. Port and pool size carry derive-level defaults; the
//! host falls back through its accessor.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener and storage settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "POKEDEX")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL connection URL. Records are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Address tuple accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }

    /// Pool settings, present only when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().filter(|url| !url.trim().is_empty())?;
        Some(
            PoolConfig::new(url).with_max_size(self.db_max_connections),
        )
    }
}
