//! Backend entry-point: loads settings, picks the storage adapter, and serves
//! the REST API.

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pokedex::inbound::http::health::HealthState;
use pokedex::server::{ServerSettings, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let http_state = build_http_state(&settings)
        .await
        .map_err(|err| io::Error::other(format!("failed to initialise storage: {err}")))?;

    let bind_addr = settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, bind_addr.clone())?;
    info!(host = %bind_addr.0, port = bind_addr.1, "pokedex listening");

    server.await
}
