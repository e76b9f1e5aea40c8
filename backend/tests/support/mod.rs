//! Shared helpers for integration tests that need a real PostgreSQL.

pub mod pg_embed;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// Table layout expected by the Diesel schema.
const POKEMON_DDL: &str = "CREATE TABLE pokemon (
    id       BIGSERIAL PRIMARY KEY,
    name     VARCHAR NOT NULL,
    category VARCHAR NOT NULL,
    level    INTEGER NOT NULL
);";

/// Render a `postgres` error with its SQLSTATE and server message.
///
/// The `Display` impl collapses database errors to `db error`, which is
/// useless in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Drop and recreate `name`, then create the `pokemon` table inside it.
///
/// Returns the connection URL of the fresh database.
pub fn provision_pokemon_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut admin = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    admin
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\"; CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))?;

    let url = cluster.connection().database_url(name);
    let mut client = Client::connect(&url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(POKEMON_DDL)
        .map_err(|err| format_postgres_error(&err))?;
    Ok(url)
}

fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when `SKIP_TEST_CLUSTER` is truthy, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
