//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every Pokémon route, the health probes, and the
//! schema wrappers for the error envelope. The document is served by Swagger
//! UI in debug builds and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::pokemon::{PokemonPatchRequest, PokemonRequest, PokemonResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokédex API",
        description = "CRUD interface for Pokémon records plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::pokemon::list_pokemon,
        crate::inbound::http::pokemon::get_pokemon,
        crate::inbound::http::pokemon::create_pokemon,
        crate::inbound::http::pokemon::replace_pokemon,
        crate::inbound::http::pokemon::update_pokemon,
        crate::inbound::http::pokemon::delete_pokemon,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PokemonResponse,
        PokemonRequest,
        PokemonPatchRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "pokemon", description = "Pokémon record operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
