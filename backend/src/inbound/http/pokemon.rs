//! Pokémon resource handlers.
//!
//! ```text
//! GET    /pokemon
//! GET    /pokemon/{id}
//! POST   /pokemon        {"name":"Pikachu","type":"Electric","level":5}
//! PUT    /pokemon/{id}   {"name":"Raichu","type":"Electric","level":0}
//! PATCH  /pokemon/{id}   {"level":12}
//! DELETE /pokemon/{id}
//! ```
//!
//! PUT overwrites every field, zero level included. PATCH only moves the
//! level when the new value is positive. Both, like GET-one and DELETE,
//! answer 404 for unknown ids.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, Pokemon, PokemonId, PokemonPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Pokémon representation returned by every read and write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PokemonResponse {
    /// Storage-assigned identifier.
    #[schema(example = 25)]
    pub id: Option<i64>,
    #[schema(example = "Pikachu")]
    pub name: String,
    /// Elemental type.
    #[serde(rename = "type")]
    #[schema(example = "Electric")]
    pub category: String,
    #[schema(example = 5)]
    pub level: i32,
}

impl From<Pokemon> for PokemonResponse {
    fn from(value: Pokemon) -> Self {
        Self {
            id: value.id.map(PokemonId::get),
            name: value.name,
            category: value.category,
            level: value.level,
        }
    }
}

/// Request body for `POST /pokemon` and `PUT /pokemon/{id}`.
///
/// An `id` in the body is accepted for compatibility and ignored; the path
/// or storage decides the identifier.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PokemonRequest {
    /// Ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[schema(example = "Pikachu")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "Electric")]
    pub category: String,
    /// Defaults to 0 when omitted.
    #[serde(default)]
    #[schema(example = 5)]
    pub level: i32,
}

impl From<PokemonRequest> for Pokemon {
    fn from(value: PokemonRequest) -> Self {
        Pokemon::new(value.name, value.category, value.level)
    }
}

/// Request body for `PATCH /pokemon/{id}`.
///
/// Omitted and `null` fields are left unchanged. A `level` of zero or below
/// is treated as omitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct PokemonPatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
}

impl From<PokemonPatchRequest> for PokemonPatch {
    fn from(value: PokemonPatchRequest) -> Self {
        Self {
            name: value.name,
            category: value.category,
            level: value.level,
        }
    }
}

fn not_found(id: PokemonId) -> Error {
    Error::not_found(format!("pokemon {id} not found")).with_details(json!({ "id": id.get() }))
}

/// List every stored Pokémon in ascending id order.
#[utoipa::path(
    get,
    path = "/pokemon",
    responses(
        (status = 200, description = "Stored records", body = [PokemonResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pokemon"],
    operation_id = "listPokemon"
)]
#[get("/pokemon")]
pub async fn list_pokemon(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PokemonResponse>>> {
    let records = state.pokemon_query.list_all().await?;
    Ok(web::Json(records.into_iter().map(PokemonResponse::from).collect()))
}

/// Fetch one Pokémon by id.
#[utoipa::path(
    get,
    path = "/pokemon/{id}",
    params(("id" = i64, Path, description = "Pokémon identifier")),
    responses(
        (status = 200, description = "Record found", body = PokemonResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No record with this id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pokemon"],
    operation_id = "getPokemon"
)]
#[get("/pokemon/{id}")]
pub async fn get_pokemon(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<PokemonResponse>> {
    let id = PokemonId::new(path.into_inner());
    let record = state
        .pokemon_query
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(web::Json(record.into()))
}

/// Create a Pokémon; storage assigns the id.
#[utoipa::path(
    post,
    path = "/pokemon",
    request_body = PokemonRequest,
    responses(
        (status = 201, description = "Record created", body = PokemonResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pokemon"],
    operation_id = "createPokemon"
)]
#[post("/pokemon")]
pub async fn create_pokemon(
    state: web::Data<HttpState>,
    payload: web::Json<PokemonRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    if let Some(ignored) = request.id {
        debug!(ignored_id = ignored, "client-supplied id dropped on create");
    }
    let saved = state.pokemon.save(request.into()).await?;
    Ok(HttpResponse::Created().json(PokemonResponse::from(saved)))
}

/// Replace every mutable field of an existing Pokémon.
#[utoipa::path(
    put,
    path = "/pokemon/{id}",
    params(("id" = i64, Path, description = "Pokémon identifier")),
    request_body = PokemonRequest,
    responses(
        (status = 200, description = "Record replaced", body = PokemonResponse),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 404, description = "No record with this id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pokemon"],
    operation_id = "replacePokemon"
)]
#[put("/pokemon/{id}")]
pub async fn replace_pokemon(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<PokemonRequest>,
) -> ApiResult<web::Json<PokemonResponse>> {
    let id = PokemonId::new(path.into_inner());
    if !state.pokemon_query.exists_by_id(id).await? {
        return Err(not_found(id));
    }

    // The record may have been deleted since the existence check.
    let Some(mut current) = state.pokemon_query.find_by_id(id).await? else {
        return Err(not_found(id));
    };
    current.replace_fields(payload.into_inner().into());

    let saved = state.pokemon.save(current).await?;
    Ok(web::Json(saved.into()))
}

/// Merge the provided fields into an existing Pokémon.
#[utoipa::path(
    patch,
    path = "/pokemon/{id}",
    params(("id" = i64, Path, description = "Pokémon identifier")),
    request_body = PokemonPatchRequest,
    responses(
        (status = 200, description = "Record updated", body = PokemonResponse),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 404, description = "No record with this id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pokemon"],
    operation_id = "updatePokemon"
)]
#[patch("/pokemon/{id}")]
pub async fn update_pokemon(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<PokemonPatchRequest>,
) -> ApiResult<web::Json<PokemonResponse>> {
    let id = PokemonId::new(path.into_inner());
    let updated = state
        .pokemon
        .partial_update(id, payload.into_inner().into())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(web::Json(updated.into()))
}

/// Delete a Pokémon.
#[utoipa::path(
    delete,
    path = "/pokemon/{id}",
    params(("id" = i64, Path, description = "Pokémon identifier")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No record with this id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pokemon"],
    operation_id = "deletePokemon"
)]
#[delete("/pokemon/{id}")]
pub async fn delete_pokemon(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = PokemonId::new(path.into_inner());
    if !state.pokemon_query.exists_by_id(id).await? {
        return Err(not_found(id));
    }
    state.pokemon.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register every Pokémon route on a service config.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use pokedex::inbound::http::pokemon::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_pokemon)
        .service(get_pokemon)
        .service(create_pokemon)
        .service(replace_pokemon)
        .service(update_pokemon)
        .service(delete_pokemon);
}

#[cfg(test)]
#[path = "pokemon_tests.rs"]
mod tests;
