//! Extractor configuration for inbound HTTP adapters.
//!
//! Actix rejects malformed paths and bodies before a handler runs. These
//! handlers turn those rejections into the shared error envelope so clients
//! always receive `invalid_request` JSON instead of a plain-text 400.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Maximum accepted JSON body size in bytes.
pub const MAX_JSON_PAYLOAD: usize = 16 * 1024;

fn reject_json(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected request body");
    Error::invalid_request("request body is not a valid pokemon payload")
        .with_details(json!({
            "code": "invalid_json",
            "reason": err.to_string(),
        }))
        .into()
}

fn reject_path(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected path parameters");
    Error::invalid_request("path identifier must be an integer")
        .with_details(json!({
            "code": "invalid_path",
            "reason": err.to_string(),
        }))
        .into()
}

/// JSON extractor configuration with enveloped errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(reject_json)
}

/// Path extractor configuration with enveloped errors.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(reject_path)
}
