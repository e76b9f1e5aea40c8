//! Turns domain errors into JSON error envelopes for the Pokémon endpoints.
//!
//! Storage failures surface as 503 (connection lost) or 500 (anything else).
//! A 500 body never carries the underlying storage message; the trace id is
//! the only link back to the logged cause.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias returned by the Pokémon handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The envelope a client is allowed to see.
///
/// Internal errors lose their message and details but keep the trace id.
fn client_view(err: &Error) -> Error {
    if err.code() != ErrorCode::InternalError {
        return err.clone();
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    match err.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => {
                error!(
                    message = self.message(),
                    trace_id = ?self.trace_id(),
                    "pokemon request failed"
                );
            }
            ErrorCode::ServiceUnavailable => {
                warn!(
                    message = self.message(),
                    trace_id = ?self.trace_id(),
                    "pokemon storage unavailable"
                );
            }
            ErrorCode::InvalidRequest | ErrorCode::NotFound => {}
        }

        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(client_view(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}
