//! Translation of store failures into HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::DomainError;

/// Plain-text 500 for a store failure that the handler has no specific mapping for
pub fn store_error(e: DomainError) -> Response {
    tracing::error!("Store operation failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}
