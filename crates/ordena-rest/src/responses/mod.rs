//! API response types.
//!
//! The wire contract: success bodies are the payload itself, failures are a
//! single-field `{"message": "..."}` envelope. Every client-visible failure
//! kind maps to the same flat 400 status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ordena_core::{ErrorResponse, OrdenaError};
use tracing::error;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub OrdenaError);

impl From<OrdenaError> for AppError {
    fn from(err: OrdenaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The internal detail goes to the log; the client sees the public
        // message only.
        error!("Request failed: {}", self.0);

        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(ErrorResponse::from_error(&self.0));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: serde::Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: serde::Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_flat_400() {
        let response = AppError(OrdenaError::not_found("Order", "abc")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_maps_to_flat_400() {
        let response = AppError(OrdenaError::database("down")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let response = AppError(OrdenaError::internal("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
