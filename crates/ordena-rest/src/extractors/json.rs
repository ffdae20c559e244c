//! JSON body extractor with the API's error envelope.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ordena_core::ErrorResponse;
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection uses the `{"message"}` envelope.
///
/// A body that fails to decode is a client error, reported as a flat 400
/// whose message echoes the decode reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T> std::ops::Deref for JsonBody<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for JSON body extraction.
pub struct JsonBodyRejection(JsonRejection);

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(format!("invalid JSON: {}", self.0)));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;

        Ok(JsonBody(value))
    }
}
