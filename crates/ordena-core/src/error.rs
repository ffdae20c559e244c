//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for Ordena.
///
/// Covers domain, service, and infrastructure failures. Cache errors exist in
/// the taxonomy but are never surfaced past the service layer: every cache
/// failure either falls through to the store (reads) or is logged and dropped
/// (writes).
#[derive(Error, Debug)]
pub enum OrdenaError {
    // ============ Client Errors ============
    /// Malformed or non-conforming input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identifier not in the store's expected format.
    #[error("Invalid order ID format: {0}")]
    InvalidId(String),

    /// Valid identifier, no matching record.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ============ Infrastructure Errors ============
    /// Store unavailable or a write/read failed.
    #[error("Database error: {0}")]
    Database(String),

    /// A stored record failed to decode.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Cache unavailable or malformed cached value. Always non-fatal.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrdenaError {
    /// Returns the HTTP status code for this error.
    ///
    /// The observed contract collapses every client-visible failure kind,
    /// not-found and persistence failures included, to a flat 400. `NotFound`
    /// deliberately does not map to 404.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_)
            | Self::InvalidId(_)
            | Self::NotFound { .. }
            | Self::Database(_)
            | Self::Decoding(_) => 400,
            Self::Cache(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidId(_) => "INVALID_ID",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Decoding(_) => "DECODING_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the message exposed to API clients.
    ///
    /// Validation and identifier errors echo the underlying reason.
    /// Persistence and decoding failures return generic retry-suggesting text
    /// so internal store detail never leaks; the detail is logged instead.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) => format!("invalid input: {msg}"),
            Self::InvalidId(_) => "Invalid order ID format".to_string(),
            Self::NotFound { .. } => "Failed to fetch order".to_string(),
            Self::Database(_) => "Failed to process order, try again".to_string(),
            Self::Decoding(_) => "Error decoding orders".to_string(),
            Self::Cache(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an invalid-identifier error.
    #[must_use]
    pub fn invalid_id<T: Into<String>>(id: T) -> Self {
        Self::InvalidId(id.into())
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Cache(_))
    }
}

impl From<serde_json::Error> for OrdenaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decoding(format!("JSON serialization error: {err}"))
    }
}

/// Serializable error body for API responses.
///
/// The observed wire contract is a single-field envelope: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error body from an [`OrdenaError`] using its public message.
    #[must_use]
    pub fn from_error(error: &OrdenaError) -> Self {
        Self {
            message: error.public_message(),
        }
    }

    /// Creates an error body from a plain message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&OrdenaError> for ErrorResponse {
    fn from(error: &OrdenaError) -> Self {
        Self::from_error(error)
    }
}
