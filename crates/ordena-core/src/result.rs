//! Result type aliases for Ordena.

use crate::OrdenaError;

/// A specialized `Result` type for Ordena operations.
pub type OrdenaResult<T> = Result<T, OrdenaError>;
