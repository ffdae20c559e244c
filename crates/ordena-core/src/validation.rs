//! Validation utilities.

use crate::OrdenaError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `OrdenaError` on failure.
    fn validate_request(&self) -> Result<(), OrdenaError> {
        self.validate().map_err(validation_errors_to_ordena_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `OrdenaError::Validation`.
///
/// The resulting message lists every failing field with its reason so the
/// client sees what was rejected.
#[must_use]
pub fn validation_errors_to_ordena_error(errors: ValidationErrors) -> OrdenaError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let reason = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{field}: {reason}")
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    OrdenaError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestRequest {
        #[validate(length(min = 3, message = "must be at least 3 characters"))]
        name: String,
    }

    #[test]
    fn test_valid_request_passes() {
        let req = TestRequest {
            name: "abc".to_string(),
        };
        assert!(req.validate_request().is_ok());
    }

    #[test]
    fn test_invalid_request_echoes_field_and_reason() {
        let req = TestRequest {
            name: "ab".to_string(),
        };
        let err = req.validate_request().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("at least 3 characters"));
    }
}
