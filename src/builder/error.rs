//! Build errors for profile and manager builders.

use thiserror::Error;

/// Errors that can occur when building profiles and managers.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Field name is empty. Every field needs a non-empty name")]
    EmptyFieldName,

    #[error("Field '{field}' is declared more than once")]
    DuplicateField { field: String },

    #[error("Field '{field}' has min_length {min} greater than max_length {max}")]
    InvalidLengthBounds {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Scope name is empty. Call .verifier(scope, verifier) with a non-empty scope")]
    EmptyScope,
}
