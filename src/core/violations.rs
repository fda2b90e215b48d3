//! Field violations produced when a present value fails its rule.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a present field value was rejected.
///
/// Every violation carries a short machine code (see [`FieldViolation::code`])
/// that message parsers attach to diagnostics as a parameter.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum FieldViolation {
    #[error("Expected a value of kind {expected}, found {found}")]
    WrongKind { expected: String, found: String },

    #[error("Length {actual} is below the minimum of {min}")]
    TooShort { min: usize, actual: usize },

    #[error("Length {actual} exceeds the maximum of {max}")]
    TooLong { max: usize, actual: usize },

    #[error("Custom check failed: {code}")]
    CustomCheckFailed { code: String },
}

impl FieldViolation {
    /// Machine-readable code for this violation.
    pub fn code(&self) -> &str {
        match self {
            Self::WrongKind { .. } => "wrong_kind",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::CustomCheckFailed { code } => code,
        }
    }
}
