//! Core verification types.
//!
//! This module contains the plain-data side of verification:
//! - The `Verifier` trait every scope's verifier implements
//! - Per-field `VerificationResults`
//! - `FieldViolation` reasons attached to invalid fields

mod results;
mod verifier;
mod violations;

pub use results::{FieldFailure, FieldOutcome, VerificationResults};
pub use verifier::{Record, Verifier, VerifierFn};
pub use violations::FieldViolation;
