//! The verifier seam.
//!
//! A verifier checks one data record and produces [`VerificationResults`].
//! The manager never looks inside a verifier; it only stores and invokes it.

use super::results::VerificationResults;
use serde_json::Value;

/// A data record handed to a verifier. Expected to be a JSON object.
pub type Record = Value;

/// Anything that can verify a record.
///
/// Verifiers are shared between scopes through `Arc`, so they must be
/// `Send + Sync` and take `&self`.
///
/// # Example
///
/// ```rust
/// use multiscope::core::{FieldOutcome, Record, VerificationResults, Verifier};
/// use serde_json::json;
///
/// struct NonEmpty;
///
/// impl Verifier for NonEmpty {
///     fn verify(&self, data: &Record) -> VerificationResults {
///         let mut results = VerificationResults::new();
///         match data.get("name") {
///             Some(value) => results.insert("name", FieldOutcome::Valid {
///                 value: value.clone(),
///                 original: value.clone(),
///             }),
///             None => results.insert("name", FieldOutcome::Missing),
///         }
///         results
///     }
/// }
///
/// assert!(NonEmpty.verify(&json!({"name": "x"})).success());
/// assert!(!NonEmpty.verify(&json!({})).success());
/// ```
pub trait Verifier: Send + Sync {
    fn verify(&self, data: &Record) -> VerificationResults;
}

/// Adapts a closure into a [`Verifier`].
///
/// ```rust
/// use multiscope::core::{VerificationResults, Verifier, VerifierFn};
/// use serde_json::json;
///
/// let always_ok = VerifierFn::new(|_data| VerificationResults::new());
/// assert!(always_ok.verify(&json!({})).success());
/// ```
pub struct VerifierFn {
    verify: Box<dyn Fn(&Record) -> VerificationResults + Send + Sync>,
}

impl VerifierFn {
    pub fn new<F>(verify: F) -> Self
    where
        F: Fn(&Record) -> VerificationResults + Send + Sync + 'static,
    {
        VerifierFn {
            verify: Box::new(verify),
        }
    }
}

impl Verifier for VerifierFn {
    fn verify(&self, data: &Record) -> VerificationResults {
        (self.verify)(data)
    }
}
