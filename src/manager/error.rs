//! Manager error types.

use thiserror::Error;

/// Caller misconfiguration detected by the manager.
///
/// A failed verification is never an error; this only covers asking the
/// manager to do something it was not set up for.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    /// `verify` was called for a scope with no registered verifier
    #[error("No verifier registered for scope '{scope}'")]
    MissingVerifier { scope: String },
}
