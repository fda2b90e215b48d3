//! Profile-based field verification.
//!
//! A [`Profile`] is a bundled [`Verifier`](crate::core::Verifier): a set of
//! named fields, each with a [`FieldRule`]. Rules use Stillwater's
//! `Validation` to accumulate ALL violations of a field instead of stopping
//! at the first one.
//!
//! Per field, verification goes:
//! 1. absent, `null`, or empty after filters: `Missing` when required,
//!    otherwise not recorded
//! 2. kind, length and post-checks, all run: `Invalid` with every reason,
//!    or `Valid` with the filtered value
//! 3. dependents of a valid field are verified the same way
//!
//! # Example
//!
//! ```rust
//! use multiscope::core::Verifier;
//! use multiscope::profile::{FieldRule, Filter, ProfileBuilder};
//! use serde_json::json;
//!
//! let profile = ProfileBuilder::new()
//!     .required("name_first")
//!     .field("name_last", FieldRule::required().filter(Filter::Trim).min_length(2))
//!     .build()
//!     .unwrap();
//!
//! let results = profile.verify(&json!({"name_first": "Cory", "name_last": " W "}));
//! assert!(results.is_invalid("name_last"));
//! ```

pub mod builder;
pub mod context;
pub mod macros;
pub mod rules;

// Re-export commonly used types
pub use builder::ProfileBuilder;
pub use context::FieldContext;
pub use rules::{FieldCheck, FieldRule, Filter, Profile, ValueKind};
