//! Multiscope: verify independent groups of input under named scopes
//!
//! A form with several logical groups of fields (a billing name, a shipping
//! address, ...) is verified one group at a time, each under its own scope.
//! A [`DataManager`] keeps the verifier and the latest results of every
//! scope, answers whether everything succeeded, and derives one ordered stack
//! of diagnostic messages across all scopes.
//!
//! # Core Concepts
//!
//! - **Verifier**: anything implementing [`Verifier`]; [`Profile`] is the
//!   bundled field-rule verifier
//! - **Results**: per-field outcomes of one verification
//! - **Messages**: diagnostics parsed from results, filterable by scope,
//!   subject and level
//! - **Checkpoint**: serializable snapshot of results and messages
//!
//! Messages are built lazily on first read and are not refreshed by later
//! verification; see [`manager`] for the details.
//!
//! # Example
//!
//! ```rust
//! use multiscope::{profile, DataManager};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let names = Arc::new(profile! { required: [name_first, name_last] }.unwrap());
//!
//! let mut manager = DataManager::builder()
//!     .verifier("name1", names)
//!     .build()
//!     .unwrap();
//!
//! let results = manager.verify("name1", &json!({"name_first": "Cory"})).unwrap();
//! assert!(!results.success());
//!
//! let messages = manager.messages_for_scope("name1");
//! assert_eq!(messages.count(), 1);
//! assert!(messages.for_subject("name_last").has_messages());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod manager;
pub mod messages;
pub mod profile;

// Re-export commonly used types
pub use builder::BuildError;
pub use checkpoint::{Checkpoint, CheckpointError};
pub use self::core::{FieldOutcome, Record, VerificationResults, Verifier, VerifierFn};
pub use manager::{ConfigurationError, DataManager, DataManagerBuilder};
pub use messages::{Message, MessageLevel, MessageParser, MessageStack, ResultsParser};
pub use profile::{FieldRule, Profile, ProfileBuilder};
