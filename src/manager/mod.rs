//! Scope-keyed verification manager.
//!
//! A [`DataManager`] holds two independent maps keyed by scope name, one of
//! verifiers and one of results, plus a message stack derived from the
//! results on demand.
//!
//! # Message staleness
//!
//! The message stack is built the first time it is read and then kept.
//! Later calls to [`DataManager::verify`] or [`DataManager::set_results`]
//! do not touch an already built stack. Read messages after every scope has
//! been verified, or call [`DataManager::rebuild_messages`].
//!
//! # Example
//!
//! ```rust
//! use multiscope::manager::DataManager;
//! use multiscope::profile;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let names = Arc::new(profile! { required: [name_first, name_last] }.unwrap());
//!
//! let mut manager = DataManager::new();
//! manager.set_verifier("name1", names.clone());
//! manager.set_verifier("name2", names);
//!
//! manager.verify("name1", &json!({"name_first": "Cory", "name_last": "Watson"})).unwrap();
//! manager.verify("name2", &json!({"name_first": "Cory"})).unwrap();
//!
//! assert!(!manager.success());
//! assert_eq!(manager.messages_for_scope("name2").count(), 1);
//! ```

mod builder;
mod error;

pub use builder::DataManagerBuilder;
pub use error::ConfigurationError;

use crate::checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
use crate::core::{Record, VerificationResults, Verifier};
use crate::messages::{MessageParser, MessageStack, ResultsParser};
use chrono::Utc;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Verifiers, their results, and the messages derived from them, by scope.
pub struct DataManager {
    verifiers: BTreeMap<String, Arc<dyn Verifier>>,
    results: BTreeMap<String, Arc<VerificationResults>>,
    messages: Option<MessageStack>,
    parser: Box<dyn MessageParser>,
}

impl DataManager {
    /// Create an empty manager using [`ResultsParser`] for messages.
    pub fn new() -> Self {
        Self::with_parser(ResultsParser::new())
    }

    /// Create an empty manager with a custom message parser.
    pub fn with_parser(parser: impl MessageParser + 'static) -> Self {
        Self {
            verifiers: BTreeMap::new(),
            results: BTreeMap::new(),
            messages: None,
            parser: Box::new(parser),
        }
    }

    /// Start a fluent builder
    pub fn builder() -> DataManagerBuilder {
        DataManagerBuilder::new()
    }

    /// Replace the message parser. An already built stack is kept as is.
    pub fn set_parser(&mut self, parser: impl MessageParser + 'static) {
        self.parser = Box::new(parser);
    }

    /// Register a verifier for `scope`, replacing any previous one.
    pub fn set_verifier(&mut self, scope: impl Into<String>, verifier: Arc<dyn Verifier>) {
        let scope = scope.into();
        trace!(scope = %scope, "registering verifier");
        self.verifiers.insert(scope, verifier);
    }

    /// Get the verifier registered for `scope`
    pub fn get_verifier(&self, scope: &str) -> Option<Arc<dyn Verifier>> {
        self.verifiers.get(scope).cloned()
    }

    /// Unregister the verifier for `scope`. Stored results are kept.
    pub fn remove_verifier(&mut self, scope: &str) -> Option<Arc<dyn Verifier>> {
        self.verifiers.remove(scope)
    }

    /// Scopes with a registered verifier, sorted.
    pub fn scopes(&self) -> Vec<&str> {
        self.verifiers.keys().map(String::as_str).collect()
    }

    /// Verify `data` with the verifier registered for `scope` and store the
    /// results under `scope`, replacing earlier results.
    ///
    /// A built message stack is left untouched.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MissingVerifier`] when no verifier is
    /// registered for `scope`.
    pub fn verify(
        &mut self,
        scope: &str,
        data: &Record,
    ) -> Result<Arc<VerificationResults>, ConfigurationError> {
        let Some(verifier) = self.verifiers.get(scope) else {
            warn!(scope, "verify called for scope without a verifier");
            return Err(ConfigurationError::MissingVerifier {
                scope: scope.to_string(),
            });
        };

        let results = Arc::new(verifier.verify(data));
        debug!(
            scope,
            success = results.success(),
            missing = results.missing_count(),
            invalid = results.invalid_count(),
            "verified scope"
        );

        self.results.insert(scope.to_string(), Arc::clone(&results));
        Ok(results)
    }

    /// Get the latest results stored for `scope`
    pub fn get_results(&self, scope: &str) -> Option<Arc<VerificationResults>> {
        self.results.get(scope).cloned()
    }

    /// Store results for `scope` directly, without a verifier.
    pub fn set_results(
        &mut self,
        scope: impl Into<String>,
        results: impl Into<Arc<VerificationResults>>,
    ) {
        let scope = scope.into();
        trace!(scope = %scope, "storing results");
        self.results.insert(scope, results.into());
    }

    /// Drop the results stored for `scope`. A built message stack is kept.
    pub fn remove_results(&mut self, scope: &str) -> Option<Arc<VerificationResults>> {
        self.results.remove(scope)
    }

    /// Scopes holding results, sorted.
    pub fn result_scopes(&self) -> Vec<&str> {
        self.results.keys().map(String::as_str).collect()
    }

    /// True when every stored result is successful. With no results, true.
    pub fn success(&self) -> bool {
        self.results.values().all(|results| results.success())
    }

    /// Messages for every scope holding results.
    ///
    /// Built on first call, then returned unchanged until
    /// [`rebuild_messages`](Self::rebuild_messages).
    pub fn messages(&mut self) -> &MessageStack {
        let Self {
            messages,
            parser,
            results,
            ..
        } = self;

        messages.get_or_insert_with(|| build_messages(&**parser, results))
    }

    /// Messages for one scope, filtered from [`messages`](Self::messages).
    pub fn messages_for_scope(&mut self, scope: &str) -> MessageStack {
        self.messages().for_scope(scope)
    }

    /// Discard the built stack and build it again from the current results.
    pub fn rebuild_messages(&mut self) -> &MessageStack {
        self.messages = None;
        self.messages()
    }

    /// Whether the message stack has been built.
    pub fn messages_built(&self) -> bool {
        self.messages.is_some()
    }

    /// Snapshot results and the built message stack. Verifiers are left out.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            results: self
                .results
                .iter()
                .map(|(scope, results)| (scope.clone(), (**results).clone()))
                .collect(),
            messages: self.messages.clone(),
        }
    }

    /// Restore a manager from a checkpoint.
    ///
    /// The restored manager has no verifiers and uses [`ResultsParser`];
    /// register verifiers again before calling [`verify`](Self::verify).
    ///
    /// # Errors
    ///
    /// Any error from [`Checkpoint::validate`], such as an unsupported
    /// version or results stored under an empty scope name.
    pub fn from_checkpoint(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        debug!(
            id = %checkpoint.id,
            scopes = checkpoint.results.len(),
            "restoring manager from checkpoint"
        );
        Ok(Self {
            verifiers: BTreeMap::new(),
            results: checkpoint
                .results
                .into_iter()
                .map(|(scope, results)| (scope, Arc::new(results)))
                .collect(),
            messages: checkpoint.messages,
            parser: Box::new(ResultsParser::new()),
        })
    }
}

fn build_messages(
    parser: &dyn MessageParser,
    results: &BTreeMap<String, Arc<VerificationResults>>,
) -> MessageStack {
    let mut stack = MessageStack::new();
    for (scope, scope_results) in results {
        parser.parse(&mut stack, scope, scope_results);
    }
    debug!(
        scopes = results.len(),
        messages = stack.count(),
        "built message stack"
    );
    stack
}

impl Default for DataManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DataManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataManager")
            .field("scopes", &self.scopes())
            .field("results", &self.results)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}
