//! Builder for constructing data managers.

use crate::builder::BuildError;
use crate::core::Verifier;
use crate::manager::DataManager;
use crate::messages::MessageParser;
use std::sync::Arc;

/// Builder for constructing data managers with a fluent API.
///
/// ```rust
/// use multiscope::manager::DataManager;
/// use multiscope::profile;
/// use std::sync::Arc;
///
/// let names = Arc::new(profile! { required: [name_first, name_last] }.unwrap());
///
/// let manager = DataManager::builder()
///     .verifier("billing_name", names.clone())
///     .verifier("shipping_name", names)
///     .build()
///     .unwrap();
///
/// assert_eq!(manager.scopes(), vec!["billing_name", "shipping_name"]);
/// ```
pub struct DataManagerBuilder {
    verifiers: Vec<(String, Arc<dyn Verifier>)>,
    parser: Option<Box<dyn MessageParser>>,
}

impl DataManagerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            verifiers: Vec::new(),
            parser: None,
        }
    }

    /// Register a verifier for a scope. Later registrations for the same
    /// scope win.
    pub fn verifier(mut self, scope: impl Into<String>, verifier: Arc<dyn Verifier>) -> Self {
        self.verifiers.push((scope.into(), verifier));
        self
    }

    /// Use a custom message parser instead of
    /// [`ResultsParser`](crate::messages::ResultsParser).
    pub fn parser(mut self, parser: impl MessageParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Build the manager.
    /// Returns an error if any scope name is empty.
    pub fn build(self) -> Result<DataManager, BuildError> {
        if self.verifiers.iter().any(|(scope, _)| scope.is_empty()) {
            return Err(BuildError::EmptyScope);
        }

        let mut manager = DataManager::new();
        if let Some(parser) = self.parser {
            manager.parser = parser;
        }

        for (scope, verifier) in self.verifiers {
            manager.set_verifier(scope, verifier);
        }

        Ok(manager)
    }
}

impl Default for DataManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
