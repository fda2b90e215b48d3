//! A single diagnostic message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    Error,
    Warning,
    Info,
}

impl MessageLevel {
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One diagnostic entry, tagged with the scope it came from and the
/// subject (usually a field name) it is about.
///
/// `id` is a message identifier meant for lookup in a localization table,
/// not display text.
///
/// # Example
///
/// ```rust
/// use multiscope::messages::{Message, MessageLevel};
///
/// let message = Message::error("name1", "name_last", "missing_name_last");
/// assert_eq!(message.level, MessageLevel::Error);
/// assert_eq!(message.to_string(), "[error] name1.name_last: missing_name_last");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub scope: String,
    pub subject: String,
    pub id: String,
    pub level: MessageLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl Message {
    pub fn new(
        scope: impl Into<String>,
        subject: impl Into<String>,
        id: impl Into<String>,
        level: MessageLevel,
    ) -> Self {
        Self {
            scope: scope.into(),
            subject: subject.into(),
            id: id.into(),
            level,
            params: Vec::new(),
        }
    }

    pub fn error(
        scope: impl Into<String>,
        subject: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self::new(scope, subject, id, MessageLevel::Error)
    }

    /// Attach parameters, replacing any already present.
    pub fn with_params<I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}.{}: {}",
            self.level, self.scope, self.subject, self.id
        )?;
        if !self.params.is_empty() {
            write!(f, " ({})", self.params.join(", "))?;
        }
        Ok(())
    }
}
