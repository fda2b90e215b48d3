//! Turning verification results into messages.

use super::message::{Message, MessageLevel};
use super::stack::MessageStack;
use crate::core::{FieldOutcome, VerificationResults};

/// Appends messages describing one scope's results to a stack.
pub trait MessageParser: Send + Sync {
    fn parse(&self, stack: &mut MessageStack, scope: &str, results: &VerificationResults);
}

/// Default parser.
///
/// Per scope, adds one message per missing field (`missing_<field>`),
/// followed by one per invalid field (`invalid_<field>`) whose params are
/// the violation codes. Valid fields produce nothing.
///
/// # Example
///
/// ```rust
/// use multiscope::core::{FieldOutcome, VerificationResults};
/// use multiscope::messages::{MessageParser, MessageStack, ResultsParser};
///
/// let mut results = VerificationResults::new();
/// results.insert("name_last", FieldOutcome::Missing);
///
/// let mut stack = MessageStack::new();
/// ResultsParser::new().parse(&mut stack, "name1", &results);
///
/// assert_eq!(stack.count(), 1);
/// assert_eq!(stack.first().map(|m| m.id.as_str()), Some("missing_name_last"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsParser {
    level: MessageLevel,
}

impl ResultsParser {
    pub fn new() -> Self {
        Self {
            level: MessageLevel::Error,
        }
    }

    /// Level given to every produced message.
    pub fn with_level(level: MessageLevel) -> Self {
        Self { level }
    }
}

impl Default for ResultsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageParser for ResultsParser {
    fn parse(&self, stack: &mut MessageStack, scope: &str, results: &VerificationResults) {
        for field in results.missings() {
            stack.add(Message::new(
                scope,
                field,
                format!("missing_{field}"),
                self.level,
            ));
        }

        for (field, outcome) in results.fields() {
            if let FieldOutcome::Invalid { reasons, .. } = outcome {
                let message = Message::new(scope, field, format!("invalid_{field}"), self.level)
                    .with_params(reasons.iter().map(|r| r.code().to_string()));
                stack.add(message);
            }
        }
    }
}
