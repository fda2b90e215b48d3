//! Diagnostic messages derived from verification results.
//!
//! - `Message`: one entry tagged with scope, subject, id and level
//! - `MessageStack`: ordered, filterable collection of messages
//! - `MessageParser`: the seam that turns one scope's results into messages

mod message;
mod parser;
mod stack;

pub use message::{Message, MessageLevel};
pub use parser::{MessageParser, ResultsParser};
pub use stack::MessageStack;
