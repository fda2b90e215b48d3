//! Ordered collection of messages with scope/subject/level filters.

use super::message::{Message, MessageLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered stack of [`Message`]s.
///
/// Filters (`for_scope`, `for_subject`, ...) return new stacks and keep the
/// original order, so they can be chained.
///
/// # Example
///
/// ```rust
/// use multiscope::messages::{Message, MessageStack};
///
/// let mut stack = MessageStack::new();
/// stack.add(Message::error("name1", "name_last", "missing_name_last"));
/// stack.add(Message::error("name2", "name_first", "missing_name_first"));
///
/// let name1 = stack.for_scope("name1");
/// assert_eq!(name1.count(), 1);
/// assert!(name1.for_subject("name_last").has_messages());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageStack {
    messages: Vec<Message>,
}

impl MessageStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_messages(&self) -> bool {
        !self.is_empty()
    }

    pub fn first(&self) -> Option<&Message> {
        self.messages.first()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    pub fn for_scope(&self, scope: &str) -> MessageStack {
        self.filtered(|m| m.scope == scope)
    }

    pub fn for_subject(&self, subject: &str) -> MessageStack {
        self.filtered(|m| m.subject == subject)
    }

    pub fn for_level(&self, level: MessageLevel) -> MessageStack {
        self.filtered(|m| m.level == level)
    }

    pub fn for_id(&self, id: &str) -> MessageStack {
        self.filtered(|m| m.id == id)
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.messages.iter().any(|m| m.scope == scope)
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.messages.iter().any(|m| m.subject == subject)
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }

    /// Distinct scopes that have at least one message, sorted.
    pub fn scopes(&self) -> Vec<&str> {
        self.messages
            .iter()
            .map(|m| m.scope.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Drop every message for `scope`, returning how many were removed.
    pub fn reset_scope(&mut self, scope: &str) -> usize {
        let before = self.messages.len();
        self.messages.retain(|m| m.scope != scope);
        before - self.messages.len()
    }

    pub fn reset(&mut self) {
        self.messages.clear();
    }

    fn filtered(&self, predicate: impl Fn(&Message) -> bool) -> MessageStack {
        MessageStack {
            messages: self
                .messages
                .iter()
                .filter(|m| predicate(*m))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MessageStack {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl Extend<Message> for MessageStack {
    fn extend<T: IntoIterator<Item = Message>>(&mut self, iter: T) {
        self.messages.extend(iter);
    }
}

impl FromIterator<Message> for MessageStack {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        MessageStack {
            messages: iter.into_iter().collect(),
        }
    }
}
