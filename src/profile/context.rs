//! Context provided to field post-checks.

use crate::core::Record;
use serde_json::Value;

/// Context provided to post-checks
#[derive(Clone, Copy, Debug)]
pub struct FieldContext<'a> {
    /// Name of the field being checked, for checks shared between fields
    pub field: &'a str,
    /// Value after filters were applied
    pub value: &'a Value,
    /// The whole record, for checks that compare fields
    pub record: &'a Record,
}

impl<'a> FieldContext<'a> {
    /// Filtered value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    /// Raw value of another field in the same record.
    pub fn sibling(&self, field: &str) -> Option<&'a Value> {
        self.record.get(field)
    }
}
