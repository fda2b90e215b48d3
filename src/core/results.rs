//! Per-field verification results.
//!
//! A [`VerificationResults`] is what a [`Verifier`](super::Verifier) hands
//! back for one record: an ordered map from field name to [`FieldOutcome`].
//! Results are plain data; a failed verification is a normal outcome, not an
//! error.

use super::violations::FieldViolation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Outcome of verifying a single field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldOutcome {
    /// The field passed every check. `value` is the filtered value.
    Valid { value: Value, original: Value },

    /// The field was present but failed one or more checks.
    Invalid {
        value: Value,
        original: Value,
        reasons: Vec<FieldViolation>,
    },

    /// A required field was absent, null, or empty.
    Missing,
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// A single failing field, as seen through [`VerificationResults::into_validation`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldFailure {
    #[error("Field '{field}' is missing")]
    Missing { field: String },

    #[error("Field '{field}' is invalid ({} violation(s))", .reasons.len())]
    Invalid {
        field: String,
        reasons: Vec<FieldViolation>,
    },
}

/// Results of verifying one record, keyed by field name.
///
/// # Example
///
/// ```rust
/// use multiscope::core::{FieldOutcome, VerificationResults};
/// use serde_json::json;
///
/// let mut results = VerificationResults::new();
/// results.insert("name_first", FieldOutcome::Valid {
///     value: json!("Cory"),
///     original: json!(" Cory "),
/// });
/// results.insert("name_last", FieldOutcome::Missing);
///
/// assert!(!results.success());
/// assert_eq!(results.get_value("name_first"), Some(&json!("Cory")));
/// assert_eq!(results.missings(), vec!["name_last"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationResults {
    fields: BTreeMap<String, FieldOutcome>,
}

impl VerificationResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is invalid or missing.
    ///
    /// Results with no recorded fields are successful.
    pub fn success(&self) -> bool {
        self.fields
            .values()
            .all(|outcome| !outcome.is_invalid() && !outcome.is_missing())
    }

    /// Record (or replace) the outcome for a field.
    pub fn insert(&mut self, field: impl Into<String>, outcome: FieldOutcome) {
        self.fields.insert(field.into(), outcome);
    }

    /// Forget a field entirely, returning its outcome.
    pub fn delete(&mut self, field: &str) -> Option<FieldOutcome> {
        self.fields.remove(field)
    }

    /// Fold another set of results into this one. Outcomes in `other` win.
    pub fn merge(&mut self, other: VerificationResults) {
        self.fields.extend(other.fields);
    }

    pub fn outcome(&self, field: &str) -> Option<&FieldOutcome> {
        self.fields.get(field)
    }

    pub fn is_valid(&self, field: &str) -> bool {
        self.outcome(field).is_some_and(FieldOutcome::is_valid)
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.outcome(field).is_some_and(FieldOutcome::is_invalid)
    }

    pub fn is_missing(&self, field: &str) -> bool {
        self.outcome(field).is_some_and(FieldOutcome::is_missing)
    }

    /// Filtered value of a valid field. Invalid and missing fields yield `None`.
    pub fn get_value(&self, field: &str) -> Option<&Value> {
        match self.outcome(field)? {
            FieldOutcome::Valid { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Value as it appeared in the record, before filters, for any present field.
    pub fn get_original_value(&self, field: &str) -> Option<&Value> {
        match self.outcome(field)? {
            FieldOutcome::Valid { original, .. } | FieldOutcome::Invalid { original, .. } => {
                Some(original)
            }
            FieldOutcome::Missing => None,
        }
    }

    /// Violations recorded against an invalid field.
    pub fn reasons(&self, field: &str) -> &[FieldViolation] {
        match self.outcome(field) {
            Some(FieldOutcome::Invalid { reasons, .. }) => reasons,
            _ => &[],
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldOutcome)> {
        self.fields.iter().map(|(name, outcome)| (name.as_str(), outcome))
    }

    pub fn valids(&self) -> Vec<&str> {
        self.names_where(FieldOutcome::is_valid)
    }

    pub fn invalids(&self) -> Vec<&str> {
        self.names_where(FieldOutcome::is_invalid)
    }

    pub fn missings(&self) -> Vec<&str> {
        self.names_where(FieldOutcome::is_missing)
    }

    pub fn valid_count(&self) -> usize {
        self.valids().len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalids().len()
    }

    pub fn missing_count(&self) -> usize {
        self.missings().len()
    }

    /// View the results as a `Validation`, accumulating every failing field.
    ///
    /// On success the valid field values are returned keyed by name.
    pub fn into_validation(
        self,
    ) -> Validation<BTreeMap<String, Value>, NonEmptyVec<FieldFailure>> {
        let mut checks: Vec<Validation<Option<(String, Value)>, NonEmptyVec<FieldFailure>>> =
            Vec::new();

        for (field, outcome) in self.fields {
            let check = match outcome {
                FieldOutcome::Valid { value, .. } => Validation::success(Some((field, value))),
                FieldOutcome::Invalid { reasons, .. } => {
                    Validation::fail(FieldFailure::Invalid { field, reasons })
                }
                FieldOutcome::Missing => Validation::fail(FieldFailure::Missing { field }),
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|pairs| pairs.into_iter().flatten().collect())
    }

    fn names_where(&self, predicate: impl Fn(&FieldOutcome) -> bool) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, outcome)| predicate(*outcome))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> VerificationResults {
        let mut results = VerificationResults::new();
        results.insert(
            "name_first",
            FieldOutcome::Valid {
                value: json!("Cory"),
                original: json!("  Cory"),
            },
        );
        results.insert(
            "age",
            FieldOutcome::Invalid {
                value: json!("x"),
                original: json!("x"),
                reasons: vec![FieldViolation::WrongKind {
                    expected: "number".to_string(),
                    found: "string".to_string(),
                }],
            },
        );
        results.insert("name_last", FieldOutcome::Missing);
        results
    }

    #[test]
    fn empty_results_are_successful() {
        assert!(VerificationResults::new().success());
    }

    #[test]
    fn classification_accessors() {
        let results = sample();

        assert!(!results.success());
        assert_eq!(results.valids(), vec!["name_first"]);
        assert_eq!(results.invalids(), vec!["age"]);
        assert_eq!(results.missings(), vec!["name_last"]);
        assert_eq!(results.valid_count(), 1);
        assert_eq!(results.invalid_count(), 1);
        assert_eq!(results.missing_count(), 1);

        assert!(results.is_valid("name_first"));
        assert!(results.is_invalid("age"));
        assert!(results.is_missing("name_last"));
        assert!(!results.is_valid("unknown"));
    }

    #[test]
    fn values_and_originals() {
        let results = sample();

        assert_eq!(results.get_value("name_first"), Some(&json!("Cory")));
        assert_eq!(
            results.get_original_value("name_first"),
            Some(&json!("  Cory"))
        );
        assert_eq!(results.get_value("age"), None);
        assert_eq!(results.get_original_value("age"), Some(&json!("x")));
        assert_eq!(results.get_original_value("name_last"), None);
        assert_eq!(results.reasons("age").len(), 1);
        assert!(results.reasons("name_first").is_empty());
    }

    #[test]
    fn delete_and_merge() {
        let mut results = sample();
        assert_eq!(results.delete("name_last"), Some(FieldOutcome::Missing));
        assert_eq!(results.delete("age").map(|o| o.is_invalid()), Some(true));
        assert!(results.success());

        let mut other = VerificationResults::new();
        other.insert("name_first", FieldOutcome::Missing);
        results.merge(other);
        assert!(results.is_missing("name_first"));
    }

    #[test]
    fn into_validation_accumulates_all_failures() {
        match sample().into_validation() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, FieldFailure::Missing { field } if field == "name_last")));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, FieldFailure::Invalid { field, .. } if field == "age")));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn into_validation_returns_valid_values() {
        let mut results = sample();
        results.delete("age");
        results.delete("name_last");

        match results.into_validation() {
            Validation::Success(values) => {
                assert_eq!(values.get("name_first"), Some(&json!("Cory")));
            }
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn results_serialize_round_trip() {
        let results = sample();
        let json = serde_json::to_string(&results).unwrap();
        let back: VerificationResults = serde_json::from_str(&json).unwrap();
        assert_eq!(results, back);
    }
}
