//! Field rules and the profile verifier, using Validation to accumulate
//! every violation of a field.

use crate::core::{FieldOutcome, FieldViolation, Record, VerificationResults, Verifier};
use crate::profile::context::FieldContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for post-check functions
pub type FieldCheck =
    Box<dyn Fn(&FieldContext<'_>) -> Validation<(), NonEmptyVec<FieldViolation>> + Send + Sync>;

/// String transformations applied before a field is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Strip leading and trailing whitespace
    Trim,
    /// Replace runs of whitespace with a single space
    Collapse,
    Lower,
    Upper,
}

impl Filter {
    fn apply_str(self, input: &str) -> String {
        match self {
            Self::Trim => input.trim().to_string(),
            Self::Collapse => input.split_whitespace().collect::<Vec<_>>().join(" "),
            Self::Lower => input.to_lowercase(),
            Self::Upper => input.to_uppercase(),
        }
    }

    /// Apply to a value. Strings are transformed, arrays element-wise,
    /// everything else is returned unchanged.
    pub fn apply(self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.apply_str(s)),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.apply(v)).collect()),
            other => other.clone(),
        }
    }
}

/// JSON kinds a field can be constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Number,
    Bool,
    Array,
    Object,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }

    /// Kind name of an arbitrary value.
    pub fn describe(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Rules for a single field.
///
/// ```rust
/// use multiscope::profile::{FieldRule, Filter, ValueKind};
///
/// let rule = FieldRule::required()
///     .filter(Filter::Trim)
///     .kind(ValueKind::String)
///     .min_length(2)
///     .max_length(40);
/// assert!(rule.is_required());
/// ```
pub struct FieldRule {
    pub(crate) required: bool,
    pub(crate) filters: Vec<Filter>,
    pub(crate) kind: Option<ValueKind>,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) post_checks: Vec<FieldCheck>,
    pub(crate) dependents: Vec<(String, FieldRule)>,
}

impl FieldRule {
    fn with_required(required: bool) -> Self {
        Self {
            required,
            filters: Vec::new(),
            kind: None,
            min_length: None,
            max_length: None,
            post_checks: Vec::new(),
            dependents: Vec::new(),
        }
    }

    pub fn required() -> Self {
        Self::with_required(true)
    }

    pub fn optional() -> Self {
        Self::with_required(false)
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Add a filter. Filters run in insertion order.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Minimum length in characters (strings) or items (arrays)
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Maximum length in characters (strings) or items (arrays)
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Add a custom post-check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&FieldContext<'_>) -> Validation<(), NonEmptyVec<FieldViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.post_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate post-check reported under `code`
    pub fn require_pred<F>(mut self, predicate: F, code: impl Into<String>) -> Self
    where
        F: Fn(&FieldContext<'_>) -> bool + Send + Sync + 'static,
    {
        let code = code.into();
        let check = move |ctx: &FieldContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(FieldViolation::CustomCheckFailed { code: code.clone() })
            }
        };
        self.post_checks.push(Box::new(check));
        self
    }

    /// Field verified only once this field is valid. Dependents are
    /// verified in insertion order; repeated names are rejected by
    /// [`ProfileBuilder::build`](crate::profile::ProfileBuilder::build).
    pub fn dependent(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.dependents.push((field.into(), rule));
        self
    }

    fn apply_filters(&self, value: &Value) -> Value {
        self.filters
            .iter()
            .fold(value.clone(), |acc, filter| filter.apply(&acc))
    }

    /// Check a present, filtered value, accumulating ALL violations.
    pub fn check(&self, context: &FieldContext<'_>) -> Validation<(), NonEmptyVec<FieldViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<FieldViolation>>> = Vec::new();

        if let Some(kind) = self.kind {
            let check = if kind.matches(context.value) {
                Validation::success(())
            } else {
                Validation::fail(FieldViolation::WrongKind {
                    expected: kind.name().to_string(),
                    found: ValueKind::describe(context.value).to_string(),
                })
            };
            checks.push(check);
        }

        if let Some(actual) = length_of(context.value) {
            if let Some(min) = self.min_length {
                let check = if actual < min {
                    Validation::fail(FieldViolation::TooShort { min, actual })
                } else {
                    Validation::success(())
                };
                checks.push(check);
            }

            if let Some(max) = self.max_length {
                let check = if actual > max {
                    Validation::fail(FieldViolation::TooLong { max, actual })
                } else {
                    Validation::success(())
                };
                checks.push(check);
            }
        }

        for check_fn in &self.post_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// A set of field rules. Implements [`Verifier`].
///
/// Build one with [`ProfileBuilder`](crate::profile::ProfileBuilder) or the
/// [`profile!`](crate::profile!) macro.
pub struct Profile {
    pub(crate) fields: BTreeMap<String, FieldRule>,
}

impl Profile {
    /// Names of the top-level fields this profile checks.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.fields.get(field)
    }

    fn verify_field(
        name: &str,
        rule: &FieldRule,
        data: &Record,
        results: &mut VerificationResults,
    ) {
        let Some(original) = data.get(name) else {
            if rule.required {
                results.insert(name, FieldOutcome::Missing);
            }
            return;
        };

        let value = rule.apply_filters(original);
        if is_blank(&value) {
            if rule.required {
                results.insert(name, FieldOutcome::Missing);
            }
            return;
        }

        let context = FieldContext {
            field: name,
            value: &value,
            record: data,
        };

        match rule.check(&context) {
            Validation::Success(_) => {
                results.insert(
                    name,
                    FieldOutcome::Valid {
                        value,
                        original: original.clone(),
                    },
                );
                for (dependent, dependent_rule) in &rule.dependents {
                    Self::verify_field(dependent, dependent_rule, data, results);
                }
            }
            Validation::Failure(errors) => {
                results.insert(
                    name,
                    FieldOutcome::Invalid {
                        value,
                        original: original.clone(),
                        reasons: errors.iter().cloned().collect(),
                    },
                );
            }
        }
    }
}

impl Verifier for Profile {
    fn verify(&self, data: &Record) -> VerificationResults {
        let mut results = VerificationResults::new();
        for (name, rule) in &self.fields {
            Self::verify_field(name, rule, data, &mut results);
        }
        results
    }
}
