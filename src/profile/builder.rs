//! Builder API for creating verification profiles.

use crate::builder::BuildError;
use crate::profile::rules::{FieldRule, Profile};
use std::collections::{BTreeMap, BTreeSet};

/// Builder for creating profiles
pub struct ProfileBuilder {
    fields: Vec<(String, FieldRule)>,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a required field with no further rules
    pub fn required(self, field: impl Into<String>) -> Self {
        self.field(field, FieldRule::required())
    }

    /// Add an optional field with no further rules
    pub fn optional(self, field: impl Into<String>) -> Self {
        self.field(field, FieldRule::optional())
    }

    /// Add a field with a full rule
    pub fn field(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.push((field.into(), rule));
        self
    }

    /// Build the profile.
    /// Returns an error on empty or duplicate field names and on
    /// inverted length bounds. Dependents at any depth share one namespace
    /// with the top-level fields.
    pub fn build(self) -> Result<Profile, BuildError> {
        {
            let mut seen = BTreeSet::new();
            for (name, rule) in &self.fields {
                check_rule(name, rule, &mut seen)?;
            }
        }

        let fields: BTreeMap<String, FieldRule> = self.fields.into_iter().collect();
        Ok(Profile { fields })
    }
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_rule<'a>(
    name: &'a str,
    rule: &'a FieldRule,
    seen: &mut BTreeSet<&'a str>,
) -> Result<(), BuildError> {
    if name.is_empty() {
        return Err(BuildError::EmptyFieldName);
    }

    if !seen.insert(name) {
        return Err(BuildError::DuplicateField {
            field: name.to_string(),
        });
    }

    if let (Some(min), Some(max)) = (rule.min_length, rule.max_length) {
        if min > max {
            return Err(BuildError::InvalidLengthBounds {
                field: name.to_string(),
                min,
                max,
            });
        }
    }

    for (dependent, dependent_rule) in &rule.dependents {
        check_rule(dependent, dependent_rule, seen)?;
    }

    Ok(())
}
