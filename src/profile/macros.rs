//! Macros for ergonomic profile construction.

/// Build a [`Profile`](crate::profile::Profile) of plain required and
/// optional fields.
///
/// Expands to a [`ProfileBuilder`](crate::profile::ProfileBuilder) chain and
/// returns its `Result`.
///
/// # Example
///
/// ```
/// use multiscope::core::Verifier;
/// use multiscope::profile;
/// use serde_json::json;
///
/// let names = profile! {
///     required: [name_first, name_last]
///     optional: [name_middle]
/// }
/// .unwrap();
///
/// assert!(names.verify(&json!({"name_first": "Cory", "name_last": "Watson"})).success());
/// ```
#[macro_export]
macro_rules! profile {
    (
        $(required: [$($required:ident),* $(,)?])?
        $(optional: [$($optional:ident),* $(,)?])?
    ) => {
        $crate::profile::ProfileBuilder::new()
            $($(.required(stringify!($required)))*)?
            $($(.optional(stringify!($optional)))*)?
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Verifier;
    use serde_json::json;

    #[test]
    fn profile_macro_builds_required_and_optional() {
        let profile = profile! {
            required: [name_first, name_last]
            optional: [name_middle]
        }
        .unwrap();

        assert_eq!(
            profile.field_names(),
            vec!["name_first", "name_last", "name_middle"]
        );

        let results = profile.verify(&json!({"name_first": "Cory"}));
        assert_eq!(results.missings(), vec!["name_last"]);
        assert!(results.outcome("name_middle").is_none());
    }

    #[test]
    fn profile_macro_works_with_only_required() {
        let profile = profile! {
            required: [email,]
        }
        .unwrap();

        assert!(profile.rule("email").is_some());
    }

    #[test]
    fn profile_macro_reports_duplicates() {
        let result = profile! {
            required: [email]
            optional: [email]
        };

        assert!(result.is_err());
    }
}
