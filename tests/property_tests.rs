//! Property-based tests for the data manager.
//!
//! These tests use proptest to verify registry properties hold across
//! many randomly generated scopes, records and registration sequences.

use multiscope::checkpoint::Checkpoint;
use multiscope::core::{FieldOutcome, VerificationResults, Verifier, VerifierFn};
use multiscope::manager::{ConfigurationError, DataManager};
use multiscope::profile;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

fn names() -> Arc<dyn Verifier> {
    Arc::new(
        profile! {
            required: [name_first, name_last]
        }
        .unwrap(),
    )
}

prop_compose! {
    fn arbitrary_scope()(name in "[a-z]{1,8}") -> String {
        name
    }
}

prop_compose! {
    fn arbitrary_record()(
        first in proptest::option::of("[A-Za-z ]{0,6}"),
        last in proptest::option::of("[A-Za-z ]{0,6}"),
    ) -> Value {
        let mut record = Map::new();
        if let Some(first) = first {
            record.insert("name_first".to_string(), json!(first));
        }
        if let Some(last) = last {
            record.insert("name_last".to_string(), json!(last));
        }
        Value::Object(record)
    }
}

fn outcome_results(success: bool) -> VerificationResults {
    let mut results = VerificationResults::new();
    let outcome = if success {
        FieldOutcome::Valid {
            value: json!("x"),
            original: json!("x"),
        }
    } else {
        FieldOutcome::Missing
    };
    results.insert("field", outcome);
    results
}

proptest! {
    #[test]
    fn verify_without_verifier_always_fails(
        scope in arbitrary_scope(),
        record in arbitrary_record(),
    ) {
        let mut manager = DataManager::new();
        let result = manager.verify(&scope, &record);

        prop_assert_eq!(result.unwrap_err(), ConfigurationError::MissingVerifier { scope });
    }

    #[test]
    fn get_verifier_returns_last_registration(
        registrations in prop::collection::vec((0..3usize, 0..3usize), 1..20)
    ) {
        let scopes = ["a", "b", "c"];
        let verifiers: Vec<Arc<dyn Verifier>> = (0..3)
            .map(|_| Arc::new(VerifierFn::new(|_| VerificationResults::new())) as Arc<dyn Verifier>)
            .collect();

        let mut manager = DataManager::new();
        for (scope, verifier) in &registrations {
            manager.set_verifier(scopes[*scope], Arc::clone(&verifiers[*verifier]));
        }

        for (index, scope) in scopes.iter().enumerate() {
            let last = registrations.iter().rev().find(|(s, _)| *s == index);
            match last {
                Some((_, verifier)) => {
                    let current = manager.get_verifier(scope).unwrap();
                    prop_assert!(Arc::ptr_eq(&current, &verifiers[*verifier]));
                }
                None => {
                    prop_assert!(manager.get_verifier(scope).is_none());
                }
            }
        }
    }

    #[test]
    fn verify_stores_the_returned_results(
        scope in arbitrary_scope(),
        record in arbitrary_record(),
    ) {
        let mut manager = DataManager::new();
        manager.set_verifier(scope.clone(), names());

        let returned = manager.verify(&scope, &record).unwrap();
        let stored = manager.get_results(&scope).unwrap();

        prop_assert!(Arc::ptr_eq(&returned, &stored));
        prop_assert_eq!(&*stored, &names().verify(&record));
    }

    #[test]
    fn success_is_false_iff_some_result_failed(
        outcomes in prop::collection::btree_map(arbitrary_scope(), any::<bool>(), 0..8)
    ) {
        let mut manager = DataManager::new();
        for (scope, success) in &outcomes {
            manager.set_results(scope.clone(), outcome_results(*success));
        }

        prop_assert_eq!(manager.success(), outcomes.values().all(|s| *s));
    }

    #[test]
    fn scopes_are_exactly_the_registered_ones(
        registered in prop::collection::btree_set(arbitrary_scope(), 0..8),
        verified_mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let mut manager = DataManager::new();
        for scope in &registered {
            manager.set_verifier(scope.clone(), names());
        }
        for (scope, verify) in registered.iter().zip(&verified_mask) {
            if *verify {
                manager.verify(scope, &json!({})).unwrap();
            }
        }

        let listed: BTreeSet<String> = manager.scopes().into_iter().map(String::from).collect();
        prop_assert_eq!(listed, registered);
    }

    #[test]
    fn messages_are_idempotent(
        records in prop::collection::vec(arbitrary_record(), 1..5)
    ) {
        let mut manager = DataManager::new();
        for (index, record) in records.iter().enumerate() {
            let scope = format!("scope{index}");
            manager.set_verifier(scope.clone(), names());
            manager.verify(&scope, record).unwrap();
        }

        let first = manager.messages().clone();
        let second = manager.messages().clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_message_per_failing_field(
        records in prop::collection::vec(arbitrary_record(), 1..5)
    ) {
        let mut manager = DataManager::new();
        let mut expected = 0;
        for (index, record) in records.iter().enumerate() {
            let scope = format!("scope{index}");
            manager.set_verifier(scope.clone(), names());
            let results = manager.verify(&scope, record).unwrap();
            expected += results.missing_count() + results.invalid_count();

            prop_assert_eq!(
                manager.get_results(&scope).map(|r| r.success()),
                Some(results.missing_count() == 0)
            );
        }

        prop_assert_eq!(manager.messages().count(), expected);
    }

    #[test]
    fn checkpoint_round_trip_preserves_results(
        records in prop::collection::vec(arbitrary_record(), 0..5),
        build_messages in any::<bool>(),
    ) {
        let mut manager = DataManager::new();
        for (index, record) in records.iter().enumerate() {
            let scope = format!("scope{index}");
            manager.set_verifier(scope.clone(), names());
            manager.verify(&scope, record).unwrap();
        }
        if build_messages {
            manager.messages();
        }

        let json = manager.checkpoint().to_json().unwrap();
        let restored = DataManager::from_checkpoint(Checkpoint::from_json(&json).unwrap()).unwrap();

        prop_assert!(restored.scopes().is_empty());
        prop_assert_eq!(restored.result_scopes(), manager.result_scopes());
        prop_assert_eq!(restored.success(), manager.success());
        prop_assert_eq!(restored.messages_built(), build_messages);
        for scope in manager.result_scopes() {
            prop_assert_eq!(restored.get_results(scope), manager.get_results(scope));
        }
    }
}
