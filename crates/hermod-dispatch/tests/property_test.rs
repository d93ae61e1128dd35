//! Property-based tests for registry membership.
//!
//! For any non-empty subset of recognized kinds, the registry lists
//! exactly that subset in identifier order and dispatch succeeds exactly
//! on membership.

use std::collections::BTreeSet;

use hermod_dispatch::{DispatchError, EventDispatcher, EventKind, HandlerRegistry, InboundEvent};
use proptest::{prelude::*, test_runner::Config as ProptestConfig};
use serde_json::json;
use tokio::runtime::Runtime;

/// Deterministic property test configuration for CI stability.
fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 32,
        timeout: 5000,
        fork: false,
        failure_persistence: None,
        source_file: None,
        ..ProptestConfig::default()
    }
}

/// Generates a non-empty subset of the recognized kinds.
fn kind_subset_strategy() -> impl Strategy<Value = Vec<EventKind>> {
    prop::collection::hash_set(prop::sample::select(EventKind::ALL.to_vec()), 1..12)
        .prop_map(|kinds| kinds.into_iter().collect())
}

fn registry_for(kinds: &[EventKind]) -> HandlerRegistry<serde_json::Value> {
    let mut builder = HandlerRegistry::builder();
    for kind in kinds.iter().copied() {
        builder = builder.handler(kind, move |_, _| async move { Ok(json!(kind.name())) });
    }
    builder.build().expect("subset is non-empty")
}

proptest! {
    #![proptest_config(proptest_config())]

    /// The handled set equals the registered set, sorted by identifier.
    #[test]
    fn handled_kinds_equals_registered_subset(kinds in kind_subset_strategy()) {
        let registry = registry_for(&kinds);

        let mut expected: Vec<EventKind> = kinds.clone();
        expected.sort_by_key(|kind| kind.name());
        prop_assert_eq!(registry.handled_kinds(), expected);
        prop_assert_eq!(registry.len(), kinds.len());
    }

    /// Dispatch succeeds exactly on membership, and the value identifies
    /// the handler that ran.
    #[test]
    fn dispatch_succeeds_exactly_on_membership(kinds in kind_subset_strategy()) {
        let registry = registry_for(&kinds);
        let members: BTreeSet<&str> = kinds.iter().map(|kind| kind.name()).collect();
        let dispatcher = EventDispatcher::default();
        let rt = Runtime::new().expect("runtime");

        for kind in EventKind::ALL.iter().copied() {
            let outcome =
                rt.block_on(dispatcher.dispatch(&registry, InboundEvent::new(kind, json!({}))));
            if members.contains(kind.name()) {
                let value = outcome.expect("registered kind dispatches");
                prop_assert_eq!(value, json!(kind.name()));
            } else {
                let error = outcome.expect_err("unregistered kind fails");
                let is_unhandled_kind = matches!(
                    error,
                    DispatchError::UnhandledEventKind { kind: unhandled } if unhandled == kind
                );
                prop_assert!(is_unhandled_kind);
            }
        }
    }
}
