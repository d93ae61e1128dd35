//! Integration tests for event dispatch behavior.
//!
//! Covers handler resolution, failure wrapping, the redelivery flag,
//! panic containment, the optional timeout, and the startup hook, using
//! scripted service doubles.

use std::{error::Error as _, sync::Arc, time::Duration};

use hermod_dispatch::{
    DispatchError, DispatcherConfig, EventDispatcher, EventKind, ModuleInfo,
};
use hermod_testing::{fixtures, HandlerScript, ScriptedService};
use serde_json::json;

fn ping_push_service() -> Arc<ScriptedService> {
    Arc::new(
        ScriptedService::new()
            .succeeds_on(EventKind::Ping, json!({"pong": true}))
            .succeeds_on(EventKind::Push, json!({"commits": 3})),
    )
}

#[tokio::test]
async fn dispatch_invokes_exactly_the_bound_handler() {
    hermod_testing::init_tracing();
    let service = ping_push_service();
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(Arc::clone(&service)).expect("service handles two kinds");

    let value = dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::Push))
        .await
        .expect("push is registered");

    assert_eq!(value, json!({"commits": 3}));
    let invocations = service.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].kind, EventKind::Push);
    assert_eq!(invocations[0].payload, fixtures::push_payload());
    assert!(!invocations[0].redelivery);
}

#[tokio::test]
async fn unregistered_kind_fails_without_invoking_anything() {
    let service = ping_push_service();
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(Arc::clone(&service)).expect("service handles two kinds");

    let error = dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::Fork))
        .await
        .expect_err("fork is not registered");

    assert!(matches!(error, DispatchError::UnhandledEventKind { kind: EventKind::Fork }));
    assert!(error.is_recoverable());
    assert_eq!(service.invocation_count(), 0);
}

#[tokio::test]
async fn handled_kinds_listed_in_identifier_order() {
    let service = ping_push_service();
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(service).expect("service handles two kinds");

    let kinds = registry.handled_kinds();
    assert_eq!(kinds, vec![EventKind::Ping, EventKind::Push]);
    assert_eq!(kinds, registry.handled_kinds(), "order is stable across calls");
}

#[tokio::test]
async fn service_with_no_recognized_kinds_rejected_at_registration() {
    let dispatcher = EventDispatcher::default();
    let error = dispatcher
        .register(Arc::new(ScriptedService::new()))
        .expect_err("nothing to register");
    assert!(matches!(error, DispatchError::UnsupportedService));
}

#[tokio::test]
async fn handler_success_value_passes_through_unchanged() {
    let value = json!({"nested": {"list": [1, 2, 3]}, "text": "unchanged"});
    let service =
        Arc::new(ScriptedService::new().succeeds_on(EventKind::ReleasePublished, value.clone()));
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(service).expect("one kind registered");

    let returned = dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::ReleasePublished))
        .await
        .expect("handler succeeds");
    assert_eq!(returned, value);
}

#[tokio::test]
async fn handler_failure_wrapped_with_original_cause() {
    let service =
        Arc::new(ScriptedService::new().fails_on(EventKind::IssuesOpened, "downstream offline"));
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(service).expect("one kind registered");

    let error = dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::IssuesOpened))
        .await
        .expect_err("handler fails");

    match &error {
        DispatchError::HandlerFailed { kind, .. } => assert_eq!(*kind, EventKind::IssuesOpened),
        other => panic!("expected HandlerFailed, got {other:?}"),
    }
    let cause = error.source().expect("cause preserved");
    assert_eq!(cause.to_string(), "downstream offline");
    assert!(!error.is_recoverable());
}

#[tokio::test]
async fn redelivery_flag_forwarded_verbatim() {
    let service = ping_push_service();
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(Arc::clone(&service)).expect("service handles two kinds");

    dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::Ping).redelivered(true))
        .await
        .expect("ping succeeds");
    dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::Ping).redelivered(false))
        .await
        .expect("ping succeeds");

    let invocations = service.invocations();
    assert_eq!(invocations.len(), 2);
    assert!(invocations[0].redelivery);
    assert!(!invocations[1].redelivery);
}

#[tokio::test]
async fn panicking_handler_is_contained() {
    let service = Arc::new(
        ScriptedService::new()
            .panics_on(EventKind::Create, "handler bug")
            .succeeds_on(EventKind::Ping, json!({"pong": true})),
    );
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(Arc::clone(&service)).expect("two kinds registered");

    let error = dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::Create))
        .await
        .expect_err("handler panicked");
    match &error {
        DispatchError::HandlerFailed { kind, source } => {
            assert_eq!(*kind, EventKind::Create);
            assert!(source.to_string().contains("handler bug"), "panic text kept: {source}");
        },
        other => panic!("expected HandlerFailed, got {other:?}"),
    }

    // The registry is still usable after a panic.
    dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::Ping))
        .await
        .expect("later dispatches unaffected");
}

#[tokio::test(start_paused = true)]
async fn slow_handler_runs_to_completion_by_default() {
    let service = Arc::new(ScriptedService::new().delays_on(
        EventKind::Push,
        Duration::from_secs(120),
        json!({"done": true}),
    ));
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(service).expect("one kind registered");

    let value = dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::Push))
        .await
        .expect("no timeout configured");
    assert_eq!(value, json!({"done": true}));
}

#[tokio::test(start_paused = true)]
async fn configured_timeout_surfaces_timeout_error() {
    let service = Arc::new(ScriptedService::new().delays_on(
        EventKind::Push,
        Duration::from_secs(120),
        json!({"done": true}),
    ));
    let timeout = Duration::from_secs(5);
    let dispatcher =
        EventDispatcher::new(DispatcherConfig::default().with_handler_timeout(timeout));
    let registry = dispatcher.register(service).expect("one kind registered");

    let error = dispatcher
        .dispatch(&registry, fixtures::inbound(EventKind::Push))
        .await
        .expect_err("timeout fires first");
    assert!(matches!(
        error,
        DispatchError::HandlerTimeout { kind: EventKind::Push, timeout: t } if t == timeout
    ));
}

#[tokio::test]
async fn concurrent_dispatches_do_not_interfere() {
    let service = Arc::new(
        ScriptedService::new()
            .succeeds_on(EventKind::Ping, json!("ping"))
            .succeeds_on(EventKind::Push, json!("push"))
            .succeeds_on(EventKind::Fork, json!("fork")),
    );
    let dispatcher = EventDispatcher::default();
    let registry = dispatcher.register(Arc::clone(&service)).expect("three kinds registered");

    let (ping, push, fork) = tokio::join!(
        dispatcher.dispatch(&registry, fixtures::inbound(EventKind::Ping)),
        dispatcher.dispatch(&registry, fixtures::inbound(EventKind::Push)),
        dispatcher.dispatch(&registry, fixtures::inbound(EventKind::Fork)),
    );

    assert_eq!(ping.expect("ping succeeds"), json!("ping"));
    assert_eq!(push.expect("push succeeds"), json!("push"));
    assert_eq!(fork.expect("fork succeeds"), json!("fork"));
    assert_eq!(service.invocation_count(), 3);
}

#[tokio::test]
async fn startup_hook_defaults_to_none() {
    let service = ping_push_service();
    let dispatcher = EventDispatcher::default();

    let value = dispatcher
        .notify_startup(service.as_ref(), json!({}))
        .await
        .expect("default hook succeeds");
    assert!(value.is_none());
}

#[tokio::test]
async fn startup_hook_outcome_surfaced() {
    let dispatcher = EventDispatcher::new(
        DispatcherConfig::default().with_module(ModuleInfo::new("acme", "webhook", "1.0.0")),
    );

    let ready = ScriptedService::new()
        .succeeds_on(EventKind::Ping, json!({}))
        .with_startup(HandlerScript::Succeed(json!({"ready": true})));
    let value = dispatcher
        .notify_startup(&ready, json!({"boot": 1}))
        .await
        .expect("scripted startup succeeds");
    assert_eq!(value, Some(json!({"ready": true})));

    let broken = ScriptedService::new()
        .succeeds_on(EventKind::Ping, json!({}))
        .with_startup(HandlerScript::Fail("no config".to_string()));
    let error =
        dispatcher.notify_startup(&broken, json!({})).await.expect_err("scripted startup fails");
    match &error {
        DispatchError::StartupFailed { source } => assert_eq!(source.to_string(), "no config"),
        other => panic!("expected StartupFailed, got {other:?}"),
    }
}
