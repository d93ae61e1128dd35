//! Consumer service interface.
//!
//! The dispatcher never talks to the host environment directly. It
//! consumes this trait: capability introspection to learn which kinds a
//! service implements, and an async invocation primitive to run one
//! handler. How a service routes the call internally (method table,
//! generated match, reflection shim) is its own business.

use async_trait::async_trait;
use hermod_core::EventKind;
use serde_json::Value;

/// A webhook consumer service that the dispatcher can bind handlers from.
///
/// Implementations declare their capability set once and accept invocation
/// of any kind they declared. Declaring a kind and then failing to handle
/// it in [`invoke`](WebhookService::invoke) is a service bug; the
/// dispatcher surfaces it as a handler failure like any other.
#[async_trait]
pub trait WebhookService: Send + Sync + 'static {
    /// Success value produced by this service's handlers.
    type Output: Send + 'static;

    /// Event kinds this service implements a handler for.
    ///
    /// Read once at registration time. Order and duplicates are
    /// irrelevant; the registry keys are unique.
    fn implemented_kinds(&self) -> Vec<EventKind>;

    /// Invokes the handler bound to `kind` with the event payload and the
    /// caller-supplied redelivery flag.
    ///
    /// The returned error is wrapped by the dispatcher with the kind
    /// attached; implementations should not pre-wrap.
    async fn invoke(
        &self,
        kind: EventKind,
        payload: Value,
        redelivery: bool,
    ) -> anyhow::Result<Self::Output>;

    /// Startup hook, called once by the hosting layer before any event is
    /// delivered.
    ///
    /// Services without startup behavior keep the default, which reports
    /// "not implemented" as `Ok(None)`.
    async fn on_startup(&self, payload: Value) -> anyhow::Result<Option<Self::Output>> {
        let _ = payload;
        Ok(None)
    }
}
