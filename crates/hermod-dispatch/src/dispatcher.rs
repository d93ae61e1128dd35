//! Event dispatch: resolve the handler for one inbound event and invoke
//! it.
//!
//! Dispatch is stateless across calls. Each call resolves at most one
//! handler, awaits it, and surfaces the outcome. Concurrent dispatches
//! share the registry without coordination and carry no ordering
//! guarantee relative to each other.

use std::{any::Any, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use hermod_core::{DispatchError, EventKind, InboundEvent, Result};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::{config::DispatcherConfig, registry::HandlerRegistry, service::WebhookService};

/// Resolves and invokes the handler for inbound webhook events.
///
/// Holds only configuration. Registries are passed per call, so one
/// dispatcher can serve any number of service instances.
#[derive(Debug, Clone, Default)]
pub struct EventDispatcher {
    config: DispatcherConfig,
}

impl EventDispatcher {
    /// Creates a dispatcher with the given configuration.
    pub fn new(config: DispatcherConfig) -> Self {
        Self { config }
    }

    /// The configuration this dispatcher was built with.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Builds a handler registry from the service's capability set.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedService`] when the service
    /// implements none of the recognized kinds.
    pub fn register<S>(&self, service: Arc<S>) -> Result<HandlerRegistry<S::Output>>
    where
        S: WebhookService,
    {
        let registry = HandlerRegistry::for_service(service)?;
        info!(
            handled = registry.len(),
            module = ?self.config.module,
            "registered webhook service handlers"
        );
        Ok(registry)
    }

    /// Every kind the registry can dispatch, sorted by identifier.
    pub fn handled_kinds<R: Send + 'static>(
        &self,
        registry: &HandlerRegistry<R>,
    ) -> Vec<EventKind> {
        registry.handled_kinds()
    }

    /// Dispatches one event to its registered handler and awaits the
    /// outcome.
    ///
    /// At most one handler runs per event. The success value passes
    /// through unchanged. The dispatcher never retries.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnhandledEventKind`] when no handler is
    ///   registered for the event's kind; no handler is invoked.
    /// - [`DispatchError::HandlerFailed`] when the handler returns an
    ///   error or panics; the original failure is attached as the cause
    ///   and logged exactly once before propagation.
    /// - [`DispatchError::HandlerTimeout`] when a configured timeout
    ///   elapses first. Unreachable with the default configuration.
    pub async fn dispatch<R: Send + 'static>(
        &self,
        registry: &HandlerRegistry<R>,
        event: InboundEvent,
    ) -> Result<R> {
        let kind = event.kind;
        let Some(handler) = registry.get(kind) else {
            debug!(
                kind = %kind,
                delivery_id = ?event.delivery_id,
                "event kind not handled by this service"
            );
            return Err(DispatchError::unhandled(kind));
        };

        debug!(
            kind = %kind,
            redelivery = event.redelivery,
            delivery_id = ?event.delivery_id,
            module = ?self.config.module,
            "dispatching event"
        );

        let invocation = AssertUnwindSafe(handler(event.payload, event.redelivery)).catch_unwind();
        let outcome = match self.config.handler_timeout {
            Some(timeout) => match tokio::time::timeout(timeout, invocation).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!(kind = %kind, ?timeout, "handler invocation timed out");
                    return Err(DispatchError::timeout(kind, timeout));
                },
            },
            None => invocation.await,
        };

        match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(cause)) => {
                error!(kind = %kind, error = %cause, "service method invocation failed");
                Err(DispatchError::handler_failed(kind, cause))
            },
            Err(panic) => {
                let cause = anyhow::anyhow!("handler panicked: {}", panic_message(panic.as_ref()));
                error!(kind = %kind, error = %cause, "service method invocation failed");
                Err(DispatchError::handler_failed(kind, cause))
            },
        }
    }

    /// Invokes the service's startup hook, if it implements one.
    ///
    /// Returns `Ok(None)` for services that keep the default hook.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::StartupFailed`] wrapping the hook's
    /// failure, logged once before propagation.
    pub async fn notify_startup<S>(
        &self,
        service: &S,
        payload: Value,
    ) -> Result<Option<S::Output>>
    where
        S: WebhookService,
    {
        match service.on_startup(payload).await {
            Ok(value) => Ok(value),
            Err(cause) => {
                error!(error = %cause, "service startup invocation failed");
                Err(DispatchError::startup_failed(cause))
            },
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}
