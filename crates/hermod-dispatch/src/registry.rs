//! Handler registry construction and lookup.
//!
//! A registry maps event kinds to handler callables. It is built once per
//! service instance, is immutable afterwards, and is read concurrently by
//! dispatches without locking.

use std::{collections::HashMap, future::Future, sync::Arc};

use futures::{future::BoxFuture, FutureExt};
use hermod_core::{DispatchError, EventKind, Result};
use serde_json::Value;
use tracing::warn;

use crate::service::WebhookService;

/// Future returned by a registered handler.
pub type HandlerFuture<R> = BoxFuture<'static, anyhow::Result<R>>;

/// A registered handler callable.
///
/// Receives the event payload and the caller-supplied redelivery flag.
pub type Handler<R> = Arc<dyn Fn(Value, bool) -> HandlerFuture<R> + Send + Sync>;

/// Immutable mapping from event kind to handler, owned by one service
/// instance.
///
/// Built either from a service's declared capability set with
/// [`HandlerRegistry::for_service`] or explicitly with
/// [`HandlerRegistry::builder`]. Keys are unique and the mapping never
/// changes after construction, so concurrent dispatches share it freely.
pub struct HandlerRegistry<R> {
    handlers: HashMap<EventKind, Handler<R>>,
}

impl<R: Send + 'static> HandlerRegistry<R> {
    /// Builds a registry from the service's declared capability set.
    ///
    /// Only kinds the service actually implements get an entry; each entry
    /// forwards to [`WebhookService::invoke`] for that kind.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedService`] when the service
    /// implements none of the recognized kinds.
    pub fn for_service<S>(service: Arc<S>) -> Result<Self>
    where
        S: WebhookService<Output = R>,
    {
        let mut handlers: HashMap<EventKind, Handler<R>> = HashMap::new();
        for kind in service.implemented_kinds() {
            let service = Arc::clone(&service);
            let handler: Handler<R> = Arc::new(move |payload, redelivery| {
                let service = Arc::clone(&service);
                async move { service.invoke(kind, payload, redelivery).await }.boxed()
            });
            handlers.insert(kind, handler);
        }

        if handlers.is_empty() {
            return Err(DispatchError::UnsupportedService);
        }
        Ok(Self { handlers })
    }

    /// Starts an explicit, reflection-free registration.
    pub fn builder() -> RegistryBuilder<R> {
        RegistryBuilder { handlers: HashMap::new() }
    }

    /// Every registered kind, sorted by canonical identifier.
    ///
    /// The order is stable across repeated calls on the same registry.
    /// Callers use this to decide which events to deliver at all.
    pub fn handled_kinds(&self) -> Vec<EventKind> {
        let mut kinds: Vec<EventKind> = self.handlers.keys().copied().collect();
        kinds.sort_by_key(|kind| kind.name());
        kinds
    }

    /// Whether a handler is registered for `kind`.
    pub fn contains(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry holds no handlers.
    ///
    /// Construction rejects empty registries, so this is false for any
    /// registry obtained through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub(crate) fn get(&self, kind: EventKind) -> Option<&Handler<R>> {
        self.handlers.get(&kind)
    }
}

impl<R> std::fmt::Debug for HandlerRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(|kind| kind.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("HandlerRegistry").field("kinds", &kinds).finish()
    }
}

/// Builder for explicit per-kind handler registration.
///
/// The alternative to capability-driven construction: the hosting layer
/// registers one callable per supported kind and the registry is total
/// over exactly those keys.
pub struct RegistryBuilder<R> {
    handlers: HashMap<EventKind, Handler<R>>,
}

impl<R: Send + 'static> RegistryBuilder<R> {
    /// Registers a handler for `kind`.
    ///
    /// Registering the same kind twice replaces the earlier binding; keys
    /// stay unique and registration order is otherwise irrelevant.
    #[must_use]
    pub fn handler<F, Fut>(mut self, kind: EventKind, handler: F) -> Self
    where
        F: Fn(Value, bool) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
    {
        let handler: Handler<R> = Arc::new(move |payload, redelivery| {
            handler(payload, redelivery).boxed()
        });
        if self.handlers.insert(kind, handler).is_some() {
            warn!(kind = %kind, "replacing previously registered handler");
        }
        self
    }

    /// Finishes registration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedService`] when no handler was
    /// registered.
    pub fn build(self) -> Result<HandlerRegistry<R>> {
        if self.handlers.is_empty() {
            return Err(DispatchError::UnsupportedService);
        }
        Ok(HandlerRegistry { handlers: self.handlers })
    }
}

impl<R> std::fmt::Debug for RegistryBuilder<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder").field("registered", &self.handlers.len()).finish()
    }
}
