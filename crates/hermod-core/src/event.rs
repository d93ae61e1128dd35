//! Inbound webhook event representation.
//!
//! An [`InboundEvent`] is one decoded delivery handed to the dispatcher.
//! The payload is opaque here, the dispatcher only routes on the kind and
//! forwards payload and redelivery flag to the resolved handler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::kind::EventKind;

/// One decoded webhook delivery awaiting dispatch.
///
/// Events are transient, one per dispatch call, and carry no state across
/// calls. The redelivery flag is supplied by the caller that received the
/// delivery; the dispatcher never computes or assumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Declared event kind, used to resolve the handler.
    pub kind: EventKind,

    /// Decoded payload, opaque to the dispatcher.
    pub payload: Value,

    /// Whether this delivery may be a redelivery of a previously seen
    /// event. Forwarded verbatim to the handler.
    pub redelivery: bool,

    /// Provider-assigned delivery GUID, when the receiving layer has one.
    ///
    /// Used only for log correlation, never for routing.
    pub delivery_id: Option<Uuid>,

    /// When the receiving layer constructed this event.
    pub received_at: DateTime<Utc>,
}

impl InboundEvent {
    /// Creates an event for the given kind and payload.
    ///
    /// Defaults: not a redelivery, no delivery GUID.
    pub fn new(kind: EventKind, payload: Value) -> Self {
        Self { kind, payload, redelivery: false, delivery_id: None, received_at: Utc::now() }
    }

    /// Sets the caller-supplied redelivery flag.
    #[must_use]
    pub fn redelivered(mut self, redelivery: bool) -> Self {
        self.redelivery = redelivery;
        self
    }

    /// Attaches the provider delivery GUID for log correlation.
    #[must_use]
    pub fn with_delivery_id(mut self, delivery_id: Uuid) -> Self {
        self.delivery_id = Some(delivery_id);
        self
    }
}
