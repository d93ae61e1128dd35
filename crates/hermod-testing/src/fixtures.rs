//! Canned webhook payloads and event builders.
//!
//! Shapes mirror the upstream provider's payloads closely enough for
//! dispatch tests; they are not full fidelity copies.

use hermod_core::{EventKind, InboundEvent};
use serde_json::{json, Value};
use uuid::Uuid;

/// A minimal push payload.
pub fn push_payload() -> Value {
    json!({
        "ref": "refs/heads/main",
        "before": "6113728f27ae82c7b1a177c8d03f9e96e0adf246",
        "after": "59b20b8d5c6ff8d09518454d4dd8b7b30f095ab5",
        "repository": { "full_name": "acme/widgets" },
        "pusher": { "name": "octocat" }
    })
}

/// A minimal ping payload.
pub fn ping_payload() -> Value {
    json!({
        "zen": "Anything added dilutes everything else.",
        "hook_id": 42,
        "repository": { "full_name": "acme/widgets" }
    })
}

/// A minimal issues payload with the given action.
pub fn issue_payload(action: &str) -> Value {
    json!({
        "action": action,
        "issue": { "number": 7, "title": "Dispatch drops events" },
        "repository": { "full_name": "acme/widgets" }
    })
}

/// Payload appropriate for the given kind, defaulting to an empty object.
pub fn payload_for(kind: EventKind) -> Value {
    match kind {
        EventKind::Push => push_payload(),
        EventKind::Ping => ping_payload(),
        EventKind::IssuesOpened => issue_payload("opened"),
        EventKind::IssuesClosed => issue_payload("closed"),
        _ => json!({}),
    }
}

/// An inbound event of the given kind with a fresh delivery GUID.
pub fn inbound(kind: EventKind) -> InboundEvent {
    InboundEvent::new(kind, payload_for(kind)).with_delivery_id(Uuid::new_v4())
}
