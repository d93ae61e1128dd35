//! Error taxonomy for handler registration and event dispatch.
//!
//! All failure modes surface to the caller as distinguishable error
//! values. Registration failures are fatal to that registration attempt;
//! dispatch failures are per-event and leave the registry usable.

use std::time::Duration;

use thiserror::Error;

use crate::kind::EventKind;

/// Result type alias using [`DispatchError`].
pub type Result<T, E = DispatchError> = std::result::Result<T, E>;

/// Failure modes of handler registration and event dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The service implements none of the recognized event kinds.
    ///
    /// Raised at registration time. A registry is never built for such a
    /// service.
    #[error("service implements no recognized webhook event kinds")]
    UnsupportedService,

    /// The event kind is recognized by the platform but this service
    /// instance registered no handler for it.
    ///
    /// Raised at dispatch time, before any handler is invoked. Callers
    /// typically acknowledge and skip the delivery.
    #[error("no handler registered for event kind '{kind}'")]
    UnhandledEventKind {
        /// Kind that had no registered handler.
        kind: EventKind,
    },

    /// The registered handler ran and reported failure.
    ///
    /// Wraps the handler's own error as the source. The dispatcher never
    /// retries; the caller decides what to do with the failure.
    #[error("service method invocation failed for '{kind}': {source}")]
    HandlerFailed {
        /// Kind whose handler failed.
        kind: EventKind,
        /// The handler's original failure.
        #[source]
        source: anyhow::Error,
    },

    /// The handler exceeded the configured invocation timeout.
    ///
    /// Only reachable when a timeout is configured; the default
    /// configuration lets handlers run to completion.
    #[error("handler for '{kind}' timed out after {timeout:?}")]
    HandlerTimeout {
        /// Kind whose handler timed out.
        kind: EventKind,
        /// Configured timeout that elapsed.
        timeout: Duration,
    },

    /// The service startup hook ran and reported failure.
    #[error("service startup invocation failed: {source}")]
    StartupFailed {
        /// The startup hook's original failure.
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    /// Creates an unhandled-kind error.
    pub fn unhandled(kind: EventKind) -> Self {
        Self::UnhandledEventKind { kind }
    }

    /// Wraps a handler failure, preserving the original cause.
    pub fn handler_failed(kind: EventKind, source: impl Into<anyhow::Error>) -> Self {
        Self::HandlerFailed { kind, source: source.into() }
    }

    /// Creates a handler timeout error.
    pub fn timeout(kind: EventKind, timeout: Duration) -> Self {
        Self::HandlerTimeout { kind, timeout }
    }

    /// Wraps a startup hook failure, preserving the original cause.
    pub fn startup_failed(source: impl Into<anyhow::Error>) -> Self {
        Self::StartupFailed { source: source.into() }
    }

    /// Whether the caller can safely acknowledge and skip the event.
    ///
    /// True only for [`DispatchError::UnhandledEventKind`]; no handler ran,
    /// so skipping loses nothing. All other variants mean registration or
    /// an invocation actually failed.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnhandledEventKind { .. })
    }

    /// Event kind associated with a dispatch-time error, if any.
    pub const fn kind(&self) -> Option<EventKind> {
        match self {
            Self::UnhandledEventKind { kind }
            | Self::HandlerFailed { kind, .. }
            | Self::HandlerTimeout { kind, .. } => Some(*kind),
            Self::UnsupportedService | Self::StartupFailed { .. } => None,
        }
    }
}
