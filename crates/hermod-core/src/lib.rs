//! Domain types for the Hermod webhook dispatch core.
//!
//! Provides the closed set of recognized event kinds, the inbound event
//! representation, and the error taxonomy shared by registration and
//! dispatch. The async machinery lives in `hermod-dispatch`; this crate
//! stays free of runtime dependencies.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod kind;

pub use error::{DispatchError, Result};
pub use event::InboundEvent;
pub use kind::{EventKind, UnknownEventKind};
