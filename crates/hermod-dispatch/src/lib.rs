//! Event-name-to-handler dispatch core for webhook consumer services.
//!
//! Given an inbound event carrying its kind, an opaque payload, and a
//! caller-supplied redelivery flag, this crate resolves the one handler a
//! service registered for that kind, invokes it asynchronously, and
//! surfaces the outcome or a distinguishable error. There is no fan-out,
//! no middleware chain, and no retry; the hosting layer owns those
//! policies.
//!
//! # Example
//!
//! ```
//! use hermod_dispatch::{EventDispatcher, EventKind, HandlerRegistry, InboundEvent};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> hermod_core::Result<()> {
//! let registry = HandlerRegistry::builder()
//!     .handler(EventKind::Ping, |payload, _redelivery| async move { Ok(payload) })
//!     .build()?;
//!
//! let dispatcher = EventDispatcher::default();
//! let pong = dispatcher
//!     .dispatch(&registry, InboundEvent::new(EventKind::Ping, json!({"zen": "keep it simple"})))
//!     .await?;
//! assert_eq!(pong["zen"], "keep it simple");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod dispatcher;
pub mod registry;
pub mod service;

pub use config::{DispatcherConfig, ModuleInfo};
pub use dispatcher::EventDispatcher;
// Re-export the domain types so most callers depend on one crate.
pub use hermod_core::{DispatchError, EventKind, InboundEvent, Result, UnknownEventKind};
pub use registry::{Handler, HandlerFuture, HandlerRegistry, RegistryBuilder};
pub use service::WebhookService;
