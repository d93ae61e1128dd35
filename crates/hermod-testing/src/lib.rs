//! Test support for the Hermod webhook dispatch core.
//!
//! Provides scripted service doubles with invocation recording, canned
//! webhook payload fixtures, and tracing setup for tests.

pub mod fixtures;
pub mod service;

pub use service::{HandlerScript, Invocation, ScriptedService};
use tracing_subscriber::EnvFilter;

/// Initializes tracing for tests.
///
/// Idempotent; later calls are no-ops. Filter defaults to
/// `warn,hermod=debug` unless `RUST_LOG` overrides it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,hermod=debug")),
        )
        .with_test_writer()
        .try_init();
}
