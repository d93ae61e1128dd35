//! Dispatcher configuration.
//!
//! Configuration is an explicit value passed at construction. There is no
//! process-wide state; two dispatchers in one process can carry different
//! module identities and timeouts.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Configuration for an [`EventDispatcher`](crate::EventDispatcher).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Identity of the hosting module, recorded on dispatch logs for
    /// correlation. Optional; standalone users can leave it unset.
    pub module: Option<ModuleInfo>,

    /// Maximum time a single handler invocation may run.
    ///
    /// `None` (the default) lets handlers run to completion. Setting a
    /// timeout makes [`DispatchError::HandlerTimeout`] reachable.
    ///
    /// [`DispatchError::HandlerTimeout`]: hermod_core::DispatchError::HandlerTimeout
    pub handler_timeout: Option<Duration>,
}

impl DispatcherConfig {
    /// Sets the hosting module identity.
    #[must_use]
    pub fn with_module(mut self, module: ModuleInfo) -> Self {
        self.module = Some(module);
        self
    }

    /// Sets the per-invocation handler timeout.
    #[must_use]
    pub fn with_handler_timeout(mut self, timeout: Duration) -> Self {
        self.handler_timeout = Some(timeout);
        self
    }
}

/// Identity of the module hosting the dispatcher.
///
/// The organization, name, and version triple that the hosting runtime
/// attaches to its units of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Organization the module belongs to.
    pub org: String,
    /// Module name.
    pub name: String,
    /// Module version.
    pub version: String,
}

impl ModuleInfo {
    /// Creates a module identity.
    pub fn new(
        org: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self { org: org.into(), name: name.into(), version: version.into() }
    }
}

impl fmt::Display for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.org, self.name, self.version)
    }
}
