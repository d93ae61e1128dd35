//! Scripted webhook service doubles.
//!
//! [`ScriptedService`] implements the service interface with per-kind
//! scripted behavior and records every invocation so tests can assert on
//! exactly what the dispatcher did.

use std::{collections::HashMap, sync::Mutex, time::Duration};

use async_trait::async_trait;
use hermod_core::EventKind;
use hermod_dispatch::WebhookService;
use serde_json::Value;

/// Scripted behavior for one event kind.
#[derive(Debug, Clone)]
pub enum HandlerScript {
    /// Return the given value.
    Succeed(Value),
    /// Fail with the given message.
    Fail(String),
    /// Panic with the given message.
    Panic(String),
    /// Sleep for the duration, then return the given value.
    DelayThenSucceed(Duration, Value),
}

/// One recorded handler invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Kind the dispatcher invoked.
    pub kind: EventKind,
    /// Payload the handler received.
    pub payload: Value,
    /// Redelivery flag the handler received.
    pub redelivery: bool,
}

/// A webhook service whose handlers follow a script.
///
/// Declares exactly the kinds it has scripts for, records every
/// invocation, and replays the scripted outcome.
#[derive(Debug, Default)]
pub struct ScriptedService {
    scripts: HashMap<EventKind, HandlerScript>,
    startup: Option<HandlerScript>,
    invocations: Mutex<Vec<Invocation>>,
}

impl ScriptedService {
    /// Creates a service with no scripted kinds.
    ///
    /// Registering such a service must fail; add scripts for the kinds the
    /// test needs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts `kind` to succeed with `value`.
    #[must_use]
    pub fn succeeds_on(mut self, kind: EventKind, value: Value) -> Self {
        self.scripts.insert(kind, HandlerScript::Succeed(value));
        self
    }

    /// Scripts `kind` to fail with `message`.
    #[must_use]
    pub fn fails_on(mut self, kind: EventKind, message: impl Into<String>) -> Self {
        self.scripts.insert(kind, HandlerScript::Fail(message.into()));
        self
    }

    /// Scripts `kind` to panic with `message`.
    #[must_use]
    pub fn panics_on(mut self, kind: EventKind, message: impl Into<String>) -> Self {
        self.scripts.insert(kind, HandlerScript::Panic(message.into()));
        self
    }

    /// Scripts `kind` to sleep for `delay` and then succeed with `value`.
    #[must_use]
    pub fn delays_on(mut self, kind: EventKind, delay: Duration, value: Value) -> Self {
        self.scripts.insert(kind, HandlerScript::DelayThenSucceed(delay, value));
        self
    }

    /// Scripts the startup hook.
    #[must_use]
    pub fn with_startup(mut self, script: HandlerScript) -> Self {
        self.startup = Some(script);
        self
    }

    /// Every invocation recorded so far, in call order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().expect("invocation log poisoned").clone()
    }

    /// Number of invocations recorded so far.
    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().expect("invocation log poisoned").len()
    }

    async fn run_script(&self, script: HandlerScript) -> anyhow::Result<Value> {
        match script {
            HandlerScript::Succeed(value) => Ok(value),
            HandlerScript::Fail(message) => Err(anyhow::anyhow!(message)),
            HandlerScript::Panic(message) => panic!("{message}"),
            HandlerScript::DelayThenSucceed(delay, value) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            },
        }
    }
}

#[async_trait]
impl WebhookService for ScriptedService {
    type Output = Value;

    fn implemented_kinds(&self) -> Vec<EventKind> {
        self.scripts.keys().copied().collect()
    }

    async fn invoke(
        &self,
        kind: EventKind,
        payload: Value,
        redelivery: bool,
    ) -> anyhow::Result<Value> {
        self.invocations
            .lock()
            .expect("invocation log poisoned")
            .push(Invocation { kind, payload: payload.clone(), redelivery });

        let script = self
            .scripts
            .get(&kind)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no script for kind '{kind}'"))?;
        self.run_script(script).await
    }

    async fn on_startup(&self, _payload: Value) -> anyhow::Result<Option<Value>> {
        match self.startup.clone() {
            None => Ok(None),
            Some(script) => self.run_script(script).await.map(Some),
        }
    }
}
