//! # Weak handle into a running context.
//!
//! A [`ContextHandle`] is the facet the context hands to every bound
//! producer and consumer: the context's identity plus a weak reference to
//! the hub. Components raise events and write log records through it.
//!
//! Holding the hub weakly breaks the reference cycle between the context
//! (which owns its producers) and the producers (which point back at the
//! context): once the last [`EventContext`] clone is dropped, raising
//! through a stale handle yields [`ContextError::ContextGone`] instead of
//! keeping the hub alive forever.

use std::sync::{Arc, Weak};

use tokio::task::JoinHandle;

use crate::error::ContextError;
use crate::events::Event;
use crate::logging::LogRecord;

use super::context::{EventContext, Inner};

/// Cheap, cloneable reference to a context, held by bound components.
#[derive(Clone, Debug)]
pub struct ContextHandle {
    id: Arc<str>,
    inner: Weak<Inner>,
}

impl ContextHandle {
    pub(crate) fn new(id: Arc<str>, inner: Weak<Inner>) -> Self {
        Self { id, inner }
    }

    /// Identity of the context this handle points at.
    pub fn id(&self) -> &Arc<str> {
        &self.id
    }

    /// Upgrades to a full context reference.
    pub fn upgrade(&self) -> Result<EventContext, ContextError> {
        self.inner
            .upgrade()
            .map(EventContext::from_inner)
            .ok_or(ContextError::ContextGone)
    }

    /// Raises an event into the context, fire-and-forget.
    ///
    /// See [`EventContext::raise_event`].
    pub fn raise_event(
        &self,
        ev: Event,
        source: impl Into<Arc<str>>,
    ) -> Result<JoinHandle<()>, ContextError> {
        self.upgrade()?.raise_event(ev, source)
    }

    /// Raises an event and waits for every consumer to finish handling it.
    ///
    /// See [`EventContext::raise_event_awaited`].
    pub async fn raise_event_awaited(
        &self,
        ev: Event,
        source: impl Into<Arc<str>>,
    ) -> Result<(), ContextError> {
        self.upgrade()?.raise_event_awaited(ev, source).await
    }

    /// Writes a record to the context's log sinks.
    ///
    /// A stale handle drops the record silently; log output is best-effort
    /// by contract.
    pub fn log(&self, record: LogRecord) {
        if let Ok(ctx) = self.upgrade() {
            ctx.log(record);
        }
    }
}
