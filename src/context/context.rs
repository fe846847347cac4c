//! # Event context: the routing and lifecycle hub.
//!
//! [`EventContext`] registers producers and consumers, accepts raised
//! events, dispatches them to every consumer registered for the event's
//! kind, and records a bounded audit trail.
//!
//! ## Event flow
//! ```text
//! ClockProducer ──┐
//! QueueProducer ──┼─ raise_event(ev, source) ──► log EventSent
//! caller        ──┘            │
//!                              ▼ (spawned, or awaited via raise_event_awaited)
//!                        handle_event(ev)
//!                              ├─► history.push(ev)          (bounded ring)
//!                              └─► routes[ev.kind], in registration order:
//!                                    ├─ kind-contract check  (skip + error record)
//!                                    └─ consumer.on_event(&ev) under catch_unwind
//!                                          └─ may raise derived events (chaining)
//! ```
//!
//! ## Concurrency
//! - Registration structures are multi-writer safe (`RwLock`ed map/list);
//!   the routing table is read on every dispatch and written only at
//!   registration time.
//! - `raise_event` is fire-and-forget: it enqueues dispatch work and
//!   returns. Callers that need completion use [`raise_event_awaited`] —
//!   the two modes are distinct operations.
//! - Events from concurrent raisers are appended to history in the order
//!   their dispatches actually execute; there is no total order across
//!   raisers. Consumers for one event always run in registration order.
//!
//! [`raise_event_awaited`]: EventContext::raise_event_awaited

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use futures::FutureExt;
use tokio::sync::{RwLock, Semaphore};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::ContextConfig;
use crate::consumers::Consume;
use crate::error::{ContextError, DeliveryError};
use crate::events::{Event, EventHistory, Kind};
use crate::logging::{LogKind, LogRecord, SinkSet};
use crate::producers::{ClockProducer, Produce, QueueProducer};
use crate::queue::WorkQueue;

use super::builder::ContextBuilder;
use super::handle::ContextHandle;

pub(crate) struct Inner {
    cfg: ContextConfig,
    id: OnceLock<Arc<str>>,
    producers: RwLock<Vec<Arc<dyn Produce>>>,
    routes: RwLock<HashMap<Kind, Vec<Arc<dyn Consume>>>>,
    history: RwLock<EventHistory>,
    sinks: SinkSet,
    queue: Arc<dyn WorkQueue>,
    dispatch_sem: Option<Semaphore>,
    cancel: CancellationToken,
}

impl std::fmt::Debug for Inner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventContext")
            .field("id", &self.id.get())
            .finish_non_exhaustive()
    }
}

/// Process-wide coordination point for producers, consumers, and history.
///
/// Cheap to clone; all clones share the same hub. Constructed inert via
/// [`EventContext::builder`], activated by [`initialize`](Self::initialize).
#[derive(Clone)]
pub struct EventContext {
    inner: Arc<Inner>,
}

impl EventContext {
    /// Starts building a context.
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    pub(crate) fn from_parts(
        cfg: ContextConfig,
        sinks: SinkSet,
        queue: Arc<dyn WorkQueue>,
    ) -> Self {
        let dispatch_sem = cfg.dispatch_limit().map(Semaphore::new);
        let history = EventHistory::new(cfg.history_capacity);
        Self {
            inner: Arc::new(Inner {
                cfg,
                id: OnceLock::new(),
                producers: RwLock::new(Vec::new()),
                routes: RwLock::new(HashMap::new()),
                history: RwLock::new(history),
                sinks,
                queue,
                dispatch_sem,
                cancel: CancellationToken::new(),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Arc<Inner>) -> Self {
        Self { inner }
    }

    /// One-time setup: assigns the session identity and registers the
    /// built-in clock and queue-draining producers.
    ///
    /// Calling twice fails with [`ContextError::AlreadyInitialized`].
    pub async fn initialize(&self) -> Result<(), ContextError> {
        let id: Arc<str> = format!("ctx-{:08x}", rand::random::<u32>()).into();
        if self.inner.id.set(Arc::clone(&id)).is_err() {
            let existing = self.inner.id.get().cloned().unwrap_or(id);
            return Err(ContextError::AlreadyInitialized { id: existing });
        }

        self.log(LogRecord::new(LogKind::ContextStartup).with_message(Arc::clone(&id)));

        let clock = Arc::new(ClockProducer::new(self.inner.cfg.clock_interval));
        self.register_producer(clock).await?;

        let drain = Arc::new(QueueProducer::new(
            Arc::clone(&self.inner.queue),
            self.inner.cfg.drain_interval,
            self.inner.cfg.drain_initial_delay,
        ));
        self.register_producer(drain).await?;
        Ok(())
    }

    /// Identity assigned at initialization, if any.
    pub fn id(&self) -> Option<Arc<str>> {
        self.inner.id.get().cloned()
    }

    /// The work queue drained by the built-in queue producer.
    ///
    /// Depositing an event here delivers it on a future drain tick instead
    /// of inline.
    pub fn work_queue(&self) -> Arc<dyn WorkQueue> {
        Arc::clone(&self.inner.queue)
    }

    /// A weak handle suitable for handing to bound components.
    pub fn handle(&self) -> Result<ContextHandle, ContextError> {
        let id = self.require_initialized()?;
        Ok(ContextHandle::new(id, Arc::downgrade(&self.inner)))
    }

    /// Registers and starts a producer.
    ///
    /// Adds it to the known set, binds it, logs the registration, verifies
    /// the producer reports this context's identity (a producer that fails
    /// to bind is never started), then starts it under a child cancellation
    /// token. Registering the same producer twice is allowed but causes
    /// duplicate delivery — callers must not double-register.
    pub async fn register_producer(&self, producer: Arc<dyn Produce>) -> Result<(), ContextError> {
        let id = self.require_initialized()?;

        self.inner.producers.write().await.push(Arc::clone(&producer));
        producer.bind(self.handle()?)?;

        self.log(LogRecord::new(LogKind::ProducerRegistered).with_source(producer.name()));

        let reported = producer.bound_context();
        if reported.as_deref() != Some(id.as_ref()) {
            let err = ContextError::ProducerNotBound {
                producer: producer.name().into(),
                expected: Arc::clone(&id),
                reported,
            };
            self.log_error(
                err.as_label(),
                LogRecord::new(LogKind::Error)
                    .with_message(err.to_string())
                    .with_source(producer.name()),
            );
            return Err(err);
        }

        producer.start(self.inner.cancel.child_token())
    }

    /// Registers a consumer under `kind`.
    ///
    /// The routing list for `kind` is created on first registration;
    /// subsequent registrations append, and dispatch order is registration
    /// order. Call once per kind to register one consumer for several kinds.
    pub async fn register_consumer(
        &self,
        kind: Kind,
        consumer: Arc<dyn Consume>,
    ) -> Result<(), ContextError> {
        self.require_initialized()?;
        consumer.bind(self.handle()?)?;

        self.inner
            .routes
            .write()
            .await
            .entry(kind)
            .or_default()
            .push(Arc::clone(&consumer));

        self.log(
            LogRecord::new(LogKind::ConsumerRegistered)
                .with_message(kind.as_str())
                .with_source(consumer.name()),
        );
        Ok(())
    }

    /// Raises an event, fire-and-forget.
    ///
    /// Logs an `EventSent` record tagged with `source`, spawns dispatch, and
    /// returns without waiting for consumer completion. The returned join
    /// handle may be awaited or discarded.
    pub fn raise_event(
        &self,
        ev: Event,
        source: impl Into<Arc<str>>,
    ) -> Result<JoinHandle<()>, ContextError> {
        let ev = self.accept_event(ev, source)?;
        let ctx = self.clone();
        Ok(tokio::spawn(async move { ctx.handle_event(ev).await }))
    }

    /// Raises an event and waits until every consumer finished handling it.
    ///
    /// Same path as [`raise_event`](Self::raise_event), but completion is
    /// awaited — the mode tests exercising delivery ordering need.
    pub async fn raise_event_awaited(
        &self,
        ev: Event,
        source: impl Into<Arc<str>>,
    ) -> Result<(), ContextError> {
        let ev = self.accept_event(ev, source)?;
        self.handle_event(ev).await;
        Ok(())
    }

    /// Shared raise prelude: precondition check, source tagging, send log.
    fn accept_event(
        &self,
        ev: Event,
        source: impl Into<Arc<str>>,
    ) -> Result<Event, ContextError> {
        self.require_initialized()?;
        let source = source.into();
        let ev = if ev.source.is_some() {
            ev
        } else {
            ev.with_source(Arc::clone(&source))
        };
        self.log(
            LogRecord::new(LogKind::EventSent)
                .with_message(ev.to_string())
                .with_source(source),
        );
        Ok(ev)
    }

    /// Appends to history and dispatches to every consumer for the kind.
    async fn handle_event(&self, ev: Event) {
        let _permit = match &self.inner.dispatch_sem {
            Some(sem) => match sem.acquire().await {
                Ok(permit) => Some(permit),
                Err(_) => return, // semaphore closed, context tearing down
            },
            None => None,
        };

        self.inner.history.write().await.push(ev.clone());

        let consumers: Vec<Arc<dyn Consume>> = {
            let routes = self.inner.routes.read().await;
            routes.get(&ev.kind).cloned().unwrap_or_default()
        };

        for consumer in consumers {
            // The declared-kind invariant is enforced here, centrally: a
            // consumer registered under a kind outside its declared set is
            // never invoked.
            if !consumer.accepts(ev.kind) {
                let err = DeliveryError::InvalidKind {
                    consumer: consumer.name().into(),
                    kind: ev.kind,
                    accepts: consumer.consumes().to_vec(),
                };
                let msg = err.to_string();
                self.log_error(
                    err.as_label(),
                    LogRecord::new(LogKind::Error)
                        .with_message(msg)
                        .with_source(consumer.name()),
                );
                continue;
            }

            let fut = consumer.on_event(&ev);
            if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                self.log_error(
                    "consumer_panicked",
                    LogRecord::new(LogKind::Error)
                        .with_message(panic_message(panic_err))
                        .with_source(consumer.name()),
                );
            }
        }
    }

    /// Point-in-time snapshot of the audit trail, insertion order.
    ///
    /// With `since`, only events stamped at or after it are returned.
    /// Safe to call concurrently with ongoing dispatch.
    pub async fn received_events(&self, since: Option<DateTime<Utc>>) -> Vec<Event> {
        self.inner.history.read().await.snapshot_since(since)
    }

    /// Writes a record to every attached log sink (non-blocking).
    pub fn log(&self, record: LogRecord) {
        self.inner.sinks.emit(record);
    }

    /// Writes an error record: forces `LogKind::Error` and attaches `error`.
    pub fn log_error(&self, error: impl Into<Arc<str>>, mut record: LogRecord) {
        record.kind = LogKind::Error;
        self.log(record.with_error(error));
    }

    /// Cancels all producer timers and marks the context shut down.
    ///
    /// Idempotent; in-flight dispatches run to completion.
    pub fn shutdown(&self) {
        if self.inner.cancel.is_cancelled() {
            return;
        }
        self.inner.cancel.cancel();
        let mut rec = LogRecord::new(LogKind::ContextShutdown);
        if let Some(id) = self.inner.id.get() {
            rec = rec.with_message(Arc::clone(id));
        }
        self.log(rec);
    }

    fn require_initialized(&self) -> Result<Arc<str>, ContextError> {
        self.inner.id.get().cloned().ok_or(ContextError::NotInitialized)
    }
}

/// Extracts a printable message from a caught panic payload.
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
