//! # Consumer contract and closure-backed consumer.
//!
//! A consumer declares the set of event kinds it accepts and a handler the
//! context invokes per matching event. The declared set is an invariant:
//! dispatch never hands a consumer an event outside it — a registration
//! that would do so is a programming error, reported loudly as
//! [`DeliveryError::InvalidKind`](crate::error::DeliveryError) and skipped.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::context::{Binding, ContextHandle};
use crate::error::ContextError;
use crate::events::{Event, Kind};

/// Contract for event consumers.
///
/// `on_event` is called from the dispatch path, one event at a time and in
/// registration order for a given event. Handlers are isolated: a panic is
/// caught, logged, and does not affect sibling consumers.
#[async_trait]
pub trait Consume: Send + Sync + 'static {
    /// Returns a stable, human-readable consumer name.
    fn name(&self) -> &str;

    /// The declared set of event kinds this consumer accepts.
    fn consumes(&self) -> &[Kind];

    /// Binds the consumer to a context. Called on every registration;
    /// idempotent for the same context.
    fn bind(&self, ctx: ContextHandle) -> Result<(), ContextError>;

    /// Handles a single event of a declared kind.
    async fn on_event(&self, ev: &Event);

    /// Whether `kind` is in the declared consumed set.
    fn accepts(&self, kind: Kind) -> bool {
        self.consumes().contains(&kind)
    }
}

/// Closure-backed consumer.
///
/// Wraps `F: Fn(Event) -> Fut`, producing a fresh future per event; shared
/// state goes through an explicit `Arc` inside the closure.
///
/// ## Example
/// ```rust
/// use omnibus::{Event, FnConsumer, Kind};
///
/// const AUDIT: Kind = Kind::new("audit");
///
/// let c = FnConsumer::arc("auditor", vec![AUDIT], |ev: Event| async move {
///     println!("{ev}");
/// });
/// assert_eq!(c.name(), "auditor");
/// assert!(c.consumes().contains(&AUDIT));
/// # use omnibus::Consume;
/// ```
pub struct FnConsumer {
    binding: Binding,
    kinds: Vec<Kind>,
    f: Box<dyn Fn(Event) -> BoxFuture<'static, ()> + Send + Sync>,
}

impl FnConsumer {
    /// Creates a closure-backed consumer declaring the given kinds.
    pub fn new<F, Fut>(name: &'static str, kinds: Vec<Kind>, f: F) -> Self
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            binding: Binding::new(name),
            kinds,
            f: Box::new(move |ev| Box::pin(f(ev))),
        }
    }

    /// Creates the consumer and returns it as a shared handle.
    pub fn arc<F, Fut>(name: &'static str, kinds: Vec<Kind>, f: F) -> Arc<Self>
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Arc::new(Self::new(name, kinds, f))
    }
}

#[async_trait]
impl Consume for FnConsumer {
    fn name(&self) -> &str {
        self.binding.name()
    }

    fn consumes(&self) -> &[Kind] {
        &self.kinds
    }

    fn bind(&self, ctx: ContextHandle) -> Result<(), ContextError> {
        self.binding.bind(ctx)
    }

    async fn on_event(&self, ev: &Event) {
        (self.f)(ev.clone()).await;
    }
}
