//! # Producer contract.
//!
//! A producer originates events, push-based (emitting whenever its own
//! logic decides) or poll-based (a timer loop draining some buffer). The
//! context drives the lifecycle: `bind` wires the producer to exactly one
//! context, then `start` hands it a cancellation token and lets it spawn
//! its background work.
//!
//! Binding before emission is a fatal precondition: a producer's emit path
//! must go through its [`Binding`](crate::context::Binding) handle, which
//! fails with [`ContextError::NotBound`](crate::error::ContextError) until
//! the context has called `bind`.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::context::ContextHandle;
use crate::error::ContextError;

/// Contract for event producers.
///
/// Lifecycle, driven by [`EventContext::register_producer`](crate::context::EventContext::register_producer):
/// 1. `bind(handle)` — one-time wiring to the registering context;
/// 2. the context verifies [`bound_context`](Produce::bound_context) reports
///    its own identity (a producer that fails to bind is never started);
/// 3. `start(token)` — spawn background work, stopping when the token fires.
pub trait Produce: Send + Sync + 'static {
    /// Returns a stable, human-readable producer name.
    fn name(&self) -> &str;

    /// Binds the producer to a context. Called once per registration.
    fn bind(&self, ctx: ContextHandle) -> Result<(), ContextError>;

    /// Identity of the context this producer is bound to, if any.
    fn bound_context(&self) -> Option<Arc<str>>;

    /// Starts the producer's background work.
    ///
    /// Fails with [`ContextError::NotBound`] when called before `bind`.
    /// Implementations should stop promptly when `cancel` fires.
    fn start(&self, cancel: CancellationToken) -> Result<(), ContextError>;
}
