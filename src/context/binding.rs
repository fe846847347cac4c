//! # Context-binding facet for producers and consumers.
//!
//! [`Binding`] is the "has an identity, has an owning context" capability
//! that every producer and consumer composes in (instead of inheriting a
//! base class). It is set exactly once: the first successful `bind` wins,
//! rebinding to the same context is idempotent, and rebinding to a different
//! context is refused.

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use crate::error::ContextError;

use super::handle::ContextHandle;

/// One-time binding of a named component to a context.
#[derive(Debug)]
pub struct Binding {
    name: Cow<'static, str>,
    ctx: OnceLock<ContextHandle>,
}

impl Binding {
    /// Creates an unbound binding for a component with the given name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ctx: OnceLock::new(),
        }
    }

    /// The component's stable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binds to the given context.
    ///
    /// Idempotent for the same context; binding a component that is already
    /// bound to a *different* context fails with
    /// [`ContextError::BoundElsewhere`].
    pub fn bind(&self, handle: ContextHandle) -> Result<(), ContextError> {
        let attempted = Arc::clone(handle.id());
        let bound = self.ctx.get_or_init(|| handle);
        if *bound.id() == attempted {
            Ok(())
        } else {
            Err(ContextError::BoundElsewhere {
                name: self.name.as_ref().into(),
                bound: Arc::clone(bound.id()),
                attempted,
            })
        }
    }

    /// Returns the bound handle, or [`ContextError::NotBound`] before `bind`.
    ///
    /// This is the fatal precondition gate: components must refuse to emit
    /// until they are bound.
    pub fn handle(&self) -> Result<&ContextHandle, ContextError> {
        self.ctx.get().ok_or_else(|| ContextError::NotBound {
            name: self.name.as_ref().into(),
        })
    }

    /// Identity of the bound context, if any.
    pub fn bound_context(&self) -> Option<Arc<str>> {
        self.ctx.get().map(|h| Arc::clone(h.id()))
    }

    pub fn is_bound(&self) -> bool {
        self.ctx.get().is_some()
    }
}
