//! Error types used by the bus runtime and its deliveries.
//!
//! This module defines two main error enums:
//!
//! - [`ContextError`] — lifecycle and precondition failures raised by the
//!   context and by producer/consumer binding.
//! - [`DeliveryError`] — per-delivery contract violations.
//!
//! Both types provide `as_label` for stable snake_case identifiers in log
//! records. Precondition and contract violations surface synchronously to
//! the caller; handler failures are contained by dispatch and surfaced only
//! through the logging channel.

use std::sync::Arc;

use thiserror::Error;

use crate::events::Kind;

/// # Errors produced by the context lifecycle.
///
/// These represent misuse of the bus itself: using an uninitialized context,
/// initializing twice, or wiring a producer that never bound to its context.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ContextError {
    /// `initialize` was called on an already-initialized context.
    #[error("context {id} is already initialized")]
    AlreadyInitialized {
        /// The identity assigned by the first `initialize` call.
        id: Arc<str>,
    },

    /// An operation that requires an initialized context was called first.
    #[error("context is not initialized")]
    NotInitialized,

    /// A producer or consumer tried to emit before being bound to a context.
    #[error("{name} is not bound to a context")]
    NotBound {
        /// Name of the unbound component.
        name: Arc<str>,
    },

    /// A registered producer does not report the registering context's
    /// identity. The producer is never started.
    #[error("producer {producer} failed to bind: expected context {expected}, reports {reported:?}")]
    ProducerNotBound {
        /// Name of the misconfigured producer.
        producer: Arc<str>,
        /// Identity of the registering context.
        expected: Arc<str>,
        /// Identity the producer actually reports, if any.
        reported: Option<Arc<str>>,
    },

    /// A component already bound to one context was bound to another.
    #[error("{name} is already bound to context {bound}, refusing rebind to {attempted}")]
    BoundElsewhere {
        /// Name of the component.
        name: Arc<str>,
        /// Identity of the context it is bound to.
        bound: Arc<str>,
        /// Identity of the context the rebind targeted.
        attempted: Arc<str>,
    },

    /// The context behind a handle was dropped.
    #[error("context has been dropped")]
    ContextGone,
}

impl ContextError {
    /// Returns a short stable label (snake_case) for use in log records.
    pub fn as_label(&self) -> &'static str {
        match self {
            ContextError::AlreadyInitialized { .. } => "context_already_initialized",
            ContextError::NotInitialized => "context_not_initialized",
            ContextError::NotBound { .. } => "component_not_bound",
            ContextError::ProducerNotBound { .. } => "producer_not_bound",
            ContextError::BoundElsewhere { .. } => "component_bound_elsewhere",
            ContextError::ContextGone => "context_gone",
        }
    }
}

/// # Errors produced while delivering a single event.
///
/// Fatal to that delivery only; sibling consumers still receive the event.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The event's kind is outside the consumer's declared consumed set.
    ///
    /// This is a programming error (a consumer registered under a kind it
    /// does not declare); the offending handler is never invoked.
    #[error("consumer {consumer} does not accept kind {kind}; accepts {accepts:?}")]
    InvalidKind {
        /// Name of the consumer whose contract was violated.
        consumer: Arc<str>,
        /// The offending event kind.
        kind: Kind,
        /// The consumer's declared consumed set.
        accepts: Vec<Kind>,
    },
}

impl DeliveryError {
    /// Returns a short stable label (snake_case) for use in log records.
    pub fn as_label(&self) -> &'static str {
        match self {
            DeliveryError::InvalidKind { .. } => "delivery_invalid_kind",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        let err = ContextError::NotInitialized;
        assert_eq!(err.as_label(), "context_not_initialized");

        let err = DeliveryError::InvalidKind {
            consumer: "audit".into(),
            kind: Kind::new("time"),
            accepts: vec![Kind::new("log")],
        };
        assert_eq!(err.as_label(), "delivery_invalid_kind");
    }

    #[test]
    fn invalid_kind_names_offender_and_accepted_set() {
        let err = DeliveryError::InvalidKind {
            consumer: "audit".into(),
            kind: Kind::new("time"),
            accepts: vec![Kind::new("log")],
        };
        let msg = err.to_string();
        assert!(msg.contains("audit"), "{msg}");
        assert!(msg.contains("time"), "{msg}");
        assert!(msg.contains("log"), "{msg}");
    }
}
