//! The context: hub, builder, handle, and component binding.
//!
//! ## Contents
//! - [`EventContext`] — the routing and lifecycle hub
//! - [`ContextBuilder`] — assembles an inert context
//! - [`ContextHandle`] — weak reference handed to bound components
//! - [`Binding`] — bind-once state embedded in producers/consumers

mod binding;
mod builder;
mod context;
mod handle;

pub use binding::Binding;
pub use builder::ContextBuilder;
pub use context::EventContext;
pub use handle::ContextHandle;
