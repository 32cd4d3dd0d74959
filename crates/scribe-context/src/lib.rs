//! Scoped render context for the Scribe HTML builder.
//!
//! # Design
//!
//! A [`ScopedContext`] is a stack of [`ContextMap`] frames. The canvas pushes
//! a frame before rendering a nested component and pops it afterwards, so a
//! component sees its own bindings and those of its ancestors, never those of
//! its siblings or descendants.
//!
//! Values are JSON-like ([`Value`]), which keeps the store untyped while the
//! [`Bindings`] trait layers typed accessors over it. Request-derived data is
//! grouped under the reserved keys in [`request`].

/// Typed accessors shared by every key-value store in this crate.
pub mod bindings;
/// A single frame of key-value bindings.
pub mod map;
/// Reserved keys for request-derived bindings.
pub mod request;
/// The frame stack itself.
pub mod scoped;

pub use bindings::Bindings;
pub use map::ContextMap;
pub use scoped::ScopedContext;

/// An untyped context value.
pub type Value = serde_json::Value;

/// A nested mapping stored under a single context key.
pub type NestedMap = serde_json::Map<String, Value>;
