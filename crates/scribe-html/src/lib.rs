//! Stack-checked HTML canvas for the Scribe builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Canvas** - a one-pass, write-only serializer that records the closing
//!   markup of every open element and checks each close against it
//! - **Escaping** - a pluggable [`EscapeHandler`] with [`HtmlEscaper`] as default
//! - **Attributes** - an ordered builder serialized through [`WriteCharacters`]
//! - **Vocabulary** - [`Tag`] and [`AttrName`] tables driving one generic
//!   open/close/attribute engine
//! - **Conditional regions** - [`Canvas::if_`] and the discarding [`SkipSink`]
//! - **Composition** - [`Renderable`] components rendered in their own
//!   [`scribe_context::ScopedContext`] frame
//!
//! # Example
//!
//! ```ignore
//! use scribe_html::{Attributes, Canvas, HtmlWriter, Tag};
//!
//! let mut html = Canvas::new();
//! html.tag(Tag::Html)?
//!     .tag(Tag::Body)?
//!     .tag_with(Tag::A, &Attributes::new().href("/?a=1&b=2"))?
//!     .write_text("Fish & Chips")?
//!     .end(Tag::A)?
//!     .end(Tag::Body)?
//!     .end(Tag::Html)?;
//! assert_eq!(
//!     html.current_output(),
//!     Some(r#"<html><body><a href="/?a=1&amp;b=2">Fish &amp; Chips</a></body></html>"#)
//! );
//! ```
//!
//! # Not Implemented
//!
//! - Reading HTML back (this is not a parser)
//! - Caching of loaded [`Snippet`] resources

/// Attribute builder and the character-writing contract.
pub mod attributes;
/// The canvas itself.
pub mod canvas;
/// Construction-time canvas settings.
pub mod config;
/// Error type for rendering.
pub mod error;
/// Escape policy and handlers.
pub mod escape;
/// Conditional regions.
pub mod gate;
/// Component composition.
pub mod render;
/// Output sinks.
pub mod sink;
/// Element and attribute tables.
pub mod vocabulary;
/// The shared markup-writing capability.
pub mod writer;

pub use attributes::{Attribute, Attributes, WriteCharacters};
pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::{CanvasError, Result};
pub use escape::{EscapeHandler, EscapePolicy, HtmlEscaper, escape_html};
pub use gate::{Gate, SkipSink};
pub use render::{FromFn, Renderable, Snippet, from_fn};
pub use sink::{CharacterSink, StreamSink};
pub use vocabulary::{AttrKind, AttrName, Tag};
pub use writer::HtmlWriter;

pub use scribe_context as context;
