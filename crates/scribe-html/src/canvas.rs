use std::io;

use scribe_common::warning::warn_once;
use scribe_context::ScopedContext;

use crate::attributes::WriteCharacters;
use crate::config::CanvasConfig;
use crate::error::{CanvasError, Result};
use crate::escape::{EscapePolicy, write_with_policy};
use crate::gate::Gate;
use crate::render::Renderable;
use crate::sink::{CharacterSink, StreamSink};
use crate::vocabulary::Tag;
use crate::writer::HtmlWriter;

/// The stream serializer.
///
/// Owns the output sink, the stack of pending closing markup, the escape
/// handler, the id counter and the scoped render context. One canvas serves
/// one document (or one isolated fragment) and one render pipeline at a time.
///
/// Output appears in exactly the order operations are called. The canvas
/// never forces the stack to be empty at the end; [`Canvas::is_balanced`]
/// reports whether it is.
pub struct Canvas<'s> {
    sink: Box<dyn CharacterSink + 's>,
    /// Closing markup of every unclosed element, innermost last.
    open_tags: Vec<String>,
    context: ScopedContext,
    last_id: u64,
    config: CanvasConfig,
}

impl Canvas<'static> {
    /// A canvas writing to an in-memory buffer with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// A canvas writing to an in-memory buffer.
    #[must_use]
    pub fn with_config(config: CanvasConfig) -> Self {
        Self::with_sink(String::new(), config)
    }
}

impl<'s> Canvas<'s> {
    /// A canvas writing to an arbitrary sink.
    pub fn with_sink(sink: impl CharacterSink + 's, config: CanvasConfig) -> Self {
        Self {
            sink: Box::new(sink),
            open_tags: Vec::new(),
            context: ScopedContext::new(),
            last_id: 0,
            config,
        }
    }

    /// A canvas writing straight to `writer` (file, socket, response body).
    ///
    /// [`Canvas::current_output`] returns `None` for such a canvas.
    pub fn for_stream(writer: impl io::Write + 's, config: CanvasConfig) -> Self {
        Self::with_sink(StreamSink::new(writer), config)
    }

    /// Everything written so far, if the sink keeps it.
    #[must_use]
    pub fn current_output(&self) -> Option<&str> {
        self.sink.written()
    }

    /// Flush the sink.
    ///
    /// # Errors
    ///
    /// Returns the sink's I/O error.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Number of unclosed elements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open_tags.len()
    }

    /// Whether every opened element has been closed.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.open_tags.is_empty()
    }

    /// Closing markup still pending, innermost first.
    pub fn pending_closes(&self) -> impl Iterator<Item = &str> {
        self.open_tags.iter().rev().map(String::as_str)
    }

    /// A fresh identifier, `id1`, `id2`, … (prefix from the config).
    ///
    /// Unique within this canvas only.
    pub fn next_id(&mut self) -> String {
        self.last_id += 1;
        format!("{}{}", self.config.id_prefix, self.last_id)
    }

    /// The render context.
    #[must_use]
    pub const fn context(&self) -> &ScopedContext {
        &self.context
    }

    /// The render context, for writing bindings into the current frame.
    pub const fn context_mut(&mut self) -> &mut ScopedContext {
        &mut self.context
    }

    /// The configuration this canvas was built with.
    #[must_use]
    pub const fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Guard a region of markup on `condition`.
    ///
    /// With `true` the returned gate writes through to this canvas. With
    /// `false` it swallows everything up to the matching
    /// [`Gate::end_if`], counting opens and closes so the region stays
    /// balanced without writing a character.
    ///
    /// ```ignore
    /// canvas
    ///     .if_(user.is_admin)
    ///     .tag(Tag::Div)?.write_text("admin tools")?.end(Tag::Div)?
    ///     .end_if()?
    ///     .tag(Tag::Footer)?;
    /// ```
    pub fn if_(&mut self, condition: bool) -> Gate<'_, 's> {
        Gate::new(self, condition)
    }

    /// Render `component` into a new buffer canvas and return the markup.
    ///
    /// The fragment canvas shares this canvas's config and starts from a
    /// copy of its context; its stack, ids and output are its own.
    ///
    /// # Errors
    ///
    /// Whatever the component returns.
    pub fn render_fragment(&self, component: &dyn Renderable) -> Result<String> {
        let mut fragment = Canvas::with_sink(String::new(), self.config.clone());
        fragment.context = self.context.clone();
        let _ = fragment.render(component)?;
        Ok(fragment.current_output().unwrap_or_default().to_string())
    }

    fn check_deprecated(&self, name: &str) {
        if self.config.warn_on_deprecated
            && Tag::from_name(name).is_some_and(Tag::is_deprecated)
        {
            warn_once("Canvas", &format!("<{name}> is an obsolete element"));
        }
    }

    fn write_open(&mut self, name: &str, attributes: Option<&dyn WriteCharacters>) -> Result<()> {
        if name.is_empty() {
            return Err(CanvasError::NullTag);
        }
        self.check_deprecated(name);
        // Staged so a failing attribute leaves no partial tag in the sink.
        let mut markup = format!("<{name}");
        if let Some(attributes) = attributes {
            attributes.write_characters(&mut markup, self.config.escaper.as_deref())?;
        }
        self.sink.append(&markup)?;
        Ok(())
    }
}

impl Default for Canvas<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter for Canvas<'_> {
    fn open_tag_with(&mut self, name: &str, attributes: Option<&dyn WriteCharacters>) -> Result<&mut Self> {
        self.write_open(name, attributes)?;
        self.sink.append_char('>')?;
        self.open_tags.push(format!("</{name}>"));
        Ok(self)
    }

    fn open_void_tag(&mut self, name: &str, attributes: Option<&dyn WriteCharacters>) -> Result<&mut Self> {
        self.write_open(name, attributes)?;
        self.sink.append("/>")?;
        Ok(self)
    }

    fn close_tag(&mut self) -> Result<&mut Self> {
        let closing = self.open_tags.pop().ok_or(CanvasError::EmptyStack)?;
        self.sink.append(&closing)?;
        Ok(self)
    }

    fn close_tag_expecting(&mut self, expected: &str) -> Result<&mut Self> {
        let found = self.open_tags.last().ok_or(CanvasError::EmptyStack)?;
        if found != expected {
            return Err(CanvasError::UnexpectedTag {
                expected: expected.to_string(),
                found: found.clone(),
            });
        }
        self.close_tag()
    }

    fn write_text_with<'t>(&mut self, text: impl Into<Option<&'t str>>, policy: EscapePolicy) -> Result<&mut Self> {
        if let Some(text) = text.into() {
            let escaper = self.config.escaper.as_deref();
            write_with_policy(escaper, text, policy, self.sink.as_mut())?;
        }
        Ok(self)
    }

    fn write_char(&mut self, ch: char) -> Result<&mut Self> {
        self.sink.append_char(ch)?;
        Ok(self)
    }

    fn write_raw_block(&mut self, open: &str, content: &str, close: &str) -> Result<&mut Self> {
        self.sink.append(open)?;
        self.sink.append(content)?;
        self.open_tags.push(close.to_string());
        Ok(self)
    }

    fn render(&mut self, component: &dyn Renderable) -> Result<&mut Self> {
        self.context.push();
        let rendered = component.render_on(self);
        let _frame = self.context.pop();
        rendered?;
        Ok(self)
    }
}
