use crate::attributes::WriteCharacters;
use crate::error::Result;
use crate::escape::EscapePolicy;
use crate::render::Renderable;
use crate::vocabulary::Tag;

/// The markup-writing capability shared by [`crate::Canvas`] and
/// [`crate::Gate`].
///
/// Implementors supply the stack primitives; the vocabulary conveniences
/// (`tag`, `end`, `element`, …) are built on top of them here, once. Every
/// method returns `&mut Self` so calls chain with `?`:
///
/// ```ignore
/// html.tag(Tag::Ul)?
///     .element(Tag::Li, "one")?
///     .element(Tag::Li, "two")?
///     .end(Tag::Ul)?;
/// ```
pub trait HtmlWriter: Sized {
    /// Write `<name` + attributes + `>` and push `</name>`.
    ///
    /// # Errors
    ///
    /// [`crate::CanvasError::NullTag`] for an empty name, or a write error.
    fn open_tag_with(&mut self, name: &str, attributes: Option<&dyn WriteCharacters>) -> Result<&mut Self>;

    /// Write `<name/>` or `<name .../>`. Nothing is pushed.
    ///
    /// # Errors
    ///
    /// [`crate::CanvasError::NullTag`] for an empty name, or a write error.
    fn open_void_tag(&mut self, name: &str, attributes: Option<&dyn WriteCharacters>) -> Result<&mut Self>;

    /// Pop the innermost closing markup and write it.
    ///
    /// # Errors
    ///
    /// [`crate::CanvasError::EmptyStack`] if nothing is open, or a write error.
    fn close_tag(&mut self) -> Result<&mut Self>;

    /// Like [`HtmlWriter::close_tag`], but first check that the innermost
    /// closing markup equals `expected`.
    ///
    /// # Errors
    ///
    /// [`crate::CanvasError::UnexpectedTag`] on a mismatch (nothing is popped
    /// or written), [`crate::CanvasError::EmptyStack`] if nothing is open, or
    /// a write error.
    fn close_tag_expecting(&mut self, expected: &str) -> Result<&mut Self>;

    /// Write `text` under `policy`. `None` writes nothing.
    ///
    /// # Errors
    ///
    /// [`crate::CanvasError::MissingEscapeHandler`] when escaping without a
    /// handler, or a write error.
    fn write_text_with<'t>(&mut self, text: impl Into<Option<&'t str>>, policy: EscapePolicy) -> Result<&mut Self>;

    /// Write one character verbatim.
    ///
    /// # Errors
    ///
    /// A write error from the sink.
    fn write_char(&mut self, ch: char) -> Result<&mut Self>;

    /// Write `open` and `content` verbatim and push `close`, so the block is
    /// closed by the ordinary close path.
    ///
    /// # Errors
    ///
    /// A write error from the sink.
    fn write_raw_block(&mut self, open: &str, content: &str, close: &str) -> Result<&mut Self>;

    /// Render a nested component inside its own context frame.
    ///
    /// # Errors
    ///
    /// Whatever the component returns.
    fn render(&mut self, component: &dyn Renderable) -> Result<&mut Self>;

    /// Write `<name>` and push `</name>`.
    ///
    /// # Errors
    ///
    /// See [`HtmlWriter::open_tag_with`].
    fn open_tag(&mut self, name: &str) -> Result<&mut Self> {
        self.open_tag_with(name, None)
    }

    /// Write `text` escaped.
    ///
    /// # Errors
    ///
    /// See [`HtmlWriter::write_text_with`].
    fn write_text<'t>(&mut self, text: impl Into<Option<&'t str>>) -> Result<&mut Self> {
        self.write_text_with(text, EscapePolicy::EscapeChars)
    }

    /// Write `text` unchanged.
    ///
    /// # Errors
    ///
    /// See [`HtmlWriter::write_text_with`].
    fn write_raw<'t>(&mut self, text: impl Into<Option<&'t str>>) -> Result<&mut Self> {
        self.write_text_with(text, EscapePolicy::NoEscape)
    }

    /// Open `tag`; void elements are written self-closed and not pushed.
    ///
    /// # Errors
    ///
    /// A write error from the sink.
    fn tag(&mut self, tag: Tag) -> Result<&mut Self> {
        if tag.is_void() {
            self.open_void_tag(tag.name(), None)
        } else {
            self.open_tag_with(tag.name(), None)
        }
    }

    /// Open `tag` with attributes; void elements are not pushed.
    ///
    /// # Errors
    ///
    /// A write error, or a missing escape handler for escaped attributes.
    fn tag_with(&mut self, tag: Tag, attributes: &dyn WriteCharacters) -> Result<&mut Self> {
        if tag.is_void() {
            self.open_void_tag(tag.name(), Some(attributes))
        } else {
            self.open_tag_with(tag.name(), Some(attributes))
        }
    }

    /// Close `tag`, which must be the innermost open element.
    ///
    /// # Errors
    ///
    /// See [`HtmlWriter::close_tag_expecting`].
    fn end(&mut self, tag: Tag) -> Result<&mut Self> {
        self.close_tag_expecting(&tag.closing_markup())
    }

    /// Open `tag`, write `text` escaped, close `tag`.
    ///
    /// # Errors
    ///
    /// Any error of the three steps. Void tags fail on the close.
    fn element<'t>(&mut self, tag: Tag, text: impl Into<Option<&'t str>>) -> Result<&mut Self> {
        self.tag(tag)?.write_text(text)?.end(tag)
    }

    /// Write `<!--text-->`. The text is not escaped.
    ///
    /// # Errors
    ///
    /// A write error from the sink.
    fn comment(&mut self, text: &str) -> Result<&mut Self> {
        self.write_raw("<!--")?.write_raw(text)?.write_raw("-->")
    }

    /// Write the HTML5 doctype.
    ///
    /// # Errors
    ///
    /// A write error from the sink.
    fn doctype(&mut self) -> Result<&mut Self> {
        self.write_raw("<!DOCTYPE html>")
    }

    /// Open a `<![CDATA[` block holding `content`; close it with
    /// [`HtmlWriter::close_tag`].
    ///
    /// # Errors
    ///
    /// A write error from the sink.
    fn cdata(&mut self, content: &str) -> Result<&mut Self> {
        self.write_raw_block("<![CDATA[", content, "]]>")
    }
}
