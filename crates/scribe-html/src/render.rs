use scribe_common::resource::load_text;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::writer::HtmlWriter;

/// A unit of markup that knows how to write itself onto a canvas.
///
/// Render nested components with [`HtmlWriter::render`] rather than calling
/// `render_on` directly, so each one gets its own context frame.
///
/// Closures become components through [`from_fn`].
pub trait Renderable {
    /// Write this component onto `html`.
    ///
    /// # Errors
    ///
    /// Structural errors from unbalanced markup, or the sink's I/O error.
    fn render_on(&self, html: &mut Canvas<'_>) -> Result<()>;
}

/// A component backed by a closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wrap a closure as a [`Renderable`].
///
/// ```ignore
/// let greeting = from_fn(|html| {
///     let name = html.context().get_string_or("name", "stranger");
///     html.element(Tag::P, name.as_str())?;
///     Ok(())
/// });
/// canvas.render(&greeting)?;
/// ```
pub fn from_fn<F>(render: F) -> FromFn<F>
where
    F: Fn(&mut Canvas<'_>) -> Result<()>,
{
    FromFn(render)
}

impl<F> Renderable for FromFn<F>
where
    F: Fn(&mut Canvas<'_>) -> Result<()>,
{
    fn render_on(&self, html: &mut Canvas<'_>) -> Result<()> {
        (self.0)(html)
    }
}

/// A static text resource written verbatim, loaded when rendered.
///
/// `location` is anything [`load_text`] accepts: a path, a `file:` URL, a
/// `data:` URL or an HTTP(S) URL. The resource is read on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    location: String,
}

impl Snippet {
    /// A snippet loaded from `location`.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Where the snippet is loaded from.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl Renderable for Snippet {
    fn render_on(&self, html: &mut Canvas<'_>) -> Result<()> {
        let text = load_text(&self.location)?;
        html.write_raw(text.as_str())?;
        Ok(())
    }
}
