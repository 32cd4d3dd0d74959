use crate::attributes::WriteCharacters;
use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};
use crate::escape::EscapePolicy;
use crate::render::Renderable;
use crate::writer::HtmlWriter;

/// A conditionally guarded region of markup, returned by [`Canvas::if_`].
///
/// `Pass` writes through to the canvas. `Skip` is the null-object variant:
/// the same [`HtmlWriter`] capability with every write discarded.
pub enum Gate<'c, 's> {
    /// The condition held; operations reach the canvas.
    Pass(&'c mut Canvas<'s>),
    /// The condition failed; operations are swallowed.
    Skip(SkipSink<'c, 's>),
}

impl<'c, 's> Gate<'c, 's> {
    pub(crate) fn new(canvas: &'c mut Canvas<'s>, condition: bool) -> Self {
        if condition {
            Self::Pass(canvas)
        } else {
            Self::Skip(SkipSink { canvas, depth: 0 })
        }
    }

    /// Whether this gate discards what is written through it.
    #[must_use]
    pub const fn is_skipping(&self) -> bool {
        matches!(self, Self::Skip(_))
    }

    /// End the guarded region and continue on the canvas.
    ///
    /// # Errors
    ///
    /// [`CanvasError::UnbalancedGate`] if a skipped region opened elements it
    /// did not close. A passing gate never fails here; elements it opened are
    /// real and stay open on the canvas.
    ///
    /// The outcome therefore depends on the condition: a region that leaves
    /// an element open ends cleanly when it passed and fails when it was
    /// skipped. Close everything inside the region to get the same result
    /// either way.
    pub fn end_if(&mut self) -> Result<&mut Canvas<'s>> {
        match self {
            Self::Pass(canvas) => Ok(&mut **canvas),
            Self::Skip(skip) if skip.depth > 0 => Err(CanvasError::UnbalancedGate(skip.depth)),
            Self::Skip(skip) => Ok(&mut *skip.canvas),
        }
    }

    /// Guard a nested region. Inside a skipped region the nested one is
    /// skipped whatever `condition` says.
    pub fn if_(&mut self, condition: bool) -> Gate<'_, 's> {
        match self {
            Self::Pass(canvas) => canvas.if_(condition),
            Self::Skip(skip) => Gate::new(&mut *skip.canvas, false),
        }
    }
}

/// Discards every operation while tracking nesting depth.
///
/// Each would-be open adds one to the depth and each would-be close consumes
/// one, so the region's structure is still checked even though nothing is
/// written and the canvas stack is never touched.
pub struct SkipSink<'c, 's> {
    canvas: &'c mut Canvas<'s>,
    depth: usize,
}

impl SkipSink<'_, '_> {
    /// Opens not yet matched by a close.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    fn open(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(CanvasError::NullTag);
        }
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(CanvasError::EmptyStack);
        }
        self.depth -= 1;
        Ok(())
    }
}

impl HtmlWriter for SkipSink<'_, '_> {
    fn open_tag_with(&mut self, name: &str, _attributes: Option<&dyn WriteCharacters>) -> Result<&mut Self> {
        self.open(name)?;
        Ok(self)
    }

    fn open_void_tag(&mut self, name: &str, _attributes: Option<&dyn WriteCharacters>) -> Result<&mut Self> {
        if name.is_empty() {
            return Err(CanvasError::NullTag);
        }
        Ok(self)
    }

    fn close_tag(&mut self) -> Result<&mut Self> {
        self.close()?;
        Ok(self)
    }

    fn close_tag_expecting(&mut self, _expected: &str) -> Result<&mut Self> {
        self.close()?;
        Ok(self)
    }

    fn write_text_with<'t>(&mut self, _text: impl Into<Option<&'t str>>, _policy: EscapePolicy) -> Result<&mut Self> {
        Ok(self)
    }

    fn write_char(&mut self, _ch: char) -> Result<&mut Self> {
        Ok(self)
    }

    fn write_raw_block(&mut self, _open: &str, _content: &str, _close: &str) -> Result<&mut Self> {
        self.depth += 1;
        Ok(self)
    }

    fn render(&mut self, _component: &dyn Renderable) -> Result<&mut Self> {
        Ok(self)
    }
}

impl HtmlWriter for Gate<'_, '_> {
    fn open_tag_with(&mut self, name: &str, attributes: Option<&dyn WriteCharacters>) -> Result<&mut Self> {
        match self {
            Self::Pass(canvas) => {
                canvas.open_tag_with(name, attributes)?;
            }
            Self::Skip(skip) => {
                skip.open_tag_with(name, attributes)?;
            }
        }
        Ok(self)
    }

    fn open_void_tag(&mut self, name: &str, attributes: Option<&dyn WriteCharacters>) -> Result<&mut Self> {
        match self {
            Self::Pass(canvas) => {
                canvas.open_void_tag(name, attributes)?;
            }
            Self::Skip(skip) => {
                skip.open_void_tag(name, attributes)?;
            }
        }
        Ok(self)
    }

    fn close_tag(&mut self) -> Result<&mut Self> {
        match self {
            Self::Pass(canvas) => {
                canvas.close_tag()?;
            }
            Self::Skip(skip) => {
                skip.close_tag()?;
            }
        }
        Ok(self)
    }

    fn close_tag_expecting(&mut self, expected: &str) -> Result<&mut Self> {
        match self {
            Self::Pass(canvas) => {
                canvas.close_tag_expecting(expected)?;
            }
            Self::Skip(skip) => {
                skip.close_tag_expecting(expected)?;
            }
        }
        Ok(self)
    }

    fn write_text_with<'t>(&mut self, text: impl Into<Option<&'t str>>, policy: EscapePolicy) -> Result<&mut Self> {
        match self {
            Self::Pass(canvas) => {
                canvas.write_text_with(text, policy)?;
            }
            Self::Skip(skip) => {
                skip.write_text_with(text, policy)?;
            }
        }
        Ok(self)
    }

    fn write_char(&mut self, ch: char) -> Result<&mut Self> {
        match self {
            Self::Pass(canvas) => {
                canvas.write_char(ch)?;
            }
            Self::Skip(skip) => {
                skip.write_char(ch)?;
            }
        }
        Ok(self)
    }

    fn write_raw_block(&mut self, open: &str, content: &str, close: &str) -> Result<&mut Self> {
        match self {
            Self::Pass(canvas) => {
                canvas.write_raw_block(open, content, close)?;
            }
            Self::Skip(skip) => {
                skip.write_raw_block(open, content, close)?;
            }
        }
        Ok(self)
    }

    fn render(&mut self, component: &dyn Renderable) -> Result<&mut Self> {
        match self {
            Self::Pass(canvas) => {
                canvas.render(component)?;
            }
            Self::Skip(skip) => {
                skip.render(component)?;
            }
        }
        Ok(self)
    }
}
