use std::fmt;
use std::rc::Rc;

use crate::escape::{EscapeHandler, HtmlEscaper};

/// Construction-time settings for a [`crate::Canvas`].
///
/// The escape handler is injected here rather than registered globally, so
/// each canvas (and each test) decides its own.
#[derive(Clone)]
pub struct CanvasConfig {
    pub(crate) escaper: Option<Rc<dyn EscapeHandler>>,
    pub(crate) id_prefix: String,
    pub(crate) warn_on_deprecated: bool,
}

impl CanvasConfig {
    /// The defaults: [`HtmlEscaper`], ids `id1`, `id2`, …, and warnings for
    /// obsolete elements.
    #[must_use]
    pub fn new() -> Self {
        Self {
            escaper: Some(Rc::new(HtmlEscaper)),
            id_prefix: "id".to_string(),
            warn_on_deprecated: true,
        }
    }

    /// Use `escaper` for every escaping write.
    #[must_use]
    pub fn with_escaper(mut self, escaper: impl EscapeHandler + 'static) -> Self {
        self.escaper = Some(Rc::new(escaper));
        self
    }

    /// Configure no escape handler. Raw writes still work; the first write
    /// that needs escaping fails with
    /// [`crate::CanvasError::MissingEscapeHandler`].
    #[must_use]
    pub fn without_escaper(mut self) -> Self {
        self.escaper = None;
        self
    }

    /// Prefix for identifiers returned by [`crate::Canvas::next_id`].
    #[must_use]
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Whether opening an obsolete element logs a one-time warning.
    #[must_use]
    pub fn warn_on_deprecated(mut self, warn: bool) -> Self {
        self.warn_on_deprecated = warn;
        self
    }

    /// Whether an escape handler is configured.
    #[must_use]
    pub const fn has_escaper(&self) -> bool {
        self.escaper.is_some()
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CanvasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasConfig")
            .field("escaper", &self.escaper.as_ref().map(|_| "<handler>"))
            .field("id_prefix", &self.id_prefix)
            .field("warn_on_deprecated", &self.warn_on_deprecated)
            .finish()
    }
}
