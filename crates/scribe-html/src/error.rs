use std::io;

use scribe_common::resource::ResourceError;
use thiserror::Error;

/// Everything that can abort a render.
///
/// The structural variants (`NullTag`, `EmptyStack`, `UnexpectedTag`,
/// `UnbalancedGate`) mean the calling code pairs its opens and closes
/// incorrectly. They are bugs to fix, not conditions to recover from.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// An element was opened without a name.
    #[error("null tag: cannot open an element without a name")]
    NullTag,
    /// A close was requested with no open element.
    #[error("empty stack: no open element to close")]
    EmptyStack,
    /// The open element is not the one the caller meant to close.
    #[error("unexpected tag: expected {expected} but {found} is open")]
    UnexpectedTag {
        /// Closing markup the caller asked for.
        expected: String,
        /// Closing markup on top of the stack.
        found: String,
    },
    /// A skipped conditional region ended with elements still open.
    #[error("unbalanced conditional region: {0} element(s) still open at end_if")]
    UnbalancedGate(usize),
    /// Escaping was requested but the canvas has no escape handler.
    #[error("no escape handler configured for this canvas")]
    MissingEscapeHandler,
    /// The output sink rejected a write.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A text resource could not be loaded.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, CanvasError>;
