use std::convert::Infallible;
use std::io;

use crate::error::{CanvasError, Result};
use crate::sink::CharacterSink;

/// Whether a write passes through the escape handler first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EscapePolicy {
    /// Replace markup-significant characters with entities.
    #[default]
    EscapeChars,
    /// Write the characters unchanged.
    NoEscape,
}

impl EscapePolicy {
    /// `EscapeChars` when `escape` is true.
    #[must_use]
    pub const fn from_bool(escape: bool) -> Self {
        if escape { Self::EscapeChars } else { Self::NoEscape }
    }

    /// Whether this policy escapes.
    #[must_use]
    pub const fn escapes(self) -> bool {
        matches!(self, Self::EscapeChars)
    }
}

/// Converts unsafe characters into markup-safe entities while writing.
pub trait EscapeHandler {
    /// Write `text` to `sink`, escaped.
    ///
    /// # Errors
    ///
    /// Returns the sink's I/O error if a write fails.
    fn escape(&self, text: &str, sink: &mut dyn CharacterSink) -> io::Result<()>;
}

/// The default handler: escapes `&`, `<`, `>`, `"` and `'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlEscaper;

impl HtmlEscaper {
    const fn entity(c: char) -> Option<&'static str> {
        match c {
            '&' => Some("&amp;"),
            '<' => Some("&lt;"),
            '>' => Some("&gt;"),
            '"' => Some("&quot;"),
            '\'' => Some("&#39;"),
            _ => None,
        }
    }
}

impl EscapeHandler for HtmlEscaper {
    fn escape(&self, text: &str, sink: &mut dyn CharacterSink) -> io::Result<()> {
        for_each_run(text, |run| sink.append(run))
    }
}

/// Feed `text` to `emit` as alternating unescaped runs and entities, so that
/// plain stretches go out in one piece.
fn for_each_run<E>(
    mut text: &str,
    mut emit: impl FnMut(&str) -> std::result::Result<(), E>,
) -> std::result::Result<(), E> {
    while let Some((i, entity)) = text
        .char_indices()
        .find_map(|(i, c)| HtmlEscaper::entity(c).map(|e| (i, e)))
    {
        emit(&text[..i])?;
        emit(entity)?;
        text = &text[i + 1..];
    }
    emit(text)
}

/// Write `text` under `policy`, escaping through `handler` when asked to.
///
/// # Errors
///
/// Returns [`CanvasError::MissingEscapeHandler`] if escaping is requested
/// without a handler, or the sink's I/O error.
pub fn write_with_policy(
    handler: Option<&dyn EscapeHandler>,
    text: &str,
    policy: EscapePolicy,
    sink: &mut dyn CharacterSink,
) -> Result<()> {
    match policy {
        EscapePolicy::NoEscape => sink.append(text)?,
        EscapePolicy::EscapeChars => handler
            .ok_or(CanvasError::MissingEscapeHandler)?
            .escape(text, sink)?,
    }
    Ok(())
}

/// Escape `text` with [`HtmlEscaper`] into a new string.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let Ok(()) = for_each_run::<Infallible>(text, |run| {
        out.push_str(run);
        Ok(())
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn test_escape_keeps_multibyte_text() {
        assert_eq!(escape_html("café < thé"), "café &lt; thé");
    }

    #[test]
    fn test_handler_matches_helper() {
        let mut out = String::new();
        HtmlEscaper.escape("a&b<c", &mut out).unwrap();
        assert_eq!(out, escape_html("a&b<c"));
    }

    #[test]
    fn test_missing_handler_only_fails_when_escaping() {
        let mut out = String::new();
        write_with_policy(None, "<raw>", EscapePolicy::NoEscape, &mut out).unwrap();
        assert_eq!(out, "<raw>");
        assert!(matches!(
            write_with_policy(None, "x", EscapePolicy::EscapeChars, &mut out),
            Err(CanvasError::MissingEscapeHandler)
        ));
    }
}
