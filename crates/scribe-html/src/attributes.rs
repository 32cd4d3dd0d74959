use std::borrow::Cow;

use crate::error::Result;
use crate::escape::{EscapeHandler, EscapePolicy, write_with_policy};
use crate::sink::CharacterSink;
use crate::vocabulary::AttrName;

/// Anything that can write its own characters onto a sink.
///
/// This is the only thing the canvas knows about attribute carriers: it hands
/// them the sink and its escape handler and lets them write themselves.
///
/// A pre-rendered attribute string is written verbatim. Pass it by reference
/// so it can become a trait object: `Some(&r#" lang="en""#)`.
pub trait WriteCharacters {
    /// Write this value's characters to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CanvasError::MissingEscapeHandler`] if escaping is
    /// needed and `escaper` is `None`, or the sink's I/O error.
    fn write_characters(
        &self,
        sink: &mut dyn CharacterSink,
        escaper: Option<&dyn EscapeHandler>,
    ) -> Result<()>;
}

impl WriteCharacters for str {
    fn write_characters(
        &self,
        sink: &mut dyn CharacterSink,
        _escaper: Option<&dyn EscapeHandler>,
    ) -> Result<()> {
        sink.append(self)?;
        Ok(())
    }
}

impl WriteCharacters for String {
    fn write_characters(
        &self,
        sink: &mut dyn CharacterSink,
        escaper: Option<&dyn EscapeHandler>,
    ) -> Result<()> {
        self.as_str().write_characters(sink, escaper)
    }
}

impl<T: WriteCharacters + ?Sized> WriteCharacters for &T {
    fn write_characters(
        &self,
        sink: &mut dyn CharacterSink,
        escaper: Option<&dyn EscapeHandler>,
    ) -> Result<()> {
        (**self).write_characters(sink, escaper)
    }
}

/// One accumulated attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Name as written in markup.
    pub name: Cow<'static, str>,
    /// Value before escaping.
    pub value: String,
    /// Whether `value` goes through the escape handler.
    pub policy: EscapePolicy,
}

/// An ordered attribute list built fluently and serialized once.
///
/// Serializes as ` name="value"` for each entry in insertion order. Names are
/// not deduplicated: adding a name twice writes it twice.
///
/// ```ignore
/// let attrs = Attributes::new().class("nav").href("/home?a=1&b=2");
/// canvas.tag_with(Tag::A, &attrs)?;
/// // <a class="nav" href="/home?a=1&amp;b=2">
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    /// An empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append `name` with the table's escape default for that attribute.
    #[must_use]
    pub fn add(self, name: AttrName, value: impl Into<String>) -> Self {
        let policy = name.escape_default();
        self.add_with(name, value, policy)
    }

    /// Append `name` with an explicit escape policy.
    #[must_use]
    pub fn add_with(self, name: AttrName, value: impl Into<String>, policy: EscapePolicy) -> Self {
        self.push(Cow::Borrowed(name.name()), value.into(), policy)
    }

    /// Append an event-handler attribute.
    ///
    /// Serialized exactly like [`Attributes::add`]; the separate entry point
    /// marks script-carrying values at the call site.
    #[must_use]
    pub fn script(self, name: AttrName, source: impl Into<String>) -> Self {
        self.add(name, source)
    }

    /// Append an attribute outside the vocabulary (e.g. `data-*`), escaped.
    #[must_use]
    pub fn attr(self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.push(name.into(), value.into(), EscapePolicy::EscapeChars)
    }

    /// Append an attribute outside the vocabulary, unescaped.
    #[must_use]
    pub fn raw(self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.push(name.into(), value.into(), EscapePolicy::NoEscape)
    }

    /// Append `name="name"` when `on` is true; otherwise leave the list as is.
    #[must_use]
    pub fn flag(self, name: AttrName, on: bool) -> Self {
        if on { self.add(name, name.name()) } else { self }
    }

    fn push(mut self, name: Cow<'static, str>, value: String, policy: EscapePolicy) -> Self {
        self.entries.push(Attribute {
            name,
            value,
            policy,
        });
        self
    }

    /// `class`
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Class, value)
    }

    /// `id`
    #[must_use]
    pub fn id(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Id, value)
    }

    /// `href`
    #[must_use]
    pub fn href(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Href, value)
    }

    /// `src`
    #[must_use]
    pub fn src(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Src, value)
    }

    /// `name`
    #[must_use]
    pub fn name(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Name, value)
    }

    /// `value`
    #[must_use]
    pub fn value(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Value, value)
    }

    /// `type`
    #[must_use]
    pub fn type_(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Type, value)
    }

    /// `style`
    #[must_use]
    pub fn style(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Style, value)
    }

    /// `title`
    #[must_use]
    pub fn title(self, value: impl Into<String>) -> Self {
        self.add(AttrName::Title, value)
    }

    /// `selected="selected"` when `on`.
    #[must_use]
    pub fn selected(self, on: bool) -> Self {
        self.flag(AttrName::Selected, on)
    }

    /// `checked="checked"` when `on`.
    #[must_use]
    pub fn checked(self, on: bool) -> Self {
        self.flag(AttrName::Checked, on)
    }

    /// `disabled="disabled"` when `on`.
    #[must_use]
    pub fn disabled(self, on: bool) -> Self {
        self.flag(AttrName::Disabled, on)
    }

    /// `autofocus="autofocus"` when `on`.
    #[must_use]
    pub fn autofocus(self, on: bool) -> Self {
        self.flag(AttrName::Autofocus, on)
    }

    /// `required="required"` when `on`.
    #[must_use]
    pub fn required(self, on: bool) -> Self {
        self.flag(AttrName::Required, on)
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }
}

impl WriteCharacters for Attributes {
    fn write_characters(
        &self,
        sink: &mut dyn CharacterSink,
        escaper: Option<&dyn EscapeHandler>,
    ) -> Result<()> {
        for attribute in &self.entries {
            sink.append_char(' ')?;
            sink.append(&attribute.name)?;
            sink.append("=\"")?;
            write_with_policy(escaper, &attribute.value, attribute.policy, sink)?;
            sink.append_char('"')?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
