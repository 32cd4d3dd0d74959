//! The HTML vocabulary as data.
//!
//! [§ 4 The elements of HTML](https://html.spec.whatwg.org/multipage/#toc-semantics)
//!
//! Instead of one method per element and per attribute, the canvas has one
//! generic open/close/attribute engine driven by these tables: [`Tag`] knows
//! whether an element is void or obsolete, [`AttrName`] knows how its values
//! are escaped by default.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::escape::EscapePolicy;

/// An HTML element name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum Tag {
    A,
    Abbr,
    Acronym,
    Address,
    Applet,
    Area,
    Article,
    Aside,
    Audio,
    B,
    Base,
    Basefont,
    Bdi,
    Bdo,
    Big,
    Blockquote,
    Body,
    Br,
    Button,
    Canvas,
    Caption,
    Center,
    Cite,
    Code,
    Col,
    Colgroup,
    Data,
    Datalist,
    Dd,
    Del,
    Details,
    Dfn,
    Dialog,
    Dir,
    Div,
    Dl,
    Dt,
    Em,
    Embed,
    Fieldset,
    Figcaption,
    Figure,
    Font,
    Footer,
    Form,
    Frame,
    Frameset,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Header,
    Hgroup,
    Hr,
    Html,
    I,
    Iframe,
    Img,
    Input,
    Ins,
    Kbd,
    Label,
    Legend,
    Li,
    Link,
    Main,
    Map,
    Mark,
    Menu,
    Meta,
    Meter,
    Nav,
    Noframes,
    Noscript,
    Object,
    Ol,
    Optgroup,
    Option,
    Output,
    P,
    Param,
    Pre,
    Progress,
    Q,
    Rp,
    Rt,
    Ruby,
    S,
    Samp,
    Script,
    Section,
    Select,
    Small,
    Source,
    Span,
    Strike,
    Strong,
    Style,
    Sub,
    Summary,
    Sup,
    Table,
    Tbody,
    Td,
    Template,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Time,
    Title,
    Tr,
    Track,
    Tt,
    U,
    Ul,
    Var,
    Video,
    Wbr,
}

impl Tag {
    /// The lowercase element name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up an element by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
    ///
    /// "Void elements only have a start tag; end tags must not be specified
    /// for void elements."
    ///
    /// `basefont` and `frame` are obsolete but were void as well.
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(
            self,
            Self::Area
                | Self::Base
                | Self::Basefont
                | Self::Br
                | Self::Col
                | Self::Embed
                | Self::Frame
                | Self::Hr
                | Self::Img
                | Self::Input
                | Self::Link
                | Self::Meta
                | Self::Param
                | Self::Source
                | Self::Track
                | Self::Wbr
        )
    }

    /// [§ 16 Obsolete features](https://html.spec.whatwg.org/multipage/obsolete.html)
    ///
    /// Obsolete elements are written like any other; the canvas only logs a
    /// one-time warning (see [`crate::CanvasConfig::warn_on_deprecated`]).
    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::Acronym
                | Self::Applet
                | Self::Basefont
                | Self::Big
                | Self::Center
                | Self::Dir
                | Self::Font
                | Self::Frame
                | Self::Frameset
                | Self::Noframes
                | Self::Strike
                | Self::Tt
        )
    }

    /// The closing markup pushed on the open-tag stack, e.g. `</div>`.
    #[must_use]
    pub fn closing_markup(self) -> String {
        format!("</{}>", self.name())
    }
}

/// What kind of value an attribute carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    /// Free text or a keyword.
    Plain,
    /// A URL or list of URLs.
    Url,
    /// Present-or-absent switch, written as `name="name"`.
    Boolean,
    /// Script source run by an event handler.
    Script,
}

/// An HTML attribute name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum AttrName {
    Accept,
    AcceptCharset,
    Accesskey,
    Action,
    Align,
    Alt,
    Async,
    Autocomplete,
    Autofocus,
    Autoplay,
    Background,
    Bgcolor,
    Border,
    Cellpadding,
    Cellspacing,
    Charset,
    Checked,
    Cite,
    Class,
    Color,
    Cols,
    Colspan,
    Compact,
    Content,
    Contenteditable,
    Controls,
    Coords,
    Data,
    Datetime,
    Default,
    Defer,
    Dir,
    Dirname,
    Disabled,
    Draggable,
    Enctype,
    For,
    Form,
    Formaction,
    Headers,
    Height,
    Hidden,
    High,
    Href,
    Hreflang,
    HttpEquiv,
    Id,
    Ismap,
    Kind,
    Label,
    Lang,
    List,
    Longdesc,
    Loop,
    Low,
    Manifest,
    Max,
    Maxlength,
    Media,
    Method,
    Min,
    Multiple,
    Muted,
    Name,
    Noresize,
    Novalidate,
    Nowrap,
    Onabort,
    Onblur,
    Onchange,
    Onclick,
    Ondblclick,
    Onerror,
    Onfocus,
    Oninput,
    Onkeydown,
    Onkeypress,
    Onkeyup,
    Onload,
    Onmousedown,
    Onmousemove,
    Onmouseout,
    Onmouseover,
    Onmouseup,
    Onreset,
    Onresize,
    Onscroll,
    Onselect,
    Onsubmit,
    Onunload,
    Open,
    Optimum,
    Pattern,
    Placeholder,
    Poster,
    Readonly,
    Rel,
    Required,
    Reversed,
    Rows,
    Rowspan,
    Scope,
    Selected,
    Shape,
    Size,
    Sizes,
    Span,
    Spellcheck,
    Src,
    Srclang,
    Srcset,
    Start,
    Step,
    Style,
    Tabindex,
    Target,
    Title,
    Type,
    Usemap,
    Value,
    Width,
    Wrap,
}

impl AttrName {
    /// The attribute name as written in markup.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up an attribute by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// The kind of value this attribute carries.
    #[must_use]
    pub const fn kind(self) -> AttrKind {
        match self {
            Self::Action
            | Self::Background
            | Self::Cite
            | Self::Data
            | Self::Formaction
            | Self::Href
            | Self::Longdesc
            | Self::Manifest
            | Self::Poster
            | Self::Src
            | Self::Srcset
            | Self::Usemap => AttrKind::Url,
            Self::Async
            | Self::Autofocus
            | Self::Autoplay
            | Self::Checked
            | Self::Compact
            | Self::Controls
            | Self::Default
            | Self::Defer
            | Self::Disabled
            | Self::Hidden
            | Self::Ismap
            | Self::Loop
            | Self::Multiple
            | Self::Muted
            | Self::Noresize
            | Self::Novalidate
            | Self::Nowrap
            | Self::Open
            | Self::Readonly
            | Self::Required
            | Self::Reversed
            | Self::Selected => AttrKind::Boolean,
            Self::Onabort
            | Self::Onblur
            | Self::Onchange
            | Self::Onclick
            | Self::Ondblclick
            | Self::Onerror
            | Self::Onfocus
            | Self::Oninput
            | Self::Onkeydown
            | Self::Onkeypress
            | Self::Onkeyup
            | Self::Onload
            | Self::Onmousedown
            | Self::Onmousemove
            | Self::Onmouseout
            | Self::Onmouseover
            | Self::Onmouseup
            | Self::Onreset
            | Self::Onresize
            | Self::Onscroll
            | Self::Onselect
            | Self::Onsubmit
            | Self::Onunload => AttrKind::Script,
            _ => AttrKind::Plain,
        }
    }

    /// How values of this attribute are escaped unless the caller says
    /// otherwise. Boolean switches are written unescaped; everything else,
    /// URLs and event handlers included, is escaped.
    #[must_use]
    pub const fn escape_default(self) -> EscapePolicy {
        match self.kind() {
            AttrKind::Boolean => EscapePolicy::NoEscape,
            AttrKind::Plain | AttrKind::Url | AttrKind::Script => EscapePolicy::EscapeChars,
        }
    }

    /// Whether this is an event-handler attribute.
    #[must_use]
    pub const fn is_script(self) -> bool {
        matches!(self.kind(), AttrKind::Script)
    }

    /// [§ 16.2 Non-conforming features](https://html.spec.whatwg.org/multipage/obsolete.html#non-conforming-features)
    ///
    /// Annotation only: such attributes are serialized normally.
    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::Align
                | Self::Background
                | Self::Bgcolor
                | Self::Cellpadding
                | Self::Cellspacing
                | Self::Color
                | Self::Compact
                | Self::Longdesc
                | Self::Noresize
                | Self::Nowrap
        )
    }
}
