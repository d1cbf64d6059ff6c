mod attributes;

pub use self::attributes::{Attribute, QuoteStyle};

use crate::base::Bytes;
use crate::html::Keyword;

/// How an element got closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CloseStyle {
    /// Closed by a matching close tag in the input, `<a></a>`.
    Explicit,
    /// A void element that has no content, `<br>`.
    Implicit,
    /// Closed by the `<tag/>` syntax.
    Brief,
    /// Closed because an element that can't be its descendant opened,
    /// e.g. the first `<p>` in `<p>a<p>b`.
    Auto,
    /// Never closed: either a close tag of one of its ancestors was seen or
    /// the input ended.
    Unclosed,
}

#[derive(Debug)]
pub struct StartTag<'t> {
    pub(crate) name: &'t [u8],
    pub(crate) keyword: Keyword,
    pub(crate) attributes: &'t [Attribute],
    pub(crate) line: usize,
    pub(crate) raw: &'t [u8],
}

impl<'t> StartTag<'t> {
    /// Tag name with its original casing.
    #[inline]
    pub fn name(&self) -> Bytes<'t> {
        Bytes::from(self.name)
    }

    #[inline]
    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    #[inline]
    pub fn attributes(&self) -> &'t [Attribute] {
        self.attributes
    }

    /// Looks up an attribute by name, ignoring ASCII case.
    pub fn attribute(&self, name: &str) -> Option<&'t Attribute> {
        self.attributes
            .iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name.as_bytes()))
    }

    /// Line on which the tag started.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn raw(&self) -> Bytes<'t> {
        Bytes::from(self.raw)
    }
}

#[derive(Debug)]
pub struct EndTag<'t> {
    pub(crate) name: &'t [u8],
    pub(crate) keyword: Keyword,
    pub(crate) style: CloseStyle,
    pub(crate) line: usize,
    pub(crate) raw: &'t [u8],
}

impl<'t> EndTag<'t> {
    /// Name of the closed element, as it was spelled in its start tag.
    #[inline]
    pub fn name(&self) -> Bytes<'t> {
        Bytes::from(self.name)
    }

    #[inline]
    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    #[inline]
    pub fn style(&self) -> CloseStyle {
        self.style
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Bytes of the close tag. Empty for closes that have no counterpart
    /// in the input.
    #[inline]
    pub fn raw(&self) -> Bytes<'t> {
        Bytes::from(self.raw)
    }
}

/// Comment, IE conditional directive, CDATA section or directive.
#[derive(Debug)]
pub struct Markup<'t> {
    pub(crate) text: &'t [u8],
    pub(crate) line: usize,
    pub(crate) raw: &'t [u8],
}

impl<'t> Markup<'t> {
    /// Content between the delimiters.
    #[inline]
    pub fn text(&self) -> Bytes<'t> {
        Bytes::from(self.text)
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn raw(&self) -> Bytes<'t> {
        Bytes::from(self.raw)
    }
}

#[derive(Debug)]
pub enum Token<'t> {
    StartTag(StartTag<'t>),
    EndTag(EndTag<'t>),
    /// Text content, including any malformed markup that was reinterpreted
    /// as text.
    Text(Bytes<'t>),
    /// `<!--...-->`
    Comment(Markup<'t>),
    /// A comment containing `[if` or `[endif]`.
    IeDirective(Markup<'t>),
    /// `<![CDATA[...]]>`
    Cdata(Markup<'t>),
    /// `<!...>`, e.g. a doctype.
    Directive(Markup<'t>),
}

impl<'t> Token<'t> {
    /// Input bytes the token was produced from.
    pub fn raw(&self) -> Bytes<'t> {
        match self {
            Token::StartTag(t) => t.raw(),
            Token::EndTag(t) => t.raw(),
            Token::Text(t) => t.clone(),
            Token::Comment(t) | Token::IeDirective(t) | Token::Cdata(t) | Token::Directive(t) => {
                t.raw()
            }
        }
    }
}
