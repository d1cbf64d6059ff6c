use crate::base::Bytes;
use crate::html::{entities, Keyword};
use std::borrow::Cow;
use std::fmt::{self, Debug};

/// Quoting used for an attribute value in the source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    None,
    Single,
    Double,
}

/// An attribute of a start tag.
///
/// The value is kept exactly as it appeared in the input, character
/// references included; use [`Attribute::decoded_value`] to unescape it.
#[derive(Clone, PartialEq, Eq)]
pub struct Attribute {
    name: Vec<u8>,
    keyword: Keyword,
    value: Option<Vec<u8>>,
    quote: QuoteStyle,
}

impl Attribute {
    pub(crate) fn new(name: Vec<u8>, value: Option<Vec<u8>>, quote: QuoteStyle) -> Self {
        Attribute {
            keyword: Keyword::lookup(&name),
            name,
            value,
            quote,
        }
    }

    #[inline]
    pub fn name(&self) -> Bytes<'_> {
        Bytes::from(&self.name)
    }

    #[inline]
    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    /// Raw (still escaped) value, `None` for attributes without `=`.
    #[inline]
    pub fn value(&self) -> Option<Bytes<'_>> {
        self.value.as_ref().map(Bytes::from)
    }

    /// Value with character references decoded.
    ///
    /// Returns `None` if the attribute has no value or the value can't be
    /// decoded, see [`entities::unescape`].
    pub fn decoded_value(&self) -> Option<Cow<'_, [u8]>> {
        self.value.as_deref().and_then(entities::unescape)
    }

    #[inline]
    pub fn quote(&self) -> QuoteStyle {
        self.quote
    }
}

impl Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name())
            .field("value", &self.value())
            .field("quote", &self.quote)
            .finish()
    }
}
