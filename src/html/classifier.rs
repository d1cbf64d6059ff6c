//! Static element categories that drive the lexer's recovery policy.
//!
//! All tables are fixed at compile time, so they can be shared between any
//! number of lexer instances without synchronization.

use super::Keyword;
use bitflags::bitflags;

macro_rules! keyword_is_one_of {
    ($keyword:expr, [$($kw:ident),+]) => {
        matches!($keyword, $(Keyword::$kw)|+)
    };
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct KeywordFlags: u16 {
        /// Void element which never has content, e.g. `<br>`.
        const IMPLICITLY_CLOSED = 1;
        /// Element that must not be closed with `<tag/>` when serialized.
        const NON_BRIEF = 1 << 1;
        /// Content is copied verbatim until the matching close tag.
        const LITERAL = 1 << 2;
        /// Literal only when scripting or frames are enabled.
        const SOMETIMES_LITERAL = 1 << 3;
        /// Close tag may be omitted without a warning.
        const OPTIONALLY_CLOSED = 1 << 4;
        /// Inline formatting element, closed by list and table structure.
        const FORMATTING = 1 << 5;
    }
}

#[inline]
fn is_formatting_element(keyword: Keyword) -> bool {
    keyword_is_one_of!(
        keyword,
        [B, I, Em, Font, Strong, Small, S, Cite, Q, Dfn, Abbr, Time, Code, Var, Samp, Kbd, Sub, U, Mark, Bdi, Bdo]
    )
}

#[inline]
fn is_table_section(keyword: Keyword) -> bool {
    keyword_is_one_of!(keyword, [Tbody, Tfoot, Thead])
}

#[inline]
fn is_table_leaf(keyword: Keyword) -> bool {
    keyword_is_one_of!(keyword, [Td, Th])
}

#[inline]
fn is_paragraph_terminator(keyword: Keyword) -> bool {
    keyword_is_one_of!(
        keyword,
        [
            Address, Article, Aside, Blockquote, Dir, Div, Dl, Fieldset, Footer, Form, H1, H2, H3,
            H4, H5, H6, Header, Hgroup, Hr, Menu, Nav, Ol, P, Pre, Section, Table, Ul
        ]
    )
}

impl Keyword {
    pub fn flags(self) -> KeywordFlags {
        let mut flags = KeywordFlags::empty();

        flags.set(
            KeywordFlags::IMPLICITLY_CLOSED,
            keyword_is_one_of!(
                self,
                [Xml, Area, Base, Br, Col, Embed, Hr, Img, Input, Keygen, Link, Meta, Param, Source, Track, Wbr]
            ),
        );

        flags.set(
            KeywordFlags::NON_BRIEF,
            keyword_is_one_of!(self, [A, Div, Header, Iframe, Nav, Script, Span, Style, Textarea, Xmp]),
        );

        flags.set(
            KeywordFlags::LITERAL,
            keyword_is_one_of!(self, [Iframe, Script, Style, Textarea, Title, Xmp]),
        );

        flags.set(
            KeywordFlags::SOMETIMES_LITERAL,
            keyword_is_one_of!(self, [Noembed, Noframes, Noscript]),
        );

        flags.set(KeywordFlags::FORMATTING, is_formatting_element(self));

        flags.set(
            KeywordFlags::OPTIONALLY_CLOSED,
            is_formatting_element(self)
                || keyword_is_one_of!(
                    self,
                    [
                        Body, Colgroup, Dd, Dt, Html, Optgroup, Option, P, Li, Ol, Ul, Td, Th,
                        Tbody, Tfoot, Thead, Table, Tr
                    ]
                ),
        );

        flags
    }

    #[inline]
    pub fn is_implicitly_closed(self) -> bool {
        self.flags().contains(KeywordFlags::IMPLICITLY_CLOSED)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self.flags().contains(KeywordFlags::LITERAL)
    }

    #[inline]
    pub fn is_sometimes_literal(self) -> bool {
        self.flags().contains(KeywordFlags::SOMETIMES_LITERAL)
    }

    #[inline]
    pub fn is_optionally_closed(self) -> bool {
        self.flags().contains(KeywordFlags::OPTIONALLY_CLOSED)
    }

    #[inline]
    pub fn is_formatting(self) -> bool {
        self.flags().contains(KeywordFlags::FORMATTING)
    }

    /// Whether `<tag/>` is an acceptable serialization of an empty element.
    #[inline]
    pub fn allows_brief_close(self) -> bool {
        !self
            .flags()
            .intersects(KeywordFlags::NON_BRIEF | KeywordFlags::IMPLICITLY_CLOSED)
    }

    /// Whether an open `self` element is closed when `new_element` opens.
    pub fn is_auto_closed_by(self, new_element: Keyword) -> bool {
        use Keyword::*;

        match self {
            Td | Th => is_table_leaf(new_element) || new_element == Tr,
            Tr => is_table_section(new_element) || new_element == Tr,
            Tbody | Tfoot | Thead => is_table_section(new_element),
            P => is_paragraph_terminator(new_element),
            Li => new_element == Li,
            Dd | Dt => keyword_is_one_of!(new_element, [Dd, Dt]),
            Rp | Rt => keyword_is_one_of!(new_element, [Rp, Rt]),
            Optgroup => new_element == Optgroup,
            Option => keyword_is_one_of!(new_element, [Optgroup, Option]),
            _ if self.is_formatting() => {
                keyword_is_one_of!(new_element, [Tr, Li, Ol, Ul, Dl, Dt, Dd])
            }
            _ => false,
        }
    }

    /// Whether an open `owner` element forms a structural boundary for
    /// `self`, i.e. a close tag for `self` may not close anything outside
    /// of it.
    pub fn is_contained_in(self, owner: Keyword) -> bool {
        use Keyword::*;

        match self {
            Td | Th | Tr | Tbody | Tfoot | Thead => owner == Table,
            Li => keyword_is_one_of!(owner, [Ul, Ol]),
            Dd | Dt => owner == Dl,
            Rt | Rp => owner == Ruby,
            _ if self.is_formatting() => is_table_leaf(owner),
            _ => false,
        }
    }
}
