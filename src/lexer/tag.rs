use super::conditions::*;
use super::{Lexer, PendingElement, State};
use crate::base::is_html_space;
use crate::diagnostics::{to_message_string, Diagnostic};
use crate::html::Keyword;
use crate::sink::{DiagnosticSink, TokenSink};
use crate::token::{Attribute, CloseStyle, QuoteStyle};
use std::mem;

impl<T: TokenSink, D: DiagnosticSink> Lexer<T, D> {
    pub(super) fn start_state(&mut self, ch: u8) {
        if ch == b'<' {
            self.literal.pop();
            self.emit_text();
            self.literal.push(ch);
            self.state = State::TagOpen;
            self.discard_until_start = false;
            self.tag_start_line = self.line;
        } else {
            self.state = State::Start;
        }
    }

    pub(super) fn tag_open_state(&mut self, ch: u8) {
        match ch {
            b'/' => self.state = State::TagCloseNoName,
            b'!' => self.state = State::MarkupDeclarationOpen,
            b'?' => self.state = State::BogusComment,
            _ if is_legal_tag_first_char(ch) => {
                self.state = State::TagName;
                self.discard_until_start = false;
                self.token.push(ch);
            }
            _ => {
                self.report(Diagnostic::UnexpectedTagSequence { ch: ch as char });
                self.start_state(ch);
            }
        }
    }

    pub(super) fn tag_name_state(&mut self, ch: u8) {
        if is_legal_tag_char(ch) {
            self.token.push(ch);
        } else if ch == b'>' {
            self.make_element();
            self.emit_start_tag(true);
        } else if ch == b'/' {
            self.state = State::TagBriefClose;
        } else if is_html_space(ch) {
            self.state = State::BeforeAttributeName;
        } else {
            let tag = to_message_string(&self.token);

            self.report(Diagnostic::InvalidTagNameChar { ch: ch as char, tag });
            self.token.clear();
            self.state = State::Start;
        }
    }

    // NOTE: this state is never entered from an attribute value, only from
    // the places where a new attribute could start.
    pub(super) fn tag_brief_close_state(&mut self, ch: u8) {
        debug_assert!(!self.has_attr_value);

        if ch == b'>' {
            if !self.discard_until_start {
                self.make_element();
            }

            let has_value = self.has_attr_value;

            self.finish_attribute(ch, has_value, true);
        } else {
            if !self.attr_name.is_empty() {
                self.make_attribute();
            }

            self.state = State::BeforeAttributeName;
            self.before_attribute_name_state(ch);
        }
    }

    pub(super) fn tag_close_no_name_state(&mut self, ch: u8) {
        if is_legal_tag_char(ch) {
            self.token.push(ch);
            self.state = State::TagClose;
        } else if ch == b'>' {
            self.report(Diagnostic::EmptyCloseTag);
            self.token.clear();
            self.start_state(ch);
        } else {
            self.state = State::BogusComment;
        }
    }

    /// Handles both `</a` and `</a `, only whitespace or `>` may follow the
    /// latter.
    pub(super) fn tag_close_state(&mut self, ch: u8) {
        if self.state != State::TagCloseTerminate && is_legal_tag_char(ch) {
            self.token.push(ch);
        } else if is_html_space(ch) {
            if !self.token.is_empty() {
                self.state = State::TagCloseTerminate;
            }
        } else if ch == b'>' {
            self.emit_end_tag(CloseStyle::Explicit);
        } else {
            let tag = to_message_string(&self.token);

            self.report(Diagnostic::UnexpectedCharAfterCloseTag { tag, ch: ch as char });
            self.token.clear();
            self.start_state(ch);
        }
    }

    pub(super) fn before_attribute_name_state(&mut self, ch: u8) {
        if !self.discard_until_start {
            self.make_element();
        }

        self.attr_name.clear();
        self.attr_value.clear();

        if ch == b'>' {
            self.emit_start_tag(true);
        } else if ch == b'/' {
            self.state = State::TagBriefClose;
        } else if is_legal_attr_name_char(ch) {
            self.attr_name.push(ch);
            self.state = State::AttributeName;
        } else if !is_html_space(ch) {
            self.report(Diagnostic::UnexpectedAttributeChar { ch: ch as char });

            // NOTE: things like `"` or `=` still start an attribute name.
            self.attr_name.push(ch);
            self.state = State::AttributeName;
        }
    }

    pub(super) fn attribute_name_state(&mut self, ch: u8) {
        match ch {
            b'=' => {
                self.state = State::BeforeAttributeValue;
                self.has_attr_value = true;
            }
            b'>' => {
                self.make_attribute();
                self.emit_start_tag(true);
            }
            b'/' => self.state = State::TagBriefClose,
            _ if is_html_space(ch) => self.state = State::AfterAttributeName,
            _ => self.attr_name.push(ch),
        }
    }

    pub(super) fn after_attribute_name_state(&mut self, ch: u8) {
        match ch {
            b'=' => {
                self.state = State::BeforeAttributeValue;
                self.has_attr_value = true;
            }
            b'>' => {
                self.make_attribute();
                self.emit_start_tag(true);
            }
            b'/' => self.state = State::TagBriefClose,
            _ if is_html_space(ch) => (),
            _ => {
                // `<x y z`: `y` is complete, `z` starts the next attribute.
                self.make_attribute();
                self.state = State::AttributeName;
                self.attr_name.push(ch);
            }
        }
    }

    pub(super) fn before_attribute_value_state(&mut self, ch: u8) {
        match ch {
            b'"' => {
                self.attr_quote = QuoteStyle::Double;
                self.state = State::AttributeValueDoubleQuoted;
            }
            b'\'' => {
                self.attr_quote = QuoteStyle::Single;
                self.state = State::AttributeValueSingleQuoted;
            }
            b'>' => self.finish_attribute(ch, true, false),
            _ if is_html_space(ch) => (),
            _ => {
                self.state = State::AttributeValueUnquoted;
                self.attr_quote = QuoteStyle::None;
                self.attribute_value_unquoted_state(ch);
            }
        }
    }

    pub(super) fn attribute_value_unquoted_state(&mut self, ch: u8) {
        if is_html_space(ch) || ch == b'>' {
            self.finish_attribute(ch, true, false);
        } else {
            self.attr_value.push(ch);
        }
    }

    pub(super) fn attribute_value_quoted_state(&mut self, ch: u8, quote: u8) {
        if ch == quote {
            self.make_attribute();
        } else {
            self.attr_value.push(ch);
        }
    }

    fn finish_attribute(&mut self, ch: u8, has_value: bool, brief_close: bool) {
        debug_assert_eq!(has_value, self.has_attr_value);

        if is_html_space(ch) {
            self.make_attribute();
        } else if ch == b'>' {
            if !self.attr_name.is_empty() {
                self.make_attribute();
            }

            self.emit_start_tag(!brief_close);

            if brief_close {
                self.emit_brief_close();
            }

            self.has_attr_value = false;
        } else {
            debug_assert!(false, "Attribute can only be finished by a space or `>`");
        }
    }

    /// Turns the name read so far into a pending element, unless one already
    /// exists.
    fn make_element(&mut self) {
        debug_assert!(!self.discard_until_start);

        if self.element.is_none() {
            if self.token.is_empty() {
                self.report(Diagnostic::EmptyTagName);
            }

            let name = mem::take(&mut self.token);

            self.element = Some(PendingElement {
                keyword: Keyword::lookup(&name),
                name,
                line: self.tag_start_line,
                attributes: Vec::new(),
            });
        }
    }

    fn make_attribute(&mut self) {
        let name = mem::take(&mut self.attr_name);
        let value = mem::take(&mut self.attr_value);

        let value = if self.has_attr_value {
            self.has_attr_value = false;
            Some(value)
        } else {
            debug_assert!(value.is_empty());
            None
        };

        if !self.discard_until_start {
            if let Some(element) = self.element.as_mut() {
                element
                    .attributes
                    .push(Attribute::new(name, value, self.attr_quote));
            }
        }

        self.attr_quote = QuoteStyle::None;
        self.state = State::BeforeAttributeName;
    }
}
