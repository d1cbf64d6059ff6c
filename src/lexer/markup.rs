//! Comments, CDATA sections, directives and bogus comments.

use super::conditions::is_legal_tag_char;
use super::{Lexer, State};
use crate::diagnostics::Diagnostic;
use crate::html::DocType;
use crate::sink::{DiagnosticSink, TokenSink};
use crate::token::{Markup, Token};
use memchr::memmem;

const CDATA_PREFIX: &[u8] = b"CDATA[";

#[inline]
fn is_ie_directive(comment: &[u8]) -> bool {
    memmem::find(comment, b"[if").is_some() || memmem::find(comment, b"[endif]").is_some()
}

impl<T: TokenSink, D: DiagnosticSink> Lexer<T, D> {
    /// Gives up on a partially matched construct: everything consumed before
    /// `ch` becomes text and `ch` is looked at again as if in text.
    fn restart(&mut self, ch: u8) {
        debug_assert_eq!(self.literal.last(), Some(&ch));

        self.literal.pop();
        self.emit_text();
        self.literal.push(ch);
        self.start_state(ch);
    }

    pub(super) fn markup_declaration_open_state(&mut self, ch: u8) {
        if ch == b'-' {
            self.state = State::CommentStart;
        } else if ch == b'[' {
            self.state = State::CdataStart(0);
        } else if is_legal_tag_char(ch) && ch != b'<' {
            self.state = State::Directive;
            self.directive_state(ch);
        } else {
            self.report(Diagnostic::InvalidCommentSyntax);
            self.restart(ch);
        }
    }

    pub(super) fn comment_start_state(&mut self, ch: u8) {
        if ch == b'-' {
            self.state = State::CommentBody;
        } else {
            self.report(Diagnostic::InvalidCommentSyntax);
            self.restart(ch);
        }
    }

    pub(super) fn comment_body_state(&mut self, ch: u8) {
        if ch == b'-' {
            self.state = State::CommentEndDash;
        } else {
            self.token.push(ch);
        }
    }

    pub(super) fn comment_end_dash_state(&mut self, ch: u8) {
        if ch == b'-' {
            self.state = State::CommentEnd;
        } else {
            self.token.push(b'-');
            self.token.push(ch);
            self.state = State::CommentBody;
        }
    }

    pub(super) fn comment_end_state(&mut self, ch: u8) {
        match ch {
            b'>' => self.emit_comment(),
            // NOTE: any number of dashes may precede `>`.
            b'-' => self.token.push(b'-'),
            _ => {
                self.token.extend_from_slice(b"--");
                self.token.push(ch);
                self.state = State::CommentBody;
            }
        }
    }

    pub(super) fn cdata_start_state(&mut self, ch: u8, matched: usize) {
        match CDATA_PREFIX.get(matched) {
            Some(&expected) if expected == ch => {
                self.state = if matched + 1 == CDATA_PREFIX.len() {
                    State::CdataBody
                } else {
                    State::CdataStart(matched + 1)
                };
            }
            _ => {
                self.report(Diagnostic::InvalidCdataSyntax);
                self.restart(ch);
            }
        }
    }

    pub(super) fn cdata_body_state(&mut self, ch: u8) {
        if ch == b']' {
            self.state = State::CdataEndBracket;
        } else {
            self.token.push(ch);
        }
    }

    pub(super) fn cdata_end_bracket_state(&mut self, ch: u8) {
        if ch == b']' {
            self.state = State::CdataEnd;
        } else {
            self.token.push(b']');
            self.token.push(ch);
            self.state = State::CdataBody;
        }
    }

    pub(super) fn cdata_end_state(&mut self, ch: u8) {
        if ch == b'>' {
            self.emit_cdata();
        } else {
            self.token.extend_from_slice(b"]]");
            self.token.push(ch);
            self.state = State::CdataBody;
        }
    }

    pub(super) fn directive_state(&mut self, ch: u8) {
        if ch == b'>' {
            self.emit_directive();
        } else {
            self.token.push(ch);
        }
    }

    pub(super) fn bogus_comment_state(&mut self, ch: u8) {
        if ch == b'>' {
            self.emit_text();
        }
    }

    fn emit_comment(&mut self) {
        let markup = Markup {
            text: &self.token,
            line: self.tag_start_line,
            raw: &self.literal,
        };

        if is_ie_directive(&self.token) {
            emit!(self, Token::IeDirective(markup));
        } else {
            emit!(self, Token::Comment(markup));
        }

        self.literal.clear();
        self.token.clear();
        self.state = State::Start;
    }

    fn emit_cdata(&mut self) {
        emit!(
            self,
            Token::Cdata(Markup {
                text: &self.token,
                line: self.tag_start_line,
                raw: &self.literal,
            })
        );

        self.literal.clear();
        self.token.clear();
        self.state = State::Start;
    }

    fn emit_directive(&mut self) {
        emit!(
            self,
            Token::Directive(Markup {
                text: &self.token,
                line: self.line,
                raw: &self.literal,
            })
        );

        if let Some(doctype) = DocType::parse(&self.token, &self.content_type) {
            trace!(@doctype doctype);

            self.doctype = doctype;
        }

        self.literal.clear();
        self.token.clear();
        self.state = State::Start;
    }
}
