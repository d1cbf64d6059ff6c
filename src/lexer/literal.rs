//! Bodies of elements whose content isn't markup: `script`, `style`,
//! `textarea` and friends.

use super::conditions::can_end_tag;
use super::{Lexer, State};
use crate::base::ends_with_ignore_ascii_case;
use crate::sink::{DiagnosticSink, TokenSink};
use crate::token::CloseStyle;

const SCRIPT_CLOSE_PREFIX: &[u8] = b"</script";
const SCRIPT_OPEN_PREFIX: &[u8] = b"<script";

/// Escaping level of a script body.
///
/// Within `<!--` a `<script` opens one more level, in which the next
/// `</script` only returns to the comment instead of closing the element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScriptEscape {
    Plain,
    InHtmlComment,
    InHtmlCommentNestedScript,
}

impl<T: TokenSink, D: DiagnosticSink> Lexer<T, D> {
    pub(super) fn literal_tag_body_state(&mut self, ch: u8) {
        if ch != b'>' || !ends_with_ignore_ascii_case(&self.literal, &self.literal_close) {
            return;
        }

        let body_len = self.literal.len() - self.literal_close.len();

        self.emit_text_prefix(body_len);

        // NOTE: `</name>` -> `name`, spelled as in the input.
        self.token.clear();
        self.token
            .extend_from_slice(&self.literal[2..self.literal.len() - 1]);

        self.emit_end_tag(CloseStyle::Explicit);
    }

    pub(super) fn script_tag_body_state(&mut self, ch: u8) {
        // NOTE: a repeated `<!--` keeps the nested level.
        if ch == b'-'
            && self.script_escape == ScriptEscape::Plain
            && self.literal.ends_with(b"<!--")
        {
            self.script_escape = ScriptEscape::InHtmlComment;
        }

        if !can_end_tag(ch) {
            return;
        }

        let prefix = &self.literal[..self.literal.len() - 1];

        if ends_with_ignore_ascii_case(prefix, SCRIPT_CLOSE_PREFIX) {
            if self.script_escape == ScriptEscape::InHtmlCommentNestedScript {
                self.script_escape = ScriptEscape::InHtmlComment;
            } else {
                self.script_escape = ScriptEscape::Plain;
                self.close_script(ch);
            }
        } else if self.script_escape != ScriptEscape::Plain
            && ends_with_ignore_ascii_case(prefix, SCRIPT_OPEN_PREFIX)
        {
            self.script_escape = ScriptEscape::InHtmlCommentNestedScript;
        } else if ch == b'>' && self.literal.ends_with(b"-->") {
            self.script_escape = ScriptEscape::Plain;
        }
    }

    /// Handles `</script` followed by `ch`, with everything before it being
    /// the script body.
    fn close_script(&mut self, ch: u8) {
        let close_len = SCRIPT_CLOSE_PREFIX.len() + 1;
        let body_len = self.literal.len() - close_len;

        self.emit_text_prefix(body_len);

        let name = self.literal[2..close_len - 1].to_vec();

        if ch == b'>' {
            self.token = name;
            self.emit_end_tag(CloseStyle::Explicit);
        } else {
            // NOTE: attributes of the close tag are parsed and thrown away,
            // the element gets closed once the tag ends.
            self.discard_until_start = true;
            self.deferred_close = Some(name);
            self.state = if ch == b'/' {
                State::TagBriefClose
            } else {
                State::BeforeAttributeName
            };
        }
    }
}
