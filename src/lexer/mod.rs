// NOTE: use macro instead of the function to make borrow
// checker happy with tokens borrowing lexer buffers while
// the sink is borrowed mutably.
macro_rules! emit {
    ($self:tt, $token:expr) => {{
        let token = $token;

        trace!(@output token);

        $self.token_sink.handle_token(&token);
    }};
}

mod conditions;
mod element_stack;
mod literal;
mod markup;
mod state;
mod tag;

use self::element_stack::{ElementStack, OpenElement};
use self::literal::ScriptEscape;
use crate::base::Bytes;
use crate::diagnostics::{to_message_string, Diagnostic};
use crate::errors::SettingsError;
use crate::html::{DocType, Keyword};
use crate::memory::ByteBudget;
use crate::settings::Settings;
use crate::sink::{DiagnosticSink, TokenSink};
use crate::token::{Attribute, CloseStyle, EndTag, QuoteStyle, StartTag, Token};
use cfg_if::cfg_if;
use encoding_rs::{Encoding, UTF_8};
use mime::Mime;

pub use self::state::State;

const DEFAULT_TOKEN_BUFFER_CAPACITY: usize = 64;

/// Start tag whose name has been read but which hasn't been emitted yet.
#[derive(Debug)]
struct PendingElement {
    name: Vec<u8>,
    keyword: Keyword,
    line: usize,
    attributes: Vec<Attribute>,
}

/// Lenient streaming HTML lexer.
///
/// Input is fed with any number of [`write`](Lexer::write) calls, chunk
/// boundaries may fall anywhere, and the session is finished with
/// [`end`](Lexer::end). Tokens are delivered to the [`TokenSink`] as soon as
/// they're recognized; malformed markup is reported to the [`DiagnosticSink`]
/// and reinterpreted as text, so lexing never fails.
pub struct Lexer<T: TokenSink, D: DiagnosticSink> {
    state: State,
    literal: Vec<u8>,
    token: Vec<u8>,
    attr_name: Vec<u8>,
    attr_value: Vec<u8>,
    attr_quote: QuoteStyle,
    has_attr_value: bool,
    element: Option<PendingElement>,
    element_stack: ElementStack,
    literal_close: Vec<u8>,
    script_escape: ScriptEscape,
    discard_until_start: bool,
    deferred_close: Option<Vec<u8>>,
    line: usize,
    tag_start_line: usize,
    budget: ByteBudget,
    skip_parsing: bool,
    doctype: DocType,
    content_type: Mime,
    encoding: &'static Encoding,
    source_id: String,
    token_sink: T,
    diagnostic_sink: D,
}

impl<T: TokenSink, D: DiagnosticSink> Lexer<T, D> {
    /// Creates a lexer with the default [`Settings`].
    pub fn new(token_sink: T, diagnostic_sink: D) -> Self {
        Self::with_resolved_settings(
            &Settings::default(),
            UTF_8,
            mime::TEXT_HTML,
            token_sink,
            diagnostic_sink,
        )
    }

    /// Creates a lexer with the given [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Encoding`] if [`Settings::encoding`] is an unknown label or
    /// names an encoding that isn't ASCII-compatible, and [`SettingsError::InvalidContentType`]
    /// if [`Settings::content_type`] can't be parsed as a MIME type.
    ///
    /// ```
    /// use tagsoup::{EncodingError, IgnoreDiagnostics, Lexer, Settings, SettingsError, Token};
    ///
    /// let settings = Settings {
    ///     encoding: "utf-16le",
    ///     ..Settings::default()
    /// };
    ///
    /// let err = Lexer::try_new(settings, |_: &Token<'_>| (), IgnoreDiagnostics).err();
    ///
    /// assert!(matches!(
    ///     err,
    ///     Some(SettingsError::Encoding(EncodingError::NonAsciiCompatibleEncoding))
    /// ));
    /// ```
    pub fn try_new(
        settings: Settings<'_>,
        token_sink: T,
        diagnostic_sink: D,
    ) -> Result<Self, SettingsError> {
        let encoding = settings.resolve_encoding()?;
        let content_type = settings.resolve_content_type()?;

        Ok(Self::with_resolved_settings(
            &settings,
            encoding,
            content_type,
            token_sink,
            diagnostic_sink,
        ))
    }

    fn with_resolved_settings(
        settings: &Settings<'_>,
        encoding: &'static Encoding,
        content_type: Mime,
        token_sink: T,
        diagnostic_sink: D,
    ) -> Self {
        Lexer {
            state: State::Start,
            literal: Vec::with_capacity(settings.memory_settings.preallocated_literal_buffer_size),
            token: Vec::with_capacity(DEFAULT_TOKEN_BUFFER_CAPACITY),
            attr_name: Vec::new(),
            attr_value: Vec::new(),
            attr_quote: QuoteStyle::None,
            has_attr_value: false,
            element: None,
            element_stack: ElementStack::default(),
            literal_close: Vec::new(),
            script_escape: ScriptEscape::Plain,
            discard_until_start: false,
            deferred_close: None,
            line: 1,
            tag_start_line: 1,
            budget: ByteBudget::new(settings.memory_settings.size_limit),
            skip_parsing: false,
            doctype: DocType::default(),
            content_type,
            encoding,
            source_id: settings.source_id.to_owned(),
            token_sink,
            diagnostic_sink,
        }
    }

    /// Feeds the next chunk of input.
    pub fn write(&mut self, chunk: &[u8]) {
        trace!(@chunk chunk);

        let was_exceeded = self.budget.is_exceeded();

        if let Err(err) = self.budget.consume(chunk.len()) {
            if !was_exceeded {
                self.report(Diagnostic::from(err));
            }
        }

        for &ch in chunk {
            if self.skip_parsing {
                return;
            }

            if ch == b'\n' {
                self.line += 1;
            }

            self.literal.push(ch);

            trace!(@char self.state, ch);

            self.dispatch(ch);
        }
    }

    /// Finishes the session: reports and drops unterminated tokens, flushes
    /// pending text and closes every element that is still open.
    ///
    /// Returns the sinks back to the caller.
    pub fn end(mut self) -> (T, D) {
        trace!(@end);

        if !self.token.is_empty() {
            let token = to_message_string(&self.token);

            self.report(Diagnostic::EofInToken { token });
            self.token.clear();
        }

        if !self.attr_name.is_empty() {
            let name = to_message_string(&self.attr_name);

            self.report(Diagnostic::EofInAttributeName { name });
            self.attr_name.clear();
        }

        if !self.attr_value.is_empty() {
            let value = to_message_string(&self.attr_value);

            self.report(Diagnostic::EofInAttributeValue { value });
            self.attr_value.clear();
        }

        if let Some(name) = self.deferred_close.take() {
            self.token = name;
            self.emit_end_tag(CloseStyle::Explicit);
        }

        self.emit_text();

        // NOTE: elements cut off by the size limit count as closed.
        let style = if self.skip_parsing {
            CloseStyle::Explicit
        } else {
            CloseStyle::Unclosed
        };

        while let Some(element) = self.element_stack.pop() {
            let line = element.line;
            let diagnostic = (!element.keyword.is_optionally_closed()).then(|| {
                Diagnostic::EofWithOpenTag {
                    tag: to_message_string(&element.name),
                }
            });

            self.close_element(element, style);

            if let Some(diagnostic) = diagnostic {
                self.report_at(line, diagnostic);
            }
        }

        debug_assert!(self.element_stack.is_empty());

        self.element = None;

        (self.token_sink, self.diagnostic_sink)
    }

    /// Document type announced by the last doctype directive.
    #[inline]
    pub fn doctype(&self) -> DocType {
        self.doctype
    }

    /// Current line, starting from 1.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Whether more input was fed than the configured size limit allows.
    #[inline]
    pub fn size_limit_exceeded(&self) -> bool {
        self.budget.is_exceeded()
    }

    /// Number of bytes fed so far, including the ignored ones.
    #[inline]
    pub fn bytes_consumed(&self) -> usize {
        self.budget.current_usage()
    }

    /// Encoding of the input, resolved from [`Settings::encoding`].
    #[inline]
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Number of elements that are currently open.
    #[inline]
    pub fn open_element_count(&self) -> usize {
        self.element_stack.len()
    }

    fn dispatch(&mut self, ch: u8) {
        match self.state {
            State::Start => self.start_state(ch),
            State::TagOpen => self.tag_open_state(ch),
            State::TagName => self.tag_name_state(ch),
            State::TagCloseNoName => self.tag_close_no_name_state(ch),
            State::TagClose | State::TagCloseTerminate => self.tag_close_state(ch),
            State::TagBriefClose => self.tag_brief_close_state(ch),
            State::MarkupDeclarationOpen => self.markup_declaration_open_state(ch),
            State::CommentStart => self.comment_start_state(ch),
            State::CommentBody => self.comment_body_state(ch),
            State::CommentEndDash => self.comment_end_dash_state(ch),
            State::CommentEnd => self.comment_end_state(ch),
            State::CdataStart(matched) => self.cdata_start_state(ch, matched),
            State::CdataBody => self.cdata_body_state(ch),
            State::CdataEndBracket => self.cdata_end_bracket_state(ch),
            State::CdataEnd => self.cdata_end_state(ch),
            State::BeforeAttributeName => self.before_attribute_name_state(ch),
            State::AttributeName => self.attribute_name_state(ch),
            State::AfterAttributeName => self.after_attribute_name_state(ch),
            State::BeforeAttributeValue => self.before_attribute_value_state(ch),
            State::AttributeValueUnquoted => self.attribute_value_unquoted_state(ch),
            State::AttributeValueSingleQuoted => self.attribute_value_quoted_state(ch, b'\''),
            State::AttributeValueDoubleQuoted => self.attribute_value_quoted_state(ch, b'"'),
            State::LiteralTagBody => self.literal_tag_body_state(ch),
            State::ScriptTagBody => self.script_tag_body_state(ch),
            State::Directive => self.directive_state(ch),
            State::BogusComment => self.bogus_comment_state(ch),
        }
    }

    #[inline]
    fn report(&mut self, diagnostic: Diagnostic) {
        self.report_at(self.line, diagnostic);
    }

    fn report_at(&mut self, line: usize, diagnostic: Diagnostic) {
        trace!(@diagnostic line, diagnostic);

        self.diagnostic_sink
            .report(&self.source_id, line, &diagnostic);
    }

    /// Emits the first `len` bytes of the literal buffer as text.
    fn emit_text_prefix(&mut self, len: usize) {
        if len > 0 {
            emit!(self, Token::Text(Bytes::from(&self.literal[..len])));

            self.literal.drain(..len);
        }
    }

    fn emit_text(&mut self) {
        self.emit_text_prefix(self.literal.len());
        self.state = State::Start;
    }

    fn emit_start_tag(&mut self, allow_implicit_close: bool) {
        if self.discard_until_start {
            match self.deferred_close.take() {
                Some(name) => {
                    self.token = name;
                    self.emit_end_tag(CloseStyle::Explicit);
                }
                None => {
                    self.literal.clear();
                    self.state = State::Start;
                }
            }

            return;
        }

        let Some(element) = self.element.take() else {
            debug_assert!(false, "Element should be created at this point");
            self.state = State::Start;
            return;
        };

        debug_assert!(self.token.is_empty());

        while self
            .element_stack
            .parent()
            .is_some_and(|parent| parent.keyword.is_auto_closed_by(element.keyword))
        {
            if let Some(parent) = self.element_stack.pop() {
                self.close_element(parent, CloseStyle::Auto);
            }
        }

        emit!(
            self,
            Token::StartTag(StartTag {
                name: &element.name,
                keyword: element.keyword,
                attributes: &element.attributes,
                line: element.line,
                raw: &self.literal,
            })
        );

        self.literal.clear();

        if self.budget.is_exceeded() {
            self.skip_parsing = true;
        }

        if element.keyword.is_literal() {
            self.state = if element.keyword == Keyword::Script {
                State::ScriptTagBody
            } else {
                State::LiteralTagBody
            };

            self.script_escape = ScriptEscape::Plain;
            self.literal_close.clear();
            self.literal_close.extend_from_slice(b"</");
            self.literal_close.extend_from_slice(&element.name);
            self.literal_close.push(b'>');
        } else {
            self.state = State::Start;
        }

        let implicitly_closed = allow_implicit_close && element.keyword.is_implicitly_closed();
        let name = element.name;

        self.element_stack
            .push(OpenElement::new(name, element.line));

        if implicitly_closed {
            if let Some(open) = self.element_stack.parent() {
                self.token.extend_from_slice(&open.name);
            }

            self.emit_end_tag(CloseStyle::Implicit);
        }
    }

    fn emit_brief_close(&mut self) {
        if !self.discard_until_start {
            if let Some(element) = self.element_stack.pop() {
                self.close_element(element, CloseStyle::Brief);
            }
        }

        self.state = State::Start;
    }

    /// Closes the element referred to by the pending token, or emits the
    /// literal buffer as text if there's no such element.
    fn emit_end_tag(&mut self, style: CloseStyle) {
        match self.pop_element_matching_close_tag() {
            Some(element) => self.close_element(element, style),
            None => {
                let tag = to_message_string(&self.token);

                self.report(Diagnostic::UnmatchedCloseTag { tag });
                self.emit_text();
            }
        }

        self.literal.clear();
        self.token.clear();
        self.state = State::Start;
    }

    fn close_element(&mut self, element: OpenElement, style: CloseStyle) {
        // NOTE: only explicit closes have a counterpart in the input.
        let raw: &[u8] = if style == CloseStyle::Explicit {
            &self.literal
        } else {
            &[]
        };

        emit!(
            self,
            Token::EndTag(EndTag {
                name: &element.name,
                keyword: element.keyword,
                style,
                line: self.line,
                raw,
            })
        );

        if self.budget.is_exceeded() {
            self.skip_parsing = true;
        }
    }

    fn pop_element_matching_close_tag(&mut self) -> Option<OpenElement> {
        let index = self.element_stack.find_matching_close_tag(&self.token)?;

        while let Some(skipped) = self.element_stack.pop_above(index) {
            if !skipped.keyword.is_optionally_closed() {
                let tag = to_message_string(&skipped.name);

                self.report_at(skipped.line, Diagnostic::UnclosedElement { tag });
            }

            self.close_element(skipped, CloseStyle::Unclosed);
        }

        self.element_stack.pop()
    }
}

cfg_if! {
    if #[cfg(feature = "integration_test")] {
        impl<T: TokenSink, D: DiagnosticSink> Lexer<T, D> {
            pub fn state(&self) -> State {
                self.state
            }
        }
    }
}
