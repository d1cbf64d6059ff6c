use tagsoup::{CloseStyle, Diagnostic, DocType, Lexer, Settings, Token};
use std::cell::RefCell;
use std::rc::Rc;

/// Owned counterpart of [`Token`] that can outlive the lexer callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestToken {
    StartTag {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        line: usize,
    },
    EndTag {
        name: String,
        style: CloseStyle,
        line: usize,
    },
    Text(String),
    Comment(String, usize),
    IeDirective(String, usize),
    Cdata(String, usize),
    Directive(String, usize),
}

fn to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl From<&Token<'_>> for TestToken {
    fn from(token: &Token<'_>) -> Self {
        match token {
            Token::StartTag(t) => TestToken::StartTag {
                name: to_string(&t.name()),
                attributes: t
                    .attributes()
                    .iter()
                    .map(|a| (to_string(&a.name()), a.value().map(|v| to_string(&v))))
                    .collect(),
                line: t.line(),
            },
            Token::EndTag(t) => TestToken::EndTag {
                name: to_string(&t.name()),
                style: t.style(),
                line: t.line(),
            },
            Token::Text(t) => TestToken::Text(to_string(t)),
            Token::Comment(m) => TestToken::Comment(to_string(&m.text()), m.line()),
            Token::IeDirective(m) => TestToken::IeDirective(to_string(&m.text()), m.line()),
            Token::Cdata(m) => TestToken::Cdata(to_string(&m.text()), m.line()),
            Token::Directive(m) => TestToken::Directive(to_string(&m.text()), m.line()),
        }
    }
}

#[derive(Debug, Default)]
pub struct LexingResult {
    /// Tokens with adjacent text merged.
    pub tokens: Vec<TestToken>,
    /// Concatenated raw bytes of all tokens.
    pub raw: Vec<u8>,
    pub diagnostics: Vec<(usize, Diagnostic)>,
    pub doctype: DocType,
    pub size_limit_exceeded: bool,
}

impl LexingResult {
    fn push(&mut self, token: &Token<'_>) {
        self.raw.extend_from_slice(&token.raw());

        let token = TestToken::from(token);

        if let (TestToken::Text(text), Some(TestToken::Text(prev))) = (&token, self.tokens.last_mut()) {
            prev.push_str(text);
        } else {
            self.tokens.push(token);
        }
    }
}

pub fn lex_chunks<C: AsRef<[u8]>>(chunks: &[C], settings: Settings<'_>) -> LexingResult {
    let result = Rc::new(RefCell::new(LexingResult::default()));
    let token_result = Rc::clone(&result);
    let diagnostic_result = Rc::clone(&result);

    let mut lexer = Lexer::try_new(
        settings,
        move |token: &Token<'_>| token_result.borrow_mut().push(token),
        move |_: &str, line: usize, diagnostic: &Diagnostic| {
            diagnostic_result
                .borrow_mut()
                .diagnostics
                .push((line, diagnostic.clone()))
        },
    )
    .unwrap();

    for chunk in chunks {
        lexer.write(chunk.as_ref());
    }

    let doctype = lexer.doctype();
    let size_limit_exceeded = lexer.size_limit_exceeded();

    drop(lexer.end());

    let mut result = Rc::try_unwrap(result).unwrap().into_inner();

    result.doctype = doctype;
    result.size_limit_exceeded = size_limit_exceeded;

    result
}

pub fn lex(input: &str) -> LexingResult {
    lex_chunks(&[input], Settings::default())
}
