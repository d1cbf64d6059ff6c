use tagsoup::{Attribute, CloseStyle, IgnoreDiagnostics, Lexer, QuoteStyle, Token, TokenSink};

/// Renders the token stream in a compact form, e.g. `+p 'a' -p(a) +p 'b' -p(u)`.
///
/// Adjacent text tokens are merged.
#[derive(Default)]
pub struct Annotator {
    buffer: String,
    pending_text: Vec<u8>,
}

impl Annotator {
    fn separate(&mut self) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }
    }

    fn flush_text(&mut self) {
        if !self.pending_text.is_empty() {
            self.separate();

            let text = String::from_utf8_lossy(&self.pending_text).into_owned();

            self.buffer.push('\'');
            self.buffer.push_str(&text);
            self.buffer.push('\'');
            self.pending_text.clear();
        }
    }

    fn push_attribute(&mut self, attr: &Attribute, first: bool) {
        self.buffer.push(if first { ':' } else { ',' });
        self.buffer.push_str(&String::from_utf8_lossy(&attr.name()));

        if attr.value().is_none() {
            return;
        }

        match attr.decoded_value() {
            Some(value) => {
                let quote = match attr.quote() {
                    QuoteStyle::None => "",
                    QuoteStyle::Single => "'",
                    QuoteStyle::Double => "\"",
                };

                self.buffer.push('=');
                self.buffer.push_str(quote);
                self.buffer.push_str(&String::from_utf8_lossy(&value));
                self.buffer.push_str(quote);
            }
            None => self.buffer.push_str("=<ERROR>"),
        }
    }

    fn push_markup(&mut self, kind: &str, text: &[u8]) {
        self.separate();
        self.buffer.push('[');
        self.buffer.push_str(kind);
        self.buffer.push(':');
        self.buffer.push_str(&String::from_utf8_lossy(text));
        self.buffer.push(']');
    }

    pub fn finish(mut self) -> String {
        self.flush_text();
        self.buffer
    }
}

impl TokenSink for Annotator {
    fn handle_token(&mut self, token: &Token<'_>) {
        if let Token::Text(text) = token {
            self.pending_text.extend_from_slice(text);
            return;
        }

        self.flush_text();

        match token {
            Token::StartTag(tag) => {
                self.separate();
                self.buffer.push('+');
                self.buffer.push_str(&String::from_utf8_lossy(&tag.name()));

                for (i, attr) in tag.attributes().iter().enumerate() {
                    self.push_attribute(attr, i == 0);
                }
            }
            Token::EndTag(tag) => {
                let style = match tag.style() {
                    CloseStyle::Explicit => "e",
                    CloseStyle::Implicit => "i",
                    CloseStyle::Brief => "b",
                    CloseStyle::Auto => "a",
                    CloseStyle::Unclosed => "u",
                };

                self.separate();
                self.buffer.push('-');
                self.buffer.push_str(&String::from_utf8_lossy(&tag.name()));
                self.buffer.push('(');
                self.buffer.push_str(style);
                self.buffer.push(')');
            }
            Token::Comment(c) => self.push_markup("comment", &c.text()),
            Token::IeDirective(d) => self.push_markup("ie", &d.text()),
            Token::Cdata(c) => self.push_markup("cdata", &c.text()),
            Token::Directive(d) => self.push_markup("directive", &d.text()),
            Token::Text(_) => unreachable!(),
        }
    }
}

pub fn annotate_chunks<C: AsRef<[u8]>>(chunks: &[C]) -> String {
    let mut lexer = Lexer::new(Annotator::default(), IgnoreDiagnostics);

    for chunk in chunks {
        lexer.write(chunk.as_ref());
    }

    lexer.end().0.finish()
}

pub fn annotate(input: &[u8]) -> String {
    annotate_chunks(&[input])
}
