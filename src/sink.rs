use crate::diagnostics::Diagnostic;
use crate::token::Token;

/// Receives tokens from the [`Lexer`](crate::Lexer), in document order.
pub trait TokenSink {
    fn handle_token(&mut self, token: &Token<'_>);
}

impl<F: FnMut(&Token<'_>)> TokenSink for F {
    #[inline]
    fn handle_token(&mut self, token: &Token<'_>) {
        self(token);
    }
}

/// Receives non-fatal warnings from the [`Lexer`](crate::Lexer).
pub trait DiagnosticSink {
    fn report(&mut self, source_id: &str, line: usize, diagnostic: &Diagnostic);
}

impl<F: FnMut(&str, usize, &Diagnostic)> DiagnosticSink for F {
    #[inline]
    fn report(&mut self, source_id: &str, line: usize, diagnostic: &Diagnostic) {
        self(source_id, line, diagnostic);
    }
}

/// A [`DiagnosticSink`] that drops everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct IgnoreDiagnostics;

impl DiagnosticSink for IgnoreDiagnostics {
    #[inline]
    fn report(&mut self, _source_id: &str, _line: usize, _diagnostic: &Diagnostic) {}
}
