//! ***TagSoup*** is a lenient streaming HTML lexer.
//!
//! It turns arbitrary, possibly malformed, HTML fed in chunks of any size into
//! a stream of tokens (start tags, end tags, text, comments, CDATA sections
//! and directives) while keeping track of open elements. Nothing is ever
//! rejected: markup that can't be understood is passed through as text and a
//! [`Diagnostic`] is reported, so concatenating the raw bytes of all emitted
//! tokens gives back the input.
//!
//! ```
//! use tagsoup::{CloseStyle, IgnoreDiagnostics, Lexer, Token};
//!
//! let mut names = Vec::new();
//!
//! let mut lexer = Lexer::new(
//!     |token: &Token<'_>| match token {
//!         Token::StartTag(t) => names.push(format!("+{}", t.name().as_string(encoding_rs::UTF_8))),
//!         Token::EndTag(t) if t.style() == CloseStyle::Auto => {
//!             names.push(format!("-{}(a)", t.name().as_string(encoding_rs::UTF_8)))
//!         }
//!         _ => (),
//!     },
//!     IgnoreDiagnostics,
//! );
//!
//! lexer.write(b"<p>a<p");
//! lexer.write(b">b");
//! lexer.end();
//!
//! assert_eq!(names, ["+p", "-p(a)", "+p"]);
//! ```

#[macro_use]
mod debug_trace;

mod base;
mod diagnostics;
mod errors;
mod lexer;
mod memory;
mod settings;
mod sink;
mod token;

pub mod html;

pub use self::base::Bytes;
pub use self::diagnostics::{Diagnostic, DiagnosticKind};
pub use self::errors::{EncodingError, SettingsError};
pub use self::html::{DocType, Keyword, KeywordFlags};
pub use self::lexer::Lexer;
pub use self::memory::BudgetExceededError;
pub use self::settings::{MemorySettings, Settings};
pub use self::sink::{DiagnosticSink, IgnoreDiagnostics, TokenSink};
pub use self::token::{Attribute, CloseStyle, EndTag, Markup, QuoteStyle, StartTag, Token};

#[cfg(feature = "integration_test")]
pub mod test_utils {
    pub use crate::lexer::State;
}
