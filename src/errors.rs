//! Errors returned while setting up a lexing session.
//!
//! Lexing itself never fails: problems found in the input are reported as
//! [`Diagnostic`](crate::Diagnostic)s instead.

use thiserror::Error;

/// An error that occurs if an incorrect [`encoding`] label was provided in [`Settings`].
///
/// [`encoding`]: crate::Settings::encoding
/// [`Settings`]: crate::Settings
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum EncodingError {
    /// The provided value doesn't match any of the [labels specified in the standard].
    ///
    /// [labels specified in the standard]: https://encoding.spec.whatwg.org/#names-and-labels
    #[error("Unknown character encoding has been provided.")]
    UnknownEncoding,

    /// The provided label is for one of the non-ASCII-compatible encodings (`UTF-16LE`, `UTF-16BE`,
    /// `ISO-2022-JP` and `replacement`). These encodings are not supported since the lexer
    /// matches markup delimiters as ASCII bytes.
    #[error("Expected ASCII-compatible encoding.")]
    NonAsciiCompatibleEncoding,
}

/// An error that occurs if the [`Settings`](crate::Settings) can't be used
/// to start a lexing session.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum SettingsError {
    #[error("{0}")]
    Encoding(#[from] EncodingError),

    #[error("Invalid content type `{0}'.")]
    InvalidContentType(String),
}
