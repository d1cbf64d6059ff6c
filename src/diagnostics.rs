use crate::base::Bytes;
use crate::memory::BudgetExceededError;
use thiserror::Error;

/// Broad category of a [`Diagnostic`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Malformed punctuation that was recovered by reinterpreting the
    /// offending bytes as text.
    Syntax,
    /// Mismatched or missing close tags, recovered by synthesizing closes.
    Structure,
    /// The configured size limit was hit and the rest of the input ignored.
    ResourceLimit,
}

/// A non-fatal warning produced while lexing.
///
/// None of these ever stop the lexer; they're reported through the
/// [`DiagnosticSink`](crate::DiagnosticSink) and lexing continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Invalid tag syntax: unexpected sequence `<{ch}'")]
    UnexpectedTagSequence { ch: char },

    #[error("Invalid character `{ch}` while parsing tag `{tag}'")]
    InvalidTagNameChar { ch: char, tag: String },

    #[error("Invalid tag syntax: </>")]
    EmptyCloseTag,

    #[error("Invalid tag syntax: expected `>' after `</{tag}' got `{ch}'")]
    UnexpectedCharAfterCloseTag { tag: String, ch: char },

    #[error("Invalid comment syntax")]
    InvalidCommentSyntax,

    #[error("Invalid CDATA syntax")]
    InvalidCdataSyntax,

    #[error("Making element with empty tag name")]
    EmptyTagName,

    #[error("Unexpected char `{ch}' in attribute list")]
    UnexpectedAttributeChar { ch: char },

    #[error("Unexpected close-tag `{tag}', no tags are open")]
    UnmatchedCloseTag { tag: String },

    #[error("Unclosed element `{tag}'")]
    UnclosedElement { tag: String },

    #[error("End-of-file in mid-token: {token}")]
    EofInToken { token: String },

    #[error("End-of-file in mid-attribute-name: {name}")]
    EofInAttributeName { name: String },

    #[error("End-of-file in mid-attribute-value: {value}")]
    EofInAttributeValue { value: String },

    #[error("End-of-file with open tag: {tag}")]
    EofWithOpenTag { tag: String },

    #[error("{0}")]
    SizeLimitExceeded(#[from] BudgetExceededError),
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UnmatchedCloseTag { .. }
            | Diagnostic::UnclosedElement { .. }
            | Diagnostic::EofWithOpenTag { .. } => DiagnosticKind::Structure,
            Diagnostic::SizeLimitExceeded(_) => DiagnosticKind::ResourceLimit,
            _ => DiagnosticKind::Syntax,
        }
    }
}

#[inline]
pub(crate) fn to_message_string(bytes: &[u8]) -> String {
    Bytes::from(bytes).as_debug_string()
}
