/// Lexing mode, exactly one is active at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Text content.
    Start,
    /// Right after `<`.
    TagOpen,
    /// Name of a start tag.
    TagName,
    /// Right after `</`.
    TagCloseNoName,
    /// Name of a close tag.
    TagClose,
    /// Whitespace after the name of a close tag, only `>` may follow.
    TagCloseTerminate,
    /// `/` seen where an attribute could start.
    TagBriefClose,
    /// Right after `<!`.
    MarkupDeclarationOpen,
    /// `<!-`
    CommentStart,
    CommentBody,
    /// `-` in a comment body.
    CommentEndDash,
    /// `--` in a comment body.
    CommentEnd,
    /// `<![` followed by the given number of bytes of `CDATA[`.
    CdataStart(usize),
    CdataBody,
    /// `]` in a CDATA body.
    CdataEndBracket,
    /// `]]` in a CDATA body.
    CdataEnd,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueUnquoted,
    AttributeValueSingleQuoted,
    AttributeValueDoubleQuoted,
    /// Content of a literal element other than `script`.
    LiteralTagBody,
    ScriptTagBody,
    /// `<!` followed by a name, e.g. a doctype.
    Directive,
    /// `<?...>` or `</` followed by a non-name character.
    BogusComment,
}
