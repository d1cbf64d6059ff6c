use crate::errors::{EncodingError, SettingsError};
use crate::html::Keyword;
use encoding_rs::Encoding;
use mime::Mime;

/// Specifies the memory settings for the [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySettings {
    /// Specifies the number of bytes that should be preallocated on
    /// [`Lexer`](crate::Lexer) instantiation for the buffer holding bytes
    /// that haven't been emitted as a token yet.
    ///
    /// ### Default
    ///
    /// `1024` bytes when constructed with `MemorySettings::default()`.
    pub preallocated_literal_buffer_size: usize,

    /// Sets a hard limit in bytes on the amount of input the lexer consumes.
    ///
    /// Once crossed, the lexer stops consuming input after the next element
    /// open or close, and closes everything still open when the session
    /// ends. The limit is checked at chunk granularity.
    ///
    /// ### Default
    ///
    /// `None` (no limit) when constructed with `MemorySettings::default()`.
    pub size_limit: Option<usize>,
}

impl Default for MemorySettings {
    #[inline]
    fn default() -> Self {
        MemorySettings {
            preallocated_literal_buffer_size: 1024,
            size_limit: None,
        }
    }
}

/// Specifies settings for the [`Lexer`](crate::Lexer).
#[derive(Debug, Clone)]
pub struct Settings<'s> {
    /// Identifier of the input (e.g. its URL), passed along with every
    /// diagnostic.
    ///
    /// ### Default
    ///
    /// Empty string.
    pub source_id: &'s str,

    /// Label of the [character encoding] of the input.
    ///
    /// The lexer operates on bytes, so the encoding is only validated to be
    /// ASCII-compatible and made available for decoding token bytes.
    ///
    /// ### Default
    ///
    /// `"utf-8"` when constructed with `Settings::default()`.
    ///
    /// [character encoding]: https://encoding.spec.whatwg.org/
    pub encoding: &'s str,

    /// Content type of the input. An XML-like content type (e.g.
    /// `application/xhtml+xml`) makes `<!doctype html>` announce XHTML.
    ///
    /// ### Default
    ///
    /// `"text/html"` when constructed with `Settings::default()`.
    pub content_type: &'s str,

    /// Specifies the memory settings.
    pub memory_settings: MemorySettings,

    /// Whether `noscript`, `noembed` and `noframes` should be treated as
    /// ordinary markup by the caller. The lexer itself always tokenizes
    /// their content, so this is consulted via
    /// [`Settings::is_literal_content`] before feeding it input.
    ///
    /// ### Default
    ///
    /// `true` when constructed with `Settings::default()`.
    pub sometimes_literal_as_markup: bool,
}

impl Default for Settings<'_> {
    #[inline]
    fn default() -> Self {
        Settings {
            source_id: "",
            encoding: "utf-8",
            content_type: "text/html",
            memory_settings: MemorySettings::default(),
            sometimes_literal_as_markup: true,
        }
    }
}

impl Settings<'_> {
    /// Whether the content of an element with the given keyword is opaque
    /// text under these settings.
    #[inline]
    pub fn is_literal_content(&self, keyword: Keyword) -> bool {
        keyword.is_literal() || (!self.sometimes_literal_as_markup && keyword.is_sometimes_literal())
    }

    pub(crate) fn resolve_encoding(&self) -> Result<&'static Encoding, EncodingError> {
        let encoding = Encoding::for_label_no_replacement(self.encoding.as_bytes())
            .ok_or(EncodingError::UnknownEncoding)?;

        if encoding.is_ascii_compatible() {
            Ok(encoding)
        } else {
            Err(EncodingError::NonAsciiCompatibleEncoding)
        }
    }

    pub(crate) fn resolve_content_type(&self) -> Result<Mime, SettingsError> {
        self.content_type
            .parse::<Mime>()
            .map_err(|_| SettingsError::InvalidContentType(self.content_type.to_owned()))
    }
}
