use mime::Mime;

const XHTML_SUBTYPE: &str = "xhtml";

/// Document type announced by a `<!doctype ...>` directive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum DocType {
    /// No doctype directive has been seen yet.
    #[default]
    Unknown,
    Html5,
    Xhtml5,
    Html4Strict,
    Html4Transitional,
    Xhtml10Strict,
    Xhtml10Transitional,
    Xhtml10Frameset,
    Xhtml11,
    /// A doctype directive that doesn't match any of the known types.
    Other,
}

static PUBLIC_IDS: [(&str, DocType); 6] = [
    ("-//W3C//DTD HTML 4.01//EN", DocType::Html4Strict),
    ("-//W3C//DTD HTML 4.01 Transitional//EN", DocType::Html4Transitional),
    ("-//W3C//DTD XHTML 1.0 Strict//EN", DocType::Xhtml10Strict),
    ("-//W3C//DTD XHTML 1.0 Transitional//EN", DocType::Xhtml10Transitional),
    ("-//W3C//DTD XHTML 1.0 Frameset//EN", DocType::Xhtml10Frameset),
    ("-//W3C//DTD XHTML 1.1//EN", DocType::Xhtml11),
];

#[inline]
pub(crate) fn is_xml_like(content_type: &Mime) -> bool {
    content_type.subtype() == XHTML_SUBTYPE || content_type.suffix() == Some(mime::XML)
}

fn split_words(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split(|&b| crate::base::is_html_space(b))
        .filter(|word| !word.is_empty())
}

impl DocType {
    /// Parses the text of a directive (the bytes between `<!` and `>`).
    ///
    /// Returns `None` if the directive isn't a doctype at all.
    pub fn parse(directive: &[u8], content_type: &Mime) -> Option<Self> {
        let mut words = split_words(directive);

        if !words.next()?.eq_ignore_ascii_case(b"doctype") {
            return None;
        }

        let root = words.next();

        if root.is_some_and(|r| r.eq_ignore_ascii_case(b"html")) && words.next().is_none() {
            return Some(if is_xml_like(content_type) {
                DocType::Xhtml5
            } else {
                DocType::Html5
            });
        }

        let doctype = PUBLIC_IDS
            .iter()
            .find(|(public_id, _)| {
                memchr::memmem::find(directive, public_id.as_bytes()).is_some()
            })
            .map_or(DocType::Other, |&(_, doctype)| doctype);

        Some(doctype)
    }

    #[inline]
    pub fn is_xhtml(self) -> bool {
        matches!(
            self,
            DocType::Xhtml5
                | DocType::Xhtml10Strict
                | DocType::Xhtml10Transitional
                | DocType::Xhtml10Frameset
                | DocType::Xhtml11
        )
    }

    #[inline]
    pub fn is_html5(self) -> bool {
        matches!(self, DocType::Html5 | DocType::Xhtml5)
    }
}
