use std::str;

// NOTE: the longest keyword is "blockquote"/"http-equiv"; anything longer
// can't be a keyword, so we don't bother lowercasing it.
const MAX_KEYWORD_LEN: usize = 10;

macro_rules! declare_keywords {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Identity of a well-known tag or attribute name.
        ///
        /// Names are looked up case-insensitively; anything that isn't
        /// in the table maps to [`Keyword::NotAKeyword`].
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            #[default]
            NotAKeyword,
            $($variant),+
        }

        impl Keyword {
            /// Canonical lowercase spelling of the keyword.
            pub fn as_str(self) -> Option<&'static str> {
                match self {
                    Keyword::NotAKeyword => None,
                    $(Keyword::$variant => Some($name)),+
                }
            }

            #[inline]
            fn from_lowercase(name: &str) -> Self {
                match name {
                    $($name => Keyword::$variant,)+
                    _ => Keyword::NotAKeyword,
                }
            }
        }
    };
}

declare_keywords! {
    Xml => "?xml",
    A => "a",
    Abbr => "abbr",
    Action => "action",
    Address => "address",
    Alt => "alt",
    Area => "area",
    Article => "article",
    Aside => "aside",
    Async => "async",
    B => "b",
    Base => "base",
    Bdi => "bdi",
    Bdo => "bdo",
    Blockquote => "blockquote",
    Body => "body",
    Br => "br",
    Button => "button",
    Caption => "caption",
    Charset => "charset",
    Cite => "cite",
    Class => "class",
    Code => "code",
    Col => "col",
    Colgroup => "colgroup",
    Content => "content",
    Dd => "dd",
    Defer => "defer",
    Dfn => "dfn",
    Dir => "dir",
    Div => "div",
    Dl => "dl",
    Dt => "dt",
    Em => "em",
    Embed => "embed",
    Fieldset => "fieldset",
    Font => "font",
    Footer => "footer",
    Form => "form",
    Frame => "frame",
    Frameset => "frameset",
    H1 => "h1",
    H2 => "h2",
    H3 => "h3",
    H4 => "h4",
    H5 => "h5",
    H6 => "h6",
    Head => "head",
    Header => "header",
    Height => "height",
    Hgroup => "hgroup",
    Hr => "hr",
    Href => "href",
    Html => "html",
    HttpEquiv => "http-equiv",
    I => "i",
    Id => "id",
    Iframe => "iframe",
    Img => "img",
    Input => "input",
    Kbd => "kbd",
    Keygen => "keygen",
    Label => "label",
    Lang => "lang",
    Li => "li",
    Link => "link",
    Mark => "mark",
    Media => "media",
    Menu => "menu",
    Meta => "meta",
    Method => "method",
    Name => "name",
    Nav => "nav",
    Noembed => "noembed",
    Noframes => "noframes",
    Noscript => "noscript",
    Object => "object",
    Ol => "ol",
    Onload => "onload",
    Optgroup => "optgroup",
    Option => "option",
    P => "p",
    Param => "param",
    Pre => "pre",
    Q => "q",
    Rel => "rel",
    Rp => "rp",
    Rt => "rt",
    Ruby => "ruby",
    S => "s",
    Samp => "samp",
    Script => "script",
    Section => "section",
    Select => "select",
    Small => "small",
    Source => "source",
    Span => "span",
    Src => "src",
    Strong => "strong",
    Style => "style",
    Sub => "sub",
    Sup => "sup",
    Table => "table",
    Tbody => "tbody",
    Td => "td",
    Textarea => "textarea",
    Tfoot => "tfoot",
    Th => "th",
    Thead => "thead",
    Time => "time",
    Title => "title",
    Tr => "tr",
    Track => "track",
    Type => "type",
    U => "u",
    Ul => "ul",
    Value => "value",
    Var => "var",
    Video => "video",
    Wbr => "wbr",
    Width => "width",
    Xmp => "xmp",
}

impl Keyword {
    /// Looks up a tag or attribute name, ignoring ASCII case.
    pub fn lookup(name: &[u8]) -> Self {
        if name.is_empty() || name.len() > MAX_KEYWORD_LEN {
            return Keyword::NotAKeyword;
        }

        let mut buffer = [0; MAX_KEYWORD_LEN];
        let lowercased = &mut buffer[..name.len()];

        lowercased.copy_from_slice(name);
        lowercased.make_ascii_lowercase();

        match str::from_utf8(lowercased) {
            Ok(name) => Keyword::from_lowercase(name),
            Err(_) => Keyword::NotAKeyword,
        }
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self != Keyword::NotAKeyword
    }
}
