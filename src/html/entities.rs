//! Attribute value unescaping.
//!
//! Only single-byte (Latin-1) references can be decoded: the lexer doesn't
//! know the document encoding, so anything that would need a multi-byte
//! sequence is reported as a decoding failure instead.

use memchr::memchr;
use std::borrow::Cow;

static SINGLE_BYTE_ENTITIES: &[(&str, u8)] = &[
    ("AElig", 0xC6),
    ("Aacute", 0xC1),
    ("Acirc", 0xC2),
    ("Agrave", 0xC0),
    ("Aring", 0xC5),
    ("Atilde", 0xC3),
    ("Auml", 0xC4),
    ("Ccedil", 0xC7),
    ("ETH", 0xD0),
    ("Eacute", 0xC9),
    ("Ecirc", 0xCA),
    ("Egrave", 0xC8),
    ("Euml", 0xCB),
    ("Iacute", 0xCD),
    ("Icirc", 0xCE),
    ("Igrave", 0xCC),
    ("Iuml", 0xCF),
    ("Ntilde", 0xD1),
    ("Oacute", 0xD3),
    ("Ocirc", 0xD4),
    ("Ograve", 0xD2),
    ("Oslash", 0xD8),
    ("Otilde", 0xD5),
    ("Ouml", 0xD6),
    ("THORN", 0xDE),
    ("Uacute", 0xDA),
    ("Ucirc", 0xDB),
    ("Ugrave", 0xD9),
    ("Uuml", 0xDC),
    ("Yacute", 0xDD),
    ("aacute", 0xE1),
    ("acirc", 0xE2),
    ("acute", 0xB4),
    ("aelig", 0xE6),
    ("agrave", 0xE0),
    ("amp", 0x26),
    ("aring", 0xE5),
    ("atilde", 0xE3),
    ("auml", 0xE4),
    ("brvbar", 0xA6),
    ("ccedil", 0xE7),
    ("cedil", 0xB8),
    ("cent", 0xA2),
    ("copy", 0xA9),
    ("curren", 0xA4),
    ("deg", 0xB0),
    ("divide", 0xF7),
    ("eacute", 0xE9),
    ("ecirc", 0xEA),
    ("egrave", 0xE8),
    ("eth", 0xF0),
    ("euml", 0xEB),
    ("frac12", 0xBD),
    ("frac14", 0xBC),
    ("frac34", 0xBE),
    ("gt", 0x3E),
    ("iacute", 0xED),
    ("icirc", 0xEE),
    ("iexcl", 0xA1),
    ("igrave", 0xEC),
    ("iquest", 0xBF),
    ("iuml", 0xEF),
    ("laquo", 0xAB),
    ("lt", 0x3C),
    ("macr", 0xAF),
    ("micro", 0xB5),
    ("middot", 0xB7),
    ("nbsp", 0xA0),
    ("not", 0xAC),
    ("ntilde", 0xF1),
    ("oacute", 0xF3),
    ("ocirc", 0xF4),
    ("ograve", 0xF2),
    ("ordf", 0xAA),
    ("ordm", 0xBA),
    ("oslash", 0xF8),
    ("otilde", 0xF5),
    ("ouml", 0xF6),
    ("para", 0xB6),
    ("plusmn", 0xB1),
    ("pound", 0xA3),
    ("quot", 0x22),
    ("raquo", 0xBB),
    ("reg", 0xAE),
    ("sect", 0xA7),
    ("shy", 0xAD),
    ("sup1", 0xB9),
    ("sup2", 0xB2),
    ("sup3", 0xB3),
    ("szlig", 0xDF),
    ("thorn", 0xFE),
    ("times", 0xD7),
    ("uacute", 0xFA),
    ("ucirc", 0xFB),
    ("ugrave", 0xF9),
    ("uml", 0xA8),
    ("uuml", 0xFC),
    ("yacute", 0xFD),
    ("yen", 0xA5),
    ("yuml", 0xFF),
];

// NOTE: matched case-insensitively, so e.g. `&Yuml;` is rejected
// instead of silently decoding to `&yuml;`.
static MULTI_BYTE_ENTITIES: &[&str] = &[
    "alefsym", "alpha", "and", "ang", "asymp", "bdquo", "beta", "bull", "cap", "chi", "circ",
    "clubs", "cong", "crarr", "cup", "dagger", "darr", "delta", "diams", "empty", "emsp", "ensp",
    "epsilon", "equiv", "eta", "euro", "exist", "fnof", "forall", "frasl", "gamma", "ge", "harr",
    "hearts", "hellip", "image", "infin", "int", "iota", "isin", "kappa", "lambda", "lang",
    "larr", "lceil", "ldquo", "le", "lfloor", "lowast", "loz", "lrm", "lsaquo", "lsquo", "mdash",
    "minus", "mu", "nabla", "ndash", "ne", "ni", "notin", "nsub", "nu", "oelig", "oline",
    "omega", "omicron", "oplus", "or", "otimes", "part", "permil", "perp", "phi", "pi", "piv",
    "prime", "prod", "prop", "psi", "radic", "rang", "rarr", "rceil", "rdquo", "real", "rfloor",
    "rho", "rlm", "rsaquo", "rsquo", "sbquo", "scaron", "sdot", "sigma", "sigmaf", "sim",
    "spades", "sub", "sube", "sum", "sup", "supe", "tau", "there4", "theta", "thetasym",
    "thinsp", "tilde", "trade", "uarr", "upsih", "upsilon", "weierp", "xi", "yuml", "zeta",
    "zwj", "zwnj", "Alpha", "Beta", "Chi", "Dagger", "Delta", "Epsilon", "Eta", "Gamma",
    "Iota", "Kappa", "Lambda", "Mu", "Nu", "OElig", "Omega", "Omicron", "Phi", "Pi", "Prime",
    "Psi", "Rho", "Scaron", "Sigma", "Tau", "Theta", "Upsilon", "Xi", "Yuml", "Zeta", "dArr",
    "hArr", "lArr", "rArr", "uArr",
];

fn lookup_case_sensitive(name: &[u8]) -> Option<u8> {
    SINGLE_BYTE_ENTITIES
        .iter()
        .find(|(entity, _)| entity.as_bytes() == name)
        .map(|&(_, byte)| byte)
}

fn lookup_case_insensitive(name: &[u8]) -> Option<u8> {
    let mut matches = SINGLE_BYTE_ENTITIES
        .iter()
        .filter(|(entity, _)| entity.as_bytes().eq_ignore_ascii_case(name));

    match (matches.next(), matches.next()) {
        (Some(&(_, byte)), None) => Some(byte),
        // NOTE: names like `aelig` map to different characters depending
        // on case, so a case-insensitive match is ambiguous.
        _ => None,
    }
}

fn is_multi_byte_entity(name: &[u8]) -> bool {
    // NOTE: `yuml` is a single-byte entity that also has a multi-byte
    // capitalized counterpart, the exact spelling was already tried.
    MULTI_BYTE_ENTITIES
        .iter()
        .any(|entity| entity.as_bytes().eq_ignore_ascii_case(name))
}

struct Reference {
    name: Vec<u8>,
    numeric: bool,
    hex: bool,
    value: u32,
}

impl Reference {
    fn new() -> Self {
        Reference {
            name: Vec::new(),
            numeric: false,
            hex: false,
            value: 0,
        }
    }

    // Returns `false` if `ch` can't be a part of the reference.
    fn accumulate(&mut self, ch: u8) -> bool {
        if self.numeric {
            let digit = if self.hex {
                (ch as char).to_digit(16)
            } else {
                (ch as char).to_digit(10)
            };

            match digit {
                Some(digit) => {
                    let radix = if self.hex { 16 } else { 10 };

                    self.value = self.value.saturating_mul(radix).saturating_add(digit);
                }
                None => return false,
            }
        } else if !ch.is_ascii_alphanumeric() {
            return false;
        }

        self.name.push(ch);

        true
    }

    fn resolve_into(&self, terminated: bool, output: &mut Vec<u8>) -> Result<(), ()> {
        if self.numeric && self.name.len() > 1 {
            let byte = u8::try_from(self.value).map_err(|_| ())?;

            output.push(byte);
        } else if let Some(byte) = lookup_case_sensitive(&self.name) {
            output.push(byte);
        } else if is_multi_byte_entity(&self.name) {
            return Err(());
        } else if let Some(byte) = lookup_case_insensitive(&self.name) {
            output.push(byte);
        } else if self.name.eq_ignore_ascii_case(b"apos") {
            output.push(b'\'');
        } else {
            output.push(b'&');
            output.extend_from_slice(&self.name);

            if terminated {
                output.push(b';');
            }
        }

        Ok(())
    }
}

/// Decodes character references in an escaped attribute value.
///
/// Returns `None` if the value contains non-ASCII bytes or references that
/// can't be represented by a single byte. Unknown named references are
/// passed through as is.
pub fn unescape(escaped: &[u8]) -> Option<Cow<'_, [u8]>> {
    let first_amp = match memchr(b'&', escaped) {
        Some(pos) => pos,
        None if escaped.is_ascii() => return Some(Cow::Borrowed(escaped)),
        None => return None,
    };

    if !escaped[..first_amp].is_ascii() {
        return None;
    }

    let mut output = escaped[..first_amp].to_vec();
    let mut reference: Option<Reference> = None;
    let mut pos = first_amp;

    while pos < escaped.len() {
        let ch = escaped[pos];

        match reference.as_mut() {
            None => match ch {
                b'&' => reference = Some(Reference::new()),
                ch if !ch.is_ascii() => return None,
                ch => output.push(ch),
            },
            Some(r) if r.name.is_empty() && ch == b'#' => {
                r.name.push(ch);
                r.numeric = true;

                if matches!(escaped.get(pos + 1), Some(b'x' | b'X')) {
                    r.hex = true;
                    pos += 1;
                }
            }
            Some(r) if ch == b';' => {
                r.resolve_into(true, &mut output).ok()?;
                reference = None;
            }
            Some(_) if !ch.is_ascii() => return None,
            Some(r) => {
                if !r.accumulate(ch) {
                    r.resolve_into(false, &mut output).ok()?;
                    reference = None;

                    // NOTE: re-examine the character now that the
                    // reference before it has been resolved.
                    continue;
                }
            }
        }

        pos += 1;
    }

    if let Some(r) = reference {
        if r.name.is_empty() {
            output.push(b'&');
        } else {
            r.resolve_into(false, &mut output).ok()?;
        }
    }

    Some(Cow::Owned(output))
}
