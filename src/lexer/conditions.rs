use crate::base::is_html_space;

#[inline]
fn is_i18n_char(ch: u8) -> bool {
    ch >= 0x80
}

#[inline]
pub fn is_legal_tag_first_char(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

#[inline]
pub fn is_legal_tag_char(ch: u8) -> bool {
    is_i18n_char(ch) || ch.is_ascii_alphanumeric() || matches!(ch, b'<' | b'-' | b'#' | b'_' | b':')
}

#[inline]
pub fn is_legal_attr_name_char(ch: u8) -> bool {
    is_i18n_char(ch) || !(matches!(ch, b'=' | b'>' | b'/') || is_html_space(ch))
}

#[inline]
pub fn can_end_tag(ch: u8) -> bool {
    is_html_space(ch) || ch == b'/' || ch == b'>'
}
