//! Byte and character classification for the raw scanner.
//!
//! Everything here is a pure predicate over single bytes. UTF-8 handling is
//! *optimistic*: a lead byte plus the expected number of continuation bytes
//! counts as one character, with no validation of the decoded codepoint
//! (overlong forms and surrogates match too). The identifier oracle in the
//! cooking layer applies the format's real Unicode identifier rules; fixing
//! the overmatch here would change which rule a malformed sequence falls
//! through to, so it is deliberately left loose.

/// ASCII letter, either case.
#[inline]
pub fn is_ascii_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Lead byte of a 2-byte UTF-8 sequence (`110xxxxx`).
#[inline]
pub fn is_utf8_lead2(b: u8) -> bool {
    (0xC0..=0xDF).contains(&b)
}

/// Lead byte of a 3-byte UTF-8 sequence (`1110xxxx`).
#[inline]
pub fn is_utf8_lead3(b: u8) -> bool {
    (0xE0..=0xEF).contains(&b)
}

/// Lead byte of a 4-byte UTF-8 sequence (`11110xxx`).
#[inline]
pub fn is_utf8_lead4(b: u8) -> bool {
    (0xF0..=0xF7).contains(&b)
}

/// UTF-8 continuation byte (`10xxxxxx`).
#[inline]
pub fn is_utf8_continuation(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}

/// Any UTF-8 lead byte (2, 3, or 4 byte sequences).
#[inline]
pub fn is_utf8_lead(b: u8) -> bool {
    is_utf8_lead2(b) || is_utf8_lead3(b) || is_utf8_lead4(b)
}

#[inline]
pub fn is_underscore(b: u8) -> bool {
    b == b'_'
}

#[inline]
pub fn is_dash(b: u8) -> bool {
    b == b'-'
}

#[inline]
pub fn is_bar(b: u8) -> bool {
    b == b'|'
}

/// First byte of an identifier: ASCII letter, underscore, or (optimistically)
/// any UTF-8 lead byte.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    is_ascii_letter(b) || is_underscore(b) || is_utf8_lead(b)
}

/// Interior byte of an identifier run: identifier start, digit, or UTF-8
/// continuation byte (so multi-byte characters ride through `eat_while`).
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || is_digit(b) || is_utf8_continuation(b)
}

/// Interior byte of a namespaced-identifier segment: identifier-continue
/// plus dash and bar. Variant-selection names travel through namespaced
/// identifiers, and those admit `-` and `|`.
#[inline]
pub fn is_namespace_ident_continue(b: u8) -> bool {
    is_ident_continue(b) || is_dash(b) || is_bar(b)
}

/// Number of bytes in the UTF-8 character led by `byte`.
///
/// ASCII, continuation bytes, and invalid leads all report 1; the caller
/// that cares about malformed sequences uses [`match_utf8_char`] instead.
#[inline]
pub fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Optimistically match one character at `pos` in `buf`.
///
/// Returns the matched byte length: 1 for ASCII, 2-4 for a lead byte whose
/// expected continuation bytes are present, and 0 when `pos` cannot start a
/// character (stray continuation byte, invalid lead, or a truncated
/// sequence). No codepoint validation is performed.
pub fn match_utf8_char(buf: &[u8], pos: usize) -> u32 {
    let Some(&lead) = buf.get(pos) else {
        return 0;
    };
    if lead.is_ascii() {
        return 1;
    }
    let width = utf8_char_width(lead);
    if width == 1 {
        // Continuation byte or invalid lead: not a character start.
        return 0;
    }
    for i in 1..width as usize {
        match buf.get(pos + i) {
            Some(&b) if is_utf8_continuation(b) => {}
            _ => return 0,
        }
    }
    width
}
