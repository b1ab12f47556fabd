//! Quoted-string evaluator.
//!
//! Decodes the raw matched text of a quoted construct — single- or
//! double-quoted strings, triple-quoted strings, and (with delimiter width
//! 1) `<…>` path references, which reuse the same escape rules.
//!
//! Decoding never fails: an unrecognized escape decodes to the escaped
//! character itself, which is the format's historical behavior and keeps
//! hand-written layers from breaking over a stray backslash. Embedded line
//! terminators are normalized to `\n` in the decoded value and counted, so
//! the caller can advance the session line counter; an *escaped* terminator
//! inside a triple-quoted string decodes to a literal terminator and still
//! counts.

/// Result of decoding a quoted literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unescaped {
    /// Decoded content, delimiters stripped, escapes resolved.
    pub value: Box<str>,
    /// Number of line terminators consumed by the match (raw or escaped).
    pub newlines: u32,
}

/// Decode the raw matched text of a quoted literal.
///
/// `raw` includes the delimiters; `delim_width` is how many bytes to strip
/// from each end (1 for `'…'`, `"…"`, `<…>`; 3 for triple-quoted forms).
///
/// # Panics
///
/// Debug-asserts that `raw` is long enough to hold both delimiters; the
/// scanner guarantees it.
pub fn unescape_quoted(raw: &str, delim_width: usize) -> Unescaped {
    debug_assert!(
        raw.len() >= 2 * delim_width,
        "matched text {raw:?} shorter than its delimiters"
    );
    let content = &raw[delim_width..raw.len() - delim_width];

    let mut value = String::with_capacity(content.len());
    let mut newlines = 0u32;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('r') => value.push('\r'),
                Some('\\') => value.push('\\'),
                Some('\'') => value.push('\''),
                Some('"') => value.push('"'),
                Some('0') => value.push('\0'),
                Some('x') => {
                    // Two hex digits; anything less decodes as literal 'x'.
                    let hi = chars.peek().copied().filter(char::is_ascii_hexdigit);
                    match hi {
                        Some(hi) => {
                            chars.next();
                            let lo = chars.peek().copied().filter(char::is_ascii_hexdigit);
                            match lo {
                                Some(lo) => {
                                    chars.next();
                                    value.push(hex_pair_to_char(hi, lo));
                                }
                                None => {
                                    value.push(hex_digit_to_char(hi));
                                }
                            }
                        }
                        None => value.push('x'),
                    }
                }
                // Escaped line terminator: literal terminator in the output,
                // and it still counts as a line break.
                Some('\n') => {
                    value.push('\n');
                    newlines += 1;
                }
                Some('\r') => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    value.push('\n');
                    newlines += 1;
                }
                // Unknown escape: the character itself, verbatim.
                Some(other) => value.push(other),
                // Trailing backslash (only reachable for unterminated
                // matches): keep it.
                None => value.push('\\'),
            },
            '\n' => {
                value.push('\n');
                newlines += 1;
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                value.push('\n');
                newlines += 1;
            }
            _ => value.push(c),
        }
    }

    Unescaped {
        value: value.into_boxed_str(),
        newlines,
    }
}

/// One hex digit as its numeric value.
fn hex_value(c: char) -> u32 {
    c.to_digit(16).unwrap_or(0)
}

fn hex_pair_to_char(hi: char, lo: char) -> char {
    let code = hex_value(hi) * 16 + hex_value(lo);
    char::from_u32(code).unwrap_or('\u{FFFD}')
}

fn hex_digit_to_char(digit: char) -> char {
    char::from_u32(hex_value(digit)).unwrap_or('\u{FFFD}')
}
