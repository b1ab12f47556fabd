//! Asset-path evaluator.
//!
//! Decodes the raw matched text of `@…@` and `@@@…@@@` references. The
//! single-delimited form has no escape grammar at all: content is taken
//! verbatim. The triple-delimited form admits runs of one or two `@` as
//! content and decodes `\@@@` to a literal `@@@`.
//!
//! Unlike string escaping, malformed asset-path escaping is an error: the
//! caller reclassifies the token as a syntax error rather than guessing at
//! what the author meant, because a mangled asset path fails much later (at
//! resolve time) with a far worse message.

use thiserror::Error;

/// Why an asset path failed to decode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssetPathError {
    /// A backslash immediately followed by one or two `@`: an incomplete
    /// delimiter escape. Only `\@@@` is recognized.
    #[error("malformed asset path escape `{found}`; only `\\@@@` is recognized")]
    MalformedEscape { found: String },
    /// Three or more consecutive unescaped `@` inside the content.
    #[error("asset path contains an unescaped `@@@` delimiter run")]
    EmbeddedDelimiter,
}

/// Decode the raw matched text of an asset reference.
///
/// `raw` includes the delimiters; `triple` selects the `@@@…@@@` grammar.
///
/// # Panics
///
/// Debug-asserts that `raw` carries its delimiters; the scanner guarantees
/// it.
pub fn eval_asset_path(raw: &str, triple: bool) -> Result<Box<str>, AssetPathError> {
    let delim_width = if triple { 3 } else { 1 };
    debug_assert!(
        raw.len() >= 2 * delim_width,
        "matched text {raw:?} shorter than its delimiters"
    );
    let content = &raw[delim_width..raw.len() - delim_width];

    if !triple {
        // Single-delimited: verbatim. The scanner already excluded `@` and
        // line terminators from the match.
        return Ok(content.into());
    }

    let bytes = content.as_bytes();
    let mut value = String::with_capacity(content.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                let at_run = count_at_run(bytes, i + 1);
                match at_run {
                    0 => {
                        // Backslash before ordinary content: verbatim.
                        value.push('\\');
                        i += 1;
                    }
                    1 | 2 => {
                        let found: String =
                            content[i..i + 1 + at_run].to_string();
                        return Err(AssetPathError::MalformedEscape { found });
                    }
                    _ => {
                        // `\@@@` (plus any longer run: the first three are
                        // the escaped delimiter).
                        value.push_str("@@@");
                        i += 4;
                    }
                }
            }
            b'@' => {
                let run = count_at_run(bytes, i);
                if run >= 3 {
                    return Err(AssetPathError::EmbeddedDelimiter);
                }
                for _ in 0..run {
                    value.push('@');
                }
                i += run;
            }
            _ => {
                // Content is valid UTF-8 (it came off a &str); copy the
                // whole character.
                let rest = &content[i..];
                match rest.chars().next() {
                    Some(c) => {
                        value.push(c);
                        i += c.len_utf8();
                    }
                    None => break,
                }
            }
        }
    }

    Ok(value.into_boxed_str())
}

/// Length of the `@` run starting at `pos`.
fn count_at_run(bytes: &[u8], pos: usize) -> usize {
    bytes[pos..].iter().take_while(|&&b| b == b'@').count()
}
