//! Token cooking: `(RawTag, matched text)` → `(TokenKind, TokenValue)`.
//!
//! The raw scanner decides *where* tokens are; this layer decides *what*
//! they are. Each tag category has a dedicated path:
//!
//! - **Identifiers**: keyword table first, then the identifier oracle.
//! - **Strings/paths**: the quoted-string evaluator (path references reuse
//!   it with delimiter width 1).
//! - **Asset references**: the asset-path evaluator; failure reclassifies
//!   the token as a syntax error.
//! - **Numbers**: the numeric evaluator; range overflow degrades to a
//!   double and surfaces as a warning message for the driver to report.
//! - **Punctuation**: direct 1:1 mapping, no payload.
//! - **Unmatched input**: a syntax-error token carrying the offending text.
//!
//! Cooking never fails and never talks to the diagnostic sink itself — the
//! driver owns the session state (line counter, file label) a diagnostic
//! needs.

use usda_ir::{TokenKind, TokenValue};
use usda_lexer_core::RawTag;

use crate::asset_path::eval_asset_path;
use crate::escape::unescape_quoted;
use crate::identifier::IdentifierRules;
use crate::keywords;
use crate::number::eval_number;
use crate::scan_context::count_line_terminators;

/// A cooked token, plus the side facts the driver folds into the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cooked {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Line terminators consumed inside the match (triple-quoted strings,
    /// multi-line error slices). The driver adds these to the line counter.
    pub newlines: u32,
    /// Warning text for the overflow-to-double fallback. The driver
    /// attaches line and file context and reports it.
    pub warning: Option<String>,
}

impl Cooked {
    fn bare(kind: TokenKind) -> Self {
        Cooked {
            kind,
            value: TokenValue::None,
            newlines: 0,
            warning: None,
        }
    }

    fn text(kind: TokenKind, text: &str) -> Self {
        Cooked {
            kind,
            value: TokenValue::string(text),
            newlines: 0,
            warning: None,
        }
    }

    fn syntax_error(text: &str) -> Self {
        Cooked {
            kind: TokenKind::SyntaxError,
            value: TokenValue::string(text),
            newlines: count_line_terminators(text),
            warning: None,
        }
    }
}

/// Cook one raw token. `text` is the exact matched slice.
pub(crate) fn cook(tag: RawTag, text: &str, rules: &dyn IdentifierRules) -> Cooked {
    match tag {
        RawTag::Ident => cook_ident(text, rules),
        RawTag::CppNamespacedIdent => Cooked::text(TokenKind::CppNamespacedIdentifier, text),
        RawTag::NamespacedIdent => {
            if rules.is_valid_namespaced_identifier(text) {
                Cooked::text(TokenKind::NamespacedIdentifier, text)
            } else {
                Cooked::syntax_error(text)
            }
        }

        RawTag::PathRef => {
            // Path references reuse the string escape rules with a one-byte
            // delimiter.
            let decoded = unescape_quoted(text, 1);
            Cooked {
                kind: TokenKind::PathRef,
                value: TokenValue::String(decoded.value),
                newlines: 0,
                warning: None,
            }
        }

        RawTag::AssetRef => cook_asset(text, false),
        RawTag::TripleAssetRef => cook_asset(text, true),

        RawTag::String => cook_string(text, TokenKind::String, 1),
        RawTag::TripleString => cook_string(text, TokenKind::TripleString, 3),
        RawTag::TripleStringUnterminated => Cooked::syntax_error(text),

        RawTag::Number | RawTag::NegInf => cook_number(text),

        RawTag::Equals => Cooked::bare(TokenKind::Equals),
        RawTag::Comma => Cooked::bare(TokenKind::Comma),
        RawTag::Colon => Cooked::bare(TokenKind::Colon),
        RawTag::Semicolon => Cooked::bare(TokenKind::Semicolon),
        RawTag::Dollar => Cooked::bare(TokenKind::Dollar),
        RawTag::Dot => Cooked::bare(TokenKind::Dot),
        RawTag::LBracket => Cooked::bare(TokenKind::LBracket),
        RawTag::RBracket => Cooked::bare(TokenKind::RBracket),
        RawTag::LParen => Cooked::bare(TokenKind::LParen),
        RawTag::RParen => Cooked::bare(TokenKind::RParen),
        RawTag::LBrace => Cooked::bare(TokenKind::LBrace),
        RawTag::RBrace => Cooked::bare(TokenKind::RBrace),
        RawTag::Ampersand => Cooked::bare(TokenKind::Ampersand),
        RawTag::At => Cooked::bare(TokenKind::At),
        RawTag::Minus => Cooked::bare(TokenKind::Minus),

        RawTag::Unmatched => Cooked::syntax_error(text),

        // Trivia and EOF are the driver loop's problem, not cook()'s.
        RawTag::Whitespace
        | RawTag::Newline
        | RawTag::HashComment
        | RawTag::LineComment
        | RawTag::BlockComment
        | RawTag::BlockCommentUnterminated
        | RawTag::Eof => {
            debug_assert!(false, "{tag:?} should be handled by the driver loop");
            Cooked::syntax_error(text)
        }
    }
}

fn cook_ident(text: &str, rules: &dyn IdentifierRules) -> Cooked {
    // Keyword spellings outrank generic identifiers. The scanner already
    // matched the maximal identifier-continue run, so equality here is the
    // whole boundary rule: `class` resolves, `classic` falls through.
    if let Some(kind) = keywords::lookup(text) {
        return Cooked::text(kind, text);
    }
    if rules.is_valid_identifier(text) {
        Cooked::text(TokenKind::Identifier, text)
    } else {
        Cooked::syntax_error(text)
    }
}

fn cook_asset(text: &str, triple: bool) -> Cooked {
    match eval_asset_path(text, triple) {
        Ok(path) => Cooked {
            kind: if triple {
                TokenKind::TripleAssetRef
            } else {
                TokenKind::AssetRef
            },
            value: TokenValue::String(path),
            newlines: 0,
            warning: None,
        },
        // Malformed escaping is a lexical error, not an exception: the
        // token degrades to a syntax error and scanning continues.
        Err(_) => Cooked::syntax_error(text),
    }
}

fn cook_string(text: &str, kind: TokenKind, delim_width: usize) -> Cooked {
    let decoded = unescape_quoted(text, delim_width);
    Cooked {
        kind,
        value: TokenValue::String(decoded.value),
        newlines: decoded.newlines,
        warning: None,
    }
}

fn cook_number(text: &str) -> Cooked {
    match eval_number(text) {
        Some(parse) => Cooked {
            kind: TokenKind::Number,
            value: parse.value,
            newlines: 0,
            warning: parse.overflow.then(|| {
                format!("integer literal '{text}' out of range, parsing as double")
            }),
        },
        // The scanner's number rule only produces well-formed spellings;
        // stay total anyway.
        None => Cooked::syntax_error(text),
    }
}
