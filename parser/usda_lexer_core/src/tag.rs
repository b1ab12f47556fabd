//! Raw token tags produced by the scanner.
//!
//! A raw tag names the rule that won at the current position; the byte
//! length alongside it locates the matched text. No payload is decoded at
//! this layer — the cooking layer re-reads the matched slice when a rule
//! carries data (identifier text, string content, numeric spelling).

/// Rule classification for a raw token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawTag {
    // === Trivia (never reaches the parser) ===
    /// Run of horizontal whitespace (space, tab).
    Whitespace,
    /// `\n`, `\r`, or `\r\n`. Trivia for line counting, but also a real
    /// token in this grammar — the driver emits it.
    Newline,
    /// `#` through end of line. Magic-comment-or-discard is the driver's
    /// call: only it knows whether the scan is still on line 1.
    HashComment,
    /// `//` through end of line.
    LineComment,
    /// `/* … */`, including any newlines inside.
    BlockComment,
    /// `/*` with no closing `*/` before EOF.
    BlockCommentUnterminated,

    // === Identifier shapes ===
    /// Identifier-start then identifier-continue run.
    Ident,
    /// Identifier segments joined by `::` (at least one `::`).
    CppNamespacedIdent,
    /// Identifier segments joined by single `:` (at least one `:`);
    /// segments after the first admit `-` and `|`.
    NamespacedIdent,

    // === Literals ===
    /// `<…>` with no embedded `<`, `>`, or line terminator.
    PathRef,
    /// `@…@` with no embedded `@` or line terminator.
    AssetRef,
    /// `@@@…@@@`, embedded `@`/`@@` runs and `\@@@` escapes allowed.
    TripleAssetRef,
    /// `'…'`/`"…"` on one line, or the empty forms `''`/`""`.
    String,
    /// `'''…'''`/`"""…"""`, newlines allowed inside.
    TripleString,
    /// Triple-quote opener with no closing delimiter before EOF.
    TripleStringUnterminated,
    /// Numeric literal spelling (integer, decimal, or exponential).
    Number,
    /// The exact spelling `-inf`.
    NegInf,

    // === Punctuation ===
    Equals,
    Comma,
    Colon,
    Semicolon,
    Dollar,
    Dot,
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Ampersand,
    At,
    Minus,

    /// The catch-all rule: no other rule matched at this position. One
    /// character long, except for the escaped-newline spelling `\` + line
    /// terminator which is consumed whole.
    Unmatched,
    /// End of input.
    Eof,
}

impl RawTag {
    /// Whether this tag never produces a parser-visible token on its own.
    /// (`HashComment` is conditional trivia: line 1 promotes it.)
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace
                | RawTag::LineComment
                | RawTag::BlockComment
                | RawTag::BlockCommentUnterminated
        )
    }
}

/// A raw token: the winning rule and how many bytes it consumed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

impl RawToken {
    #[inline]
    pub fn new(tag: RawTag, len: u32) -> Self {
        RawToken { tag, len }
    }
}

/// Size assertion: raw tokens are produced for every scan step.
const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
