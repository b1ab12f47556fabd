//! Token kinds for the usda text format.

use std::fmt;

/// Closed enumeration of everything the tokenizer can classify.
///
/// Keyword variants exist one-per-spelling so the grammar can match on them
/// directly; punctuation variants exist one-per-glyph for the same reason.
/// The payload (decoded string, parsed number, raw text) travels separately
/// in `TokenValue` — the kind stays a bare discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// A recognized line terminator (`\n`, `\r`, or `\r\n`). Newlines are
    /// statement separators in this grammar, so they are real tokens.
    Newline,
    /// A `#`-comment on line 1: the layer's format-version marker.
    /// Anywhere else a `#` run is discarded as an ordinary comment.
    MagicComment,

    // === Keywords ===
    Add,
    Append,
    Class,
    Config,
    Connect,
    Custom,
    CustomData,
    Def,
    Default,
    Delete,
    Dictionary,
    DisplayUnit,
    Doc,
    Inherits,
    Kind,
    NameChildren,
    None,
    Offset,
    Over,
    Payload,
    Permission,
    PrefixSubstitutions,
    Prepend,
    Properties,
    References,
    Relocates,
    Rel,
    Reorder,
    RootPrims,
    Scale,
    SubLayers,
    SuffixSubstitutions,
    Specializes,
    SymmetryArguments,
    SymmetryFunction,
    TimeSamples,
    Uniform,
    VariantSet,
    VariantSets,
    Variants,

    // === Identifiers ===
    /// `A::B::C` — segments joined by `::`, at least one `::`.
    CppNamespacedIdentifier,
    /// A plain identifier, accepted by the identifier oracle.
    Identifier,
    /// `a:b:c` — identifier segments joined by single colons.
    NamespacedIdentifier,

    // === Literals ===
    /// `<…>` scene path reference (decoded payload).
    PathRef,
    /// `@…@` asset reference (decoded payload).
    AssetRef,
    /// `@@@…@@@` asset reference (decoded payload).
    TripleAssetRef,
    /// `'…'` or `"…"` quoted string (decoded payload).
    String,
    /// `'''…'''` or `"""…"""` triple-quoted string (decoded payload).
    TripleString,
    /// A numeric literal; the payload distinguishes u64 / i64 / f64.
    Number,

    // === Punctuation ===
    Equals,    // =
    Comma,     // ,
    Colon,     // :
    Semicolon, // ;
    Dollar,    // $
    Dot,       // .
    LBracket,  // [
    RBracket,  // ]
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Ampersand, // &
    At,        // @
    Minus,     // -

    /// Lexical failure: unmatched character, oracle-rejected identifier, or
    /// malformed asset-path escaping. Carries the offending raw text.
    SyntaxError,
    /// End of input. Returned indefinitely once the buffer is exhausted.
    Eof,
}

impl TokenKind {
    /// The keyword spelling, if this kind is a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Add => "add",
            TokenKind::Append => "append",
            TokenKind::Class => "class",
            TokenKind::Config => "config",
            TokenKind::Connect => "connect",
            TokenKind::Custom => "custom",
            TokenKind::CustomData => "customData",
            TokenKind::Def => "def",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Dictionary => "dictionary",
            TokenKind::DisplayUnit => "displayUnit",
            TokenKind::Doc => "doc",
            TokenKind::Inherits => "inherits",
            TokenKind::Kind => "kind",
            TokenKind::NameChildren => "nameChildren",
            TokenKind::None => "None",
            TokenKind::Offset => "offset",
            TokenKind::Over => "over",
            TokenKind::Payload => "payload",
            TokenKind::Permission => "permission",
            TokenKind::PrefixSubstitutions => "prefixSubstitutions",
            TokenKind::Prepend => "prepend",
            TokenKind::Properties => "properties",
            TokenKind::References => "references",
            TokenKind::Relocates => "relocates",
            TokenKind::Rel => "rel",
            TokenKind::Reorder => "reorder",
            TokenKind::RootPrims => "rootPrims",
            TokenKind::Scale => "scale",
            TokenKind::SubLayers => "subLayers",
            TokenKind::SuffixSubstitutions => "suffixSubstitutions",
            TokenKind::Specializes => "specializes",
            TokenKind::SymmetryArguments => "symmetryArguments",
            TokenKind::SymmetryFunction => "symmetryFunction",
            TokenKind::TimeSamples => "timeSamples",
            TokenKind::Uniform => "uniform",
            TokenKind::VariantSet => "variantSet",
            TokenKind::VariantSets => "variantSets",
            TokenKind::Variants => "variants",
            _ => return Option::None,
        };
        Some(text)
    }

    /// Whether this kind is one of the literal keywords.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.keyword_text().is_some()
    }

    /// The glyph, if this kind is single-character punctuation.
    pub fn punctuation_char(self) -> Option<char> {
        let c = match self {
            TokenKind::Equals => '=',
            TokenKind::Comma => ',',
            TokenKind::Colon => ':',
            TokenKind::Semicolon => ';',
            TokenKind::Dollar => '$',
            TokenKind::Dot => '.',
            TokenKind::LBracket => '[',
            TokenKind::RBracket => ']',
            TokenKind::LParen => '(',
            TokenKind::RParen => ')',
            TokenKind::LBrace => '{',
            TokenKind::RBrace => '}',
            TokenKind::Ampersand => '&',
            TokenKind::At => '@',
            TokenKind::Minus => '-',
            _ => return Option::None,
        };
        Some(c)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.keyword_text() {
            return write!(f, "`{text}`");
        }
        if let Some(c) = self.punctuation_char() {
            return write!(f, "`{c}`");
        }
        match self {
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::MagicComment => write!(f, "magic comment"),
            TokenKind::CppNamespacedIdentifier => write!(f, "C++ namespaced identifier"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::NamespacedIdentifier => write!(f, "namespaced identifier"),
            TokenKind::PathRef => write!(f, "path reference"),
            TokenKind::AssetRef => write!(f, "asset reference"),
            TokenKind::TripleAssetRef => write!(f, "asset reference"),
            TokenKind::String => write!(f, "string"),
            TokenKind::TripleString => write!(f, "string"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::SyntaxError => write!(f, "syntax error"),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{self:?}"),
        }
    }
}
