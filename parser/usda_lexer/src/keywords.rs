//! Keyword resolution.
//!
//! The raw scanner always matches the full identifier-continue run, so by
//! the time a spelling reaches this table it is maximal — `classic` arrives
//! whole and misses the `class` entry, which is exactly the boundary rule
//! the grammar wants. Lookup uses the identifier's length as a first-pass
//! filter (keywords range from 3-19 chars), then matches against the
//! keywords of that length.

use usda_ir::TokenKind;

/// Look up a keyword by its exact spelling.
///
/// Returns the keyword's `TokenKind` or `None` for ordinary identifiers.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();

    // Guard: all keywords are 3-19 chars and start with an ASCII letter.
    if !(3..=19).contains(&len) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }

    match len {
        3 => match text {
            "add" => Some(TokenKind::Add),
            "def" => Some(TokenKind::Def),
            "doc" => Some(TokenKind::Doc),
            "rel" => Some(TokenKind::Rel),
            _ => None,
        },
        4 => match text {
            "kind" => Some(TokenKind::Kind),
            "None" => Some(TokenKind::None),
            "over" => Some(TokenKind::Over),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "scale" => Some(TokenKind::Scale),
            _ => None,
        },
        6 => match text {
            "append" => Some(TokenKind::Append),
            "config" => Some(TokenKind::Config),
            "custom" => Some(TokenKind::Custom),
            "delete" => Some(TokenKind::Delete),
            "offset" => Some(TokenKind::Offset),
            _ => None,
        },
        7 => match text {
            "connect" => Some(TokenKind::Connect),
            "default" => Some(TokenKind::Default),
            "payload" => Some(TokenKind::Payload),
            "prepend" => Some(TokenKind::Prepend),
            "reorder" => Some(TokenKind::Reorder),
            "uniform" => Some(TokenKind::Uniform),
            _ => None,
        },
        8 => match text {
            "inherits" => Some(TokenKind::Inherits),
            "variants" => Some(TokenKind::Variants),
            _ => None,
        },
        9 => match text {
            "relocates" => Some(TokenKind::Relocates),
            "rootPrims" => Some(TokenKind::RootPrims),
            "subLayers" => Some(TokenKind::SubLayers),
            _ => None,
        },
        10 => match text {
            "customData" => Some(TokenKind::CustomData),
            "dictionary" => Some(TokenKind::Dictionary),
            "permission" => Some(TokenKind::Permission),
            "properties" => Some(TokenKind::Properties),
            "references" => Some(TokenKind::References),
            "variantSet" => Some(TokenKind::VariantSet),
            _ => None,
        },
        11 => match text {
            "displayUnit" => Some(TokenKind::DisplayUnit),
            "specializes" => Some(TokenKind::Specializes),
            "timeSamples" => Some(TokenKind::TimeSamples),
            "variantSets" => Some(TokenKind::VariantSets),
            _ => None,
        },
        12 => match text {
            "nameChildren" => Some(TokenKind::NameChildren),
            _ => None,
        },
        16 => match text {
            "symmetryFunction" => Some(TokenKind::SymmetryFunction),
            _ => None,
        },
        17 => match text {
            "symmetryArguments" => Some(TokenKind::SymmetryArguments),
            _ => None,
        },
        19 => match text {
            "prefixSubstitutions" => Some(TokenKind::PrefixSubstitutions),
            "suffixSubstitutions" => Some(TokenKind::SuffixSubstitutions),
            _ => None,
        },
        _ => None,
    }
}

/// Every keyword spelling, for table-driven tests and error suggestions.
pub const ALL_KEYWORDS: &[&str] = &[
    "add",
    "append",
    "class",
    "config",
    "connect",
    "custom",
    "customData",
    "def",
    "default",
    "delete",
    "dictionary",
    "displayUnit",
    "doc",
    "inherits",
    "kind",
    "nameChildren",
    "None",
    "offset",
    "over",
    "payload",
    "permission",
    "prefixSubstitutions",
    "prepend",
    "properties",
    "references",
    "relocates",
    "rel",
    "reorder",
    "rootPrims",
    "scale",
    "subLayers",
    "suffixSubstitutions",
    "specializes",
    "symmetryArguments",
    "symmetryFunction",
    "timeSamples",
    "uniform",
    "variantSet",
    "variantSets",
    "variants",
];
