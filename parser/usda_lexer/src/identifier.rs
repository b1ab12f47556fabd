//! Identifier-validity oracle.
//!
//! The raw scanner matches identifier runs optimistically at the byte level
//! and leaves legality to this oracle — the two deliberately disagree on
//! malformed input, with the oracle having the final word. The trait is the
//! narrow interface the driver consumes; hosts with their own identifier
//! legality rules (a stricter pipeline convention, say) inject an
//! implementation, everyone else gets [`StandardIdentifierRules`].

use unicode_ident::{is_xid_continue, is_xid_start};

/// Decides whether a matched byte run is a legal identifier.
pub trait IdentifierRules {
    /// Is `text` a legal plain identifier?
    fn is_valid_identifier(&self, text: &str) -> bool;

    /// Is `text` a legal namespaced identifier (single-colon-joined
    /// segments)?
    fn is_valid_namespaced_identifier(&self, text: &str) -> bool;
}

/// The format's stock identifier rules.
///
/// Plain identifiers follow the Unicode XID classes with `_` admitted as a
/// start character. Namespaced identifiers are non-empty `:`-separated
/// segments; segments after the first additionally admit `-` and `|` in
/// non-initial positions, which is how variant-selection names travel.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardIdentifierRules;

/// Shared instance for lexers constructed without an injected oracle.
pub(crate) static STANDARD_RULES: StandardIdentifierRules = StandardIdentifierRules;

impl StandardIdentifierRules {
    fn is_valid_segment(text: &str, allow_dash_bar: bool) -> bool {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if first != '_' && !is_xid_start(first) {
            return false;
        }
        chars.all(|c| {
            is_xid_continue(c) || c == '_' || (allow_dash_bar && (c == '-' || c == '|'))
        })
    }
}

impl IdentifierRules for StandardIdentifierRules {
    fn is_valid_identifier(&self, text: &str) -> bool {
        Self::is_valid_segment(text, false)
    }

    fn is_valid_namespaced_identifier(&self, text: &str) -> bool {
        // A plain identifier is the degenerate one-segment case.
        let mut segments = text.split(':');
        let Some(first) = segments.next() else {
            return false;
        };
        if !Self::is_valid_segment(first, false) {
            return false;
        }
        segments.all(|segment| Self::is_valid_segment(segment, true))
    }
}

#[cfg(test)]
mod tests;
