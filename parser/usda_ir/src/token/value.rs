//! Decoded token payloads.

use std::fmt;

/// Decoded payload carried alongside a `TokenKind`.
///
/// Doubles are stored as their IEEE-754 bit pattern so `Token` keeps
/// `Eq + Hash`; the sign of `-0.0` survives the round-trip, which the
/// numeric evaluator relies on.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenValue {
    /// No payload (newline, punctuation, end of input).
    None,
    /// Decoded or raw text (strings, asset/path references, identifiers,
    /// keywords, magic comments, syntax errors).
    String(Box<str>),
    /// Unsigned 64-bit integer literal.
    Uint(u64),
    /// Signed (negative) 64-bit integer literal.
    Int(i64),
    /// Double-precision literal, stored as bits.
    Double(u64),
}

impl TokenValue {
    /// Wrap an `f64`, preserving its exact bit pattern.
    #[inline]
    pub fn double(value: f64) -> Self {
        TokenValue::Double(value.to_bits())
    }

    /// Wrap owned text.
    #[inline]
    pub fn string(value: impl Into<Box<str>>) -> Self {
        TokenValue::String(value.into())
    }

    /// The payload as text, if it is text.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The payload as an `f64`, if it is a double.
    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            TokenValue::Double(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// The payload as a `u64`, if it is an unsigned integer.
    #[inline]
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            TokenValue::Uint(n) => Some(*n),
            _ => None,
        }
    }

    /// The payload as an `i64`, if it is a signed integer.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TokenValue::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Debug for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => write!(f, "None"),
            TokenValue::String(s) => write!(f, "{s:?}"),
            TokenValue::Uint(n) => write!(f, "{n}u64"),
            TokenValue::Int(n) => write!(f, "{n}i64"),
            TokenValue::Double(bits) => write!(f, "{}f64", f64::from_bits(*bits)),
        }
    }
}
