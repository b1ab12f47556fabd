//! Shared IR types for the usda text parser.
//!
//! The lexer produces [`Token`] values and the grammar layer consumes them;
//! both sides agree on the types in this crate and nothing else. Keeping the
//! crate dependency-free lets external tools (formatters, highlighters)
//! depend on the token model without pulling in the scanner.

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenValue};
