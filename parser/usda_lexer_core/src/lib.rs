//! Low-level scanner for the usda text format.
//!
//! This crate is the raw half of the lexer: it recognizes token *boundaries*
//! and nothing else. [`RawScanner`] walks a sentinel-terminated
//! [`SourceBuffer`] through a [`Cursor`] and produces `(RawTag, len)` pairs
//! with zero heap allocation; it does not resolve keywords, consult the
//! identifier oracle, decode escapes, or parse numeric values — all of that
//! is deferred to the cooking layer in `usda_lexer`.
//!
//! Byte and character classification lives in [`classify`]: optimistic,
//! byte-level UTF-8 matching that deliberately overmatches (a lead byte plus
//! the expected continuation count, no full validation). Identifier validity
//! is restored downstream by the oracle, which owns the format's real
//! Unicode identifier rules.

pub mod classify;
mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
