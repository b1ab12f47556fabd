//! Lexer for the usda text format.
//!
//! This crate is the cooking half of the lexical front end. The raw scanner
//! in `usda_lexer_core` finds token boundaries; everything here turns those
//! boundaries into parser-ready [`usda_ir::Token`] values:
//!
//! - [`keywords`] resolves identifier spellings against the keyword table,
//! - [`escape`] decodes quoted strings and path references,
//! - [`asset_path`] decodes `@…@` / `@@@…@@@` references,
//! - [`number`] parses numeric literals with the overflow-to-double fallback,
//! - [`IdentifierRules`] is the validity oracle consulted for identifiers,
//! - [`ScanContext`] carries the per-session line counter, file-context
//!   label, and lexer state,
//! - [`Lexer`] is the pull interface the parser drives.
//!
//! The lexer never fails: every lexical problem is returned to the parser as
//! a `SyntaxError` token, and the only degraded-success case (an integer
//! literal that overflows 64 bits) parses as a double and reports one
//! warning through the session's [`usda_diagnostic::DiagnosticSink`].

pub mod asset_path;
mod cooker;
pub mod escape;
mod identifier;
pub mod keywords;
mod lexer;
pub mod number;
mod scan_context;

pub use identifier::{IdentifierRules, StandardIdentifierRules};
pub use lexer::{tokenize, Lexer};
pub use scan_context::{ScanContext, ScanState};
