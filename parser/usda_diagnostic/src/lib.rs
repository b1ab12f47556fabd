//! Diagnostics for the usda text parser.
//!
//! The scanning layers never abort: every lexical failure is representable
//! as a token, and the only non-fatal condition (integer overflow demoted to
//! a double) is reported here. Records carry what a host needs to render an
//! actionable message — severity, text, 1-based line, and the optional
//! file-context label the scan session was opened with.
//!
//! Hosts choose where records go by implementing [`DiagnosticSink`];
//! [`CollectingSink`] buffers them and [`WriteEmitter`] renders them to any
//! `io::Write`.

mod diagnostic;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use sink::{CollectingSink, DiagnosticSink, WriteEmitter};
