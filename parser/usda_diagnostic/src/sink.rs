//! Where diagnostic records go.

use std::io;

use crate::Diagnostic;

/// Receiver for diagnostic records.
///
/// The scanning layers hold `&mut dyn DiagnosticSink` and push records as
/// they arise; they never read them back. Implementations decide whether to
/// buffer, render, or drop.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Buffers every record in order. The default sink for tests and for hosts
/// that render diagnostics after the parse completes.
#[derive(Default, Debug)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        CollectingSink::default()
    }

    /// Records reported so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the sink, returning the buffered records.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Renders each record as one line to the wrapped writer.
///
/// Write failures are swallowed: diagnostics are best-effort output and a
/// broken pipe must not turn a warning into a parse abort.
#[derive(Debug)]
pub struct WriteEmitter<W: io::Write> {
    writer: W,
}

impl<W: io::Write> WriteEmitter<W> {
    pub fn new(writer: W) -> Self {
        WriteEmitter { writer }
    }

    /// Unwrap the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> DiagnosticSink for WriteEmitter<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        let _ = writeln!(self.writer, "{diagnostic}");
    }
}

#[cfg(test)]
mod tests;
