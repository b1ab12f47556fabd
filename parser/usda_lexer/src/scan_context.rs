//! Per-session scanning state.
//!
//! Exactly one `ScanContext` exists per parse session, owned by the
//! [`Lexer`](crate::Lexer) and mutated only by its driver loop. Nothing here
//! is process-wide: independent sessions on separate threads never share
//! state.

/// Which grammar the next scan step applies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ScanState {
    /// Ordinary token rules.
    #[default]
    Text,
    /// Inside `/* … */`; everything but the terminator is discarded.
    /// Observable after the fact only when input ends inside a comment —
    /// the scanner otherwise consumes a whole comment in one step.
    BlockComment,
}

/// Mutable scanning state for one parse session.
#[derive(Clone, Debug)]
pub struct ScanContext {
    /// Current line, 1-based. Incremented for every recognized line
    /// terminator, including terminators embedded in triple-quoted strings
    /// and block comments.
    line: u32,
    /// Label for diagnostics (usually the layer path). Read-only during
    /// scanning.
    file_context: Option<Box<str>>,
    state: ScanState,
}

impl ScanContext {
    /// Fresh context: line 1, TEXT state, no file label.
    pub fn new() -> Self {
        ScanContext {
            line: 1,
            file_context: None,
            state: ScanState::Text,
        }
    }

    /// Fresh context carrying a file-context label for diagnostics.
    pub fn with_file_context(file_context: impl Into<Box<str>>) -> Self {
        ScanContext {
            line: 1,
            file_context: Some(file_context.into()),
            state: ScanState::Text,
        }
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The session's file-context label, if any.
    #[inline]
    pub fn file_context(&self) -> Option<&str> {
        self.file_context.as_deref()
    }

    /// Current lexer state.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Advance the line counter by `terminators` recognized line breaks.
    #[inline]
    pub(crate) fn advance_lines(&mut self, terminators: u32) {
        self.line += terminators;
    }

    pub(crate) fn set_state(&mut self, state: ScanState) {
        self.state = state;
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        ScanContext::new()
    }
}

/// Count recognized line terminators in `text`: `\n`, `\r\n`, and lone `\r`
/// each count once.
pub(crate) fn count_line_terminators(text: &str) -> u32 {
    let bytes = text.as_bytes();
    let mut count = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => count += 1,
            b'\r' => {
                count += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    count
}

#[cfg(test)]
mod tests;
