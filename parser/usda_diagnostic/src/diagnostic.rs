//! Diagnostic records.

use std::fmt;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A single diagnostic record.
///
/// `line` is 1-based and refers to the scan session's own line counter;
/// `file_context` is whatever label the session was opened with (a layer
/// path, an anonymous-buffer tag) and is `None` for unlabeled buffers.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub line: u32,
    pub file_context: Option<Box<str>>,
}

impl Diagnostic {
    /// Create a warning record.
    pub fn warning(message: impl Into<String>, line: u32) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            line,
            file_context: None,
        }
    }

    /// Create an error record.
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            line,
            file_context: None,
        }
    }

    /// Attach the session's file-context label.
    #[must_use]
    pub fn with_file_context(mut self, file_context: impl Into<Box<str>>) -> Self {
        self.file_context = Some(file_context.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file_context {
            Some(file) => write!(
                f,
                "{file}:{}: {}: {}",
                self.line, self.severity, self.message
            ),
            None => write!(f, "line {}: {}: {}", self.line, self.severity, self.message),
        }
    }
}

#[cfg(test)]
mod tests;
