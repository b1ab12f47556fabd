use super::*;
use pretty_assertions::assert_eq;

#[test]
fn warning_constructor_sets_severity_and_line() {
    let diag = Diagnostic::warning("integer out of range", 12);
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.line, 12);
    assert_eq!(diag.file_context, None);
}

#[test]
fn with_file_context_attaches_label() {
    let diag = Diagnostic::error("bad token", 3).with_file_context("shot_010.usda");
    assert_eq!(diag.file_context.as_deref(), Some("shot_010.usda"));
}

#[test]
fn display_with_file_context() {
    let diag = Diagnostic::warning("out of range", 7).with_file_context("a.usda");
    assert_eq!(diag.to_string(), "a.usda:7: warning: out of range");
}

#[test]
fn display_without_file_context() {
    let diag = Diagnostic::warning("out of range", 7);
    assert_eq!(diag.to_string(), "line 7: warning: out of range");
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Note.to_string(), "note");
}
