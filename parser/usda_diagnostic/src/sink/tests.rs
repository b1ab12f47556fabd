use super::*;
use pretty_assertions::assert_eq;

#[test]
fn collecting_sink_preserves_report_order() {
    let mut sink = CollectingSink::new();
    sink.report(Diagnostic::warning("first", 1));
    sink.report(Diagnostic::warning("second", 2));

    let diags = sink.into_diagnostics();
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].message, "first");
    assert_eq!(diags[1].message, "second");
}

#[test]
fn collecting_sink_starts_empty() {
    let sink = CollectingSink::new();
    assert!(sink.is_empty());
    assert_eq!(sink.len(), 0);
}

#[test]
fn write_emitter_renders_one_line_per_record() {
    let mut emitter = WriteEmitter::new(Vec::new());
    emitter.report(Diagnostic::warning("out of range", 4).with_file_context("a.usda"));
    emitter.report(Diagnostic::warning("again", 9));

    let out = emitter.into_inner();
    let text = String::from_utf8_lossy(&out);
    assert_eq!(
        text,
        "a.usda:4: warning: out of range\nline 9: warning: again\n"
    );
}
