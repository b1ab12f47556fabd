use super::*;
use pretty_assertions::assert_eq;

#[test]
fn fresh_context_starts_on_line_one_in_text_state() {
    let ctx = ScanContext::new();
    assert_eq!(ctx.line(), 1);
    assert_eq!(ctx.state(), ScanState::Text);
    assert_eq!(ctx.file_context(), None);
}

#[test]
fn file_context_label_is_carried() {
    let ctx = ScanContext::with_file_context("shot.usda");
    assert_eq!(ctx.file_context(), Some("shot.usda"));
}

#[test]
fn advance_lines_accumulates() {
    let mut ctx = ScanContext::new();
    ctx.advance_lines(1);
    ctx.advance_lines(3);
    assert_eq!(ctx.line(), 5);
}

#[test]
fn state_transitions_are_recorded() {
    let mut ctx = ScanContext::new();
    ctx.set_state(ScanState::BlockComment);
    assert_eq!(ctx.state(), ScanState::BlockComment);
}

// === count_line_terminators ===

#[test]
fn counts_each_terminator_form_once() {
    assert_eq!(count_line_terminators(""), 0);
    assert_eq!(count_line_terminators("abc"), 0);
    assert_eq!(count_line_terminators("a\nb"), 1);
    assert_eq!(count_line_terminators("a\r\nb"), 1);
    assert_eq!(count_line_terminators("a\rb"), 1);
}

#[test]
fn mixed_terminators() {
    assert_eq!(count_line_terminators("a\nb\r\nc\rd\n"), 4);
}

#[test]
fn adjacent_cr_lf_pairs_do_not_double_count() {
    // \r\n is one terminator; \n\r is two.
    assert_eq!(count_line_terminators("\r\n"), 1);
    assert_eq!(count_line_terminators("\n\r"), 2);
    assert_eq!(count_line_terminators("\r\n\r\n"), 2);
}
