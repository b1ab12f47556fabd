use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, _) = tokenize(source);
    tokens.into_iter().map(|t| t.kind).collect()
}

/// Tokenize and panic on any diagnostic — for inputs that must be clean.
fn tokens_clean(source: &str) -> Vec<Token> {
    let (tokens, diagnostics) = tokenize(source);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics: {diagnostics:?}"
    );
    tokens
}

// === Keywords vs identifiers ===

#[test]
fn keyword_followed_by_non_continue_is_the_keyword() {
    let tokens = tokens_clean("over ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Over);
    assert_eq!(tokens[0].value, TokenValue::string("over"));
}

#[test]
fn keyword_extended_by_continue_is_an_identifier() {
    let tokens = tokens_clean("overwrite");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, TokenValue::string("overwrite"));
}

#[test]
fn every_keyword_scans_to_its_own_kind() {
    for &kw in crate::keywords::ALL_KEYWORDS {
        let source = format!("{kw} ");
        let tokens = tokens_clean(&source);
        assert_eq!(tokens.len(), 1, "keyword {kw:?}");
        assert_eq!(tokens[0].kind.keyword_text(), Some(kw));
    }
}

// === Magic comment ===

#[test]
fn hash_run_on_line_one_is_the_magic_comment() {
    let tokens = tokens_clean("#usda 1.0\ndef");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::MagicComment, TokenKind::Newline, TokenKind::Def]
    );
    assert_eq!(tokens[0].value, TokenValue::string("#usda 1.0"));
}

#[test]
fn hash_run_after_line_one_is_discarded() {
    let tokens = tokens_clean("\n#usda 1.0\n");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Newline, TokenKind::Newline]
    );
}

#[test]
fn later_hash_on_line_one_still_promotes() {
    // The rule is by line, not by position: anything `#…` while the counter
    // still reads 1 is the version marker.
    assert_eq!(
        kinds("def #magic\n"),
        vec![TokenKind::Def, TokenKind::MagicComment, TokenKind::Newline]
    );
}

// === Newlines and line counting ===

#[test]
fn newline_tokens_are_emitted_and_counted() {
    let buffer = SourceBuffer::new("a\nb\r\nc");
    let mut sink = CollectingSink::new();
    let mut lexer = Lexer::new(&buffer, &mut sink);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.context().line(), 1);
    assert_eq!(lexer.next_token().kind, TokenKind::Newline);
    assert_eq!(lexer.context().line(), 2);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Newline);
    assert_eq!(lexer.context().line(), 3);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn eof_is_sticky() {
    let buffer = SourceBuffer::new("");
    let mut sink = CollectingSink::new();
    let mut lexer = Lexer::new(&buffer, &mut sink);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

// === Strings ===

#[test]
fn empty_string_then_space_is_an_empty_string_token() {
    let tokens = tokens_clean("'' ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, TokenValue::string(""));
}

#[test]
fn triple_quoted_one_liner() {
    let tokens = tokens_clean("'''x'''");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::TripleString);
    assert_eq!(tokens[0].value, TokenValue::string("x"));
}

#[test]
fn triple_string_advances_the_line_counter_without_newline_tokens() {
    let buffer = SourceBuffer::new("\"\"\"a\nb\nc\"\"\" x");
    let mut sink = CollectingSink::new();
    let mut lexer = Lexer::new(&buffer, &mut sink);

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::TripleString);
    assert_eq!(token.value, TokenValue::string("a\nb\nc"));
    // Two embedded terminators advanced the counter 1 → 3, and no Newline
    // token was emitted for them.
    assert_eq!(lexer.context().line(), 3);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
}

#[test]
fn unterminated_triple_string_is_a_syntax_error() {
    let (tokens, _) = tokenize("'''open\nstill");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::SyntaxError);
    assert_eq!(tokens[0].value, TokenValue::string("'''open\nstill"));
}

#[test]
fn unterminated_single_string_degrades_to_quote_error_and_rescans() {
    assert_eq!(
        kinds("\"abc\nd"),
        vec![
            TokenKind::SyntaxError,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
        ]
    );
}

// === Path references ===

#[test]
fn path_reference_round_trip() {
    let tokens = tokens_clean("</World/Ball>");
    assert_eq!(tokens[0].kind, TokenKind::PathRef);
    assert_eq!(tokens[0].value, TokenValue::string("/World/Ball"));
}

#[test]
fn nested_open_angle_fails_then_rescans() {
    let (tokens, _) = tokenize("<<a>");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::SyntaxError);
    assert_eq!(tokens[0].value, TokenValue::string("<"));
    assert_eq!(tokens[1].kind, TokenKind::PathRef);
    assert_eq!(tokens[1].value, TokenValue::string("a"));
}

// === Asset references ===

#[test]
fn triple_asset_reference_decodes() {
    let tokens = tokens_clean("@@@ab@@@");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::TripleAssetRef);
    assert_eq!(tokens[0].value, TokenValue::string("ab"));
}

#[test]
fn malformed_asset_escape_is_a_syntax_error_token() {
    let (tokens, _) = tokenize(r"@@@a\@b@@@");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::SyntaxError);
}

#[test]
fn unterminated_asset_reference_leaves_at_punctuation() {
    assert_eq!(
        kinds("@oops\n"),
        vec![TokenKind::At, TokenKind::Identifier, TokenKind::Newline]
    );
}

// === Numbers ===

#[test]
fn negative_zero_token_is_a_signed_double_zero() {
    let tokens = tokens_clean("-0");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    match tokens[0].value.as_double() {
        Some(d) => {
            assert_eq!(d, 0.0);
            assert!(d.is_sign_negative());
        }
        None => panic!("expected a double payload"),
    }
}

#[test]
fn number_payload_kinds() {
    let tokens = tokens_clean("42 -7 1.5 -inf");
    assert_eq!(tokens[0].value, TokenValue::Uint(42));
    assert_eq!(tokens[1].value, TokenValue::Int(-7));
    assert_eq!(tokens[2].value, TokenValue::double(1.5));
    assert_eq!(tokens[3].value, TokenValue::double(f64::NEG_INFINITY));
}

#[test]
fn overflow_emits_exactly_one_warning_and_a_double() {
    let (tokens, diagnostics) = tokenize("18446744073709551616");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert!(tokens[0].value.as_double().is_some());
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("18446744073709551616"));
    assert_eq!(diagnostics[0].line, 1);
}

#[test]
fn in_range_integer_emits_no_warning() {
    let (tokens, diagnostics) = tokenize("18446744073709551615");
    assert_eq!(tokens[0].value, TokenValue::Uint(u64::MAX));
    assert!(diagnostics.is_empty());
}

#[test]
fn overflow_warning_carries_line_and_file_context() {
    let buffer = SourceBuffer::new("x\n99999999999999999999");
    let mut sink = CollectingSink::new();
    let mut lexer = Lexer::new(&buffer, &mut sink).with_file_context("shot.usda");
    while lexer.next_token().kind != TokenKind::Eof {}
    drop(lexer);

    let diagnostics = sink.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 2);
    assert_eq!(diagnostics[0].file_context.as_deref(), Some("shot.usda"));
}

#[test]
fn positive_inf_and_nan_are_identifiers() {
    assert_eq!(kinds("inf nan"), vec![TokenKind::Identifier, TokenKind::Identifier]);
}

// === Comments ===

#[test]
fn line_comments_are_discarded() {
    assert_eq!(
        kinds("def // trailing\nover"),
        vec![TokenKind::Def, TokenKind::Newline, TokenKind::Over]
    );
}

#[test]
fn block_comment_counts_lines_and_is_discarded() {
    let buffer = SourceBuffer::new("/* a\nb\nc */ def");
    let mut sink = CollectingSink::new();
    let mut lexer = Lexer::new(&buffer, &mut sink);

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Def);
    assert_eq!(lexer.context().line(), 3);
}

#[test]
fn unterminated_block_comment_ends_the_stream_in_block_comment_state() {
    let buffer = SourceBuffer::new("def /* open\nnever closed");
    let mut sink = CollectingSink::new();
    let mut lexer = Lexer::new(&buffer, &mut sink);

    assert_eq!(lexer.next_token().kind, TokenKind::Def);
    assert_eq!(lexer.context().state(), ScanState::Text);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!(lexer.context().state(), ScanState::BlockComment);
    assert_eq!(lexer.context().line(), 2);
}

// === Syntax errors ===

#[test]
fn unmatched_character_is_a_syntax_error_at_a_known_line() {
    let buffer = SourceBuffer::new("a\n%");
    let mut sink = CollectingSink::new();
    let mut lexer = Lexer::new(&buffer, &mut sink);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Newline);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::SyntaxError);
    assert_eq!(token.value, TokenValue::string("%"));
    assert_eq!(lexer.context().line(), 2);
}

#[test]
fn escaped_newline_is_a_syntax_error_that_still_breaks_the_line() {
    let buffer = SourceBuffer::new("\\\nx");
    let mut sink = CollectingSink::new();
    let mut lexer = Lexer::new(&buffer, &mut sink);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::SyntaxError);
    assert_eq!(lexer.context().line(), 2);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
}

#[test]
fn oracle_rejected_identifier_is_a_syntax_error() {
    let (tokens, _) = tokenize("\u{a7}");
    assert_eq!(tokens[0].kind, TokenKind::SyntaxError);
}

// === Spans ===

#[test]
fn spans_index_the_raw_source() {
    let source = "def \"hi\"";
    let tokens = tokens_clean(source);
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(4, 8));
    assert_eq!(&source[4..8], "\"hi\"");
}

// === Sessions ===

#[test]
fn independent_sessions_interleave_without_shared_state() {
    let buffer_a = SourceBuffer::new("a\nb");
    let buffer_b = SourceBuffer::new("1 2 3");
    let mut sink_a = CollectingSink::new();
    let mut sink_b = CollectingSink::new();
    let mut lexer_a = Lexer::new(&buffer_a, &mut sink_a);
    let mut lexer_b = Lexer::new(&buffer_b, &mut sink_b);

    assert_eq!(lexer_a.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer_b.next_token().value, TokenValue::Uint(1));
    assert_eq!(lexer_a.next_token().kind, TokenKind::Newline);
    assert_eq!(lexer_b.next_token().value, TokenValue::Uint(2));
    assert_eq!(lexer_a.context().line(), 2);
    assert_eq!(lexer_b.context().line(), 1);
}

// === Whole-document smoke test ===

#[test]
fn realistic_layer_scans_cleanly() {
    let source = r#"#usda 1.0
(
    doc = """Two
line doc"""
    subLayers = [
        @shading.usda@
    ]
)

def Xform "Ball" (
    references = @@@ball_rig.usda@@@</Ball>
)
{
    custom string userName = "ball-1"
    double xformOp:translate.timeSamples = {
        1: -0.5,
        2: 2.5e-1,
    }
    rel material:binding = </Materials/Rubber>
    variantSet "shadingVariant" = {
        "red" {
            over "Looks" {}
        }
    }
}
"#;
    let (tokens, diagnostics) = tokenize(source);
    assert!(diagnostics.is_empty(), "diagnostics: {diagnostics:?}");
    assert!(
        !tokens.iter().any(|t| t.kind == TokenKind::SyntaxError),
        "syntax errors in: {tokens:?}"
    );

    // Spot-check the load-bearing classifications.
    assert_eq!(tokens[0].kind, TokenKind::MagicComment);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::TripleString));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::SubLayers));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::AssetRef));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::TripleAssetRef));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::PathRef));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::VariantSet));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::NamespacedIdentifier
            && t.value == TokenValue::string("material:binding")));
    assert!(tokens
        .iter()
        .any(|t| t.value == TokenValue::double(-0.5)));
}
