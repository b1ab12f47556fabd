//! The pull-based lexer driver.
//!
//! `next_token()` is the operation the parser repeatedly calls: it loops
//! over raw tokens, folds trivia into the session state (line counting,
//! comment discarding, the TEXT / BLOCK_COMMENT transition), cooks
//! everything else, and returns exactly one [`Token`] per call. The call
//! never fails and never suspends — by the time control returns, the token
//! is complete and the cursor has advanced past it.

use usda_diagnostic::{CollectingSink, Diagnostic, DiagnosticSink};
use usda_ir::{Span, Token, TokenKind, TokenValue};
use usda_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::cooker::cook;
use crate::identifier::{IdentifierRules, STANDARD_RULES};
use crate::scan_context::{count_line_terminators, ScanContext, ScanState};

/// Streaming lexer over one source buffer.
///
/// Owns the session's [`ScanContext`]; borrows the source buffer, the
/// identifier oracle, and the diagnostic sink from the host. Independent
/// sessions share nothing, so any number may run concurrently on separate
/// threads.
pub struct Lexer<'src, 'env> {
    scanner: RawScanner<'src>,
    context: ScanContext,
    rules: &'env dyn IdentifierRules,
    sink: &'env mut dyn DiagnosticSink,
}

impl<'src, 'env> Lexer<'src, 'env> {
    /// Create a lexer over `buffer` with the stock identifier rules.
    ///
    /// Overflow warnings go to `sink`; nothing else does.
    pub fn new(buffer: &'src SourceBuffer, sink: &'env mut dyn DiagnosticSink) -> Self {
        Lexer {
            scanner: RawScanner::new(buffer.cursor()),
            context: ScanContext::new(),
            rules: &STANDARD_RULES,
            sink,
        }
    }

    /// Label diagnostics from this session with a file context.
    #[must_use]
    pub fn with_file_context(mut self, file_context: impl Into<Box<str>>) -> Self {
        self.context = ScanContext::with_file_context(file_context);
        self
    }

    /// Replace the identifier oracle.
    #[must_use]
    pub fn with_rules(mut self, rules: &'env dyn IdentifierRules) -> Self {
        self.rules = rules;
        self
    }

    /// The session's scanning state (line number, file label, lexer state).
    pub fn context(&self) -> &ScanContext {
        &self.context
    }

    /// Produce the next token.
    ///
    /// Returns an `Eof` token once the buffer is exhausted, and keeps
    /// returning it on subsequent calls.
    pub fn next_token(&mut self) -> Token {
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();
            let end = start + raw.len;

            match raw.tag {
                RawTag::Eof => {
                    return Token::bare(TokenKind::Eof, Span::new(start, start));
                }

                RawTag::Whitespace | RawTag::LineComment => continue,

                RawTag::BlockComment => {
                    // Discarded, but embedded terminators still count.
                    let text = self.scanner.slice(start, end);
                    self.context.advance_lines(count_line_terminators(text));
                    continue;
                }

                RawTag::BlockCommentUnterminated => {
                    // Input ended inside `/* … */`. The comment is trivia
                    // either way, so the stream ends normally; the context
                    // records that scanning stopped in BLOCK_COMMENT state.
                    let text = self.scanner.slice(start, end);
                    self.context.advance_lines(count_line_terminators(text));
                    self.context.set_state(ScanState::BlockComment);
                    return Token::bare(TokenKind::Eof, Span::new(end, end));
                }

                RawTag::Newline => {
                    self.context.advance_lines(1);
                    return Token::bare(TokenKind::Newline, Span::new(start, end));
                }

                RawTag::HashComment => {
                    // Only the very first line promotes a `#` run to the
                    // format-version marker; anywhere else it is discarded.
                    if self.context.line() == 1 {
                        let text = self.scanner.slice(start, end);
                        return Token::new(
                            TokenKind::MagicComment,
                            TokenValue::string(text),
                            Span::new(start, end),
                        );
                    }
                    continue;
                }

                _ => {
                    let text = self.scanner.slice(start, end);
                    let cooked = cook(raw.tag, text, self.rules);
                    if let Some(message) = cooked.warning {
                        let mut diagnostic = Diagnostic::warning(message, self.context.line());
                        if let Some(file) = self.context.file_context() {
                            diagnostic = diagnostic.with_file_context(file);
                        }
                        self.sink.report(diagnostic);
                    }
                    self.context.advance_lines(cooked.newlines);
                    return Token::new(cooked.kind, cooked.value, Span::new(start, end));
                }
            }
        }
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    /// Tokens up to (and excluding) end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenize a whole source, collecting diagnostics.
///
/// Convenience wrapper for hosts and tests that do not drive the lexer
/// incrementally. The returned tokens exclude the final `Eof`.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let buffer = SourceBuffer::new(source);
    let mut sink = CollectingSink::new();
    let tokens: Vec<Token> = Lexer::new(&buffer, &mut sink).collect();
    (tokens, sink.into_diagnostics())
}

#[cfg(test)]
mod tests;
