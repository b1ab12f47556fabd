//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It recognizes token
//! boundaries only: keywords are not resolved, escapes are not decoded,
//! numbers are not parsed, and the identifier oracle is never consulted —
//! all of that belongs to the cooking layer.
//!
//! # Design
//!
//! `next_token()` dispatches on the current byte; each arm is a focused
//! method that applies one rule with maximal munch and returns
//! `RawToken { tag, len }`. Rules that can fail part-way (a quote with no
//! closing quote on the line, an `@` with no closing delimiter) snapshot
//! the cursor on entry and restore it, so the losing rule degrades to the
//! fixed-priority fallback exactly as if it had never matched. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`.

use crate::classify;
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair. Error conditions
/// are encoded as `RawTag` variants, never as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current byte offset — the start of whatever `next_token` scans next.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Extract a source substring (used by the cooking layer to re-read
    /// matched text).
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' | b'\n' => self.newline(start),
            b'#' => self.hash_comment(start),
            b'/' => self.slash_or_comment(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | 0xC0..=0xF7 => self.identifier(start),
            b'0'..=b'9' => self.number_tail(start),
            b'-' => self.minus_or_number(start),
            b'.' => self.dot_or_number(start),
            b'\'' | b'"' => self.quote(start),
            b'@' => self.at_sign(start),
            b'<' => self.path_ref(start),
            b'\\' => self.backslash(start),
            b'=' => self.single(start, RawTag::Equals),
            b',' => self.single(start, RawTag::Comma),
            b':' => self.single(start, RawTag::Colon),
            b';' => self.single(start, RawTag::Semicolon),
            b'$' => self.single(start, RawTag::Dollar),
            b'[' => self.single(start, RawTag::LBracket),
            b']' => self.single(start, RawTag::RBracket),
            b'(' => self.single(start, RawTag::LParen),
            b')' => self.single(start, RawTag::RParen),
            b'{' => self.single(start, RawTag::LBrace),
            b'}' => self.single(start, RawTag::RBrace),
            b'&' => self.single(start, RawTag::Ampersand),
            _ => self.unmatched(start),
        }
    }

    // ─── EOF ──────────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken::new(RawTag::Eof, 0)
        } else {
            // Interior null byte: no rule matches it, so it falls to the
            // catch-all like any other stray character.
            self.cursor.advance();
            RawToken::new(RawTag::Unmatched, self.cursor.pos() - start)
        }
    }

    // ─── Whitespace & Newlines ────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b == b' ' || b == b'\t');
        RawToken::new(RawTag::Whitespace, self.cursor.pos() - start)
    }

    fn newline(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'\r' {
            self.cursor.advance();
            if self.cursor.current() == b'\n' {
                // CRLF: one terminator, len 2
                self.cursor.advance();
            }
        } else {
            self.cursor.advance();
        }
        RawToken::new(RawTag::Newline, self.cursor.pos() - start)
    }

    // ─── Comments ─────────────────────────────────────────────────────

    fn hash_comment(&mut self, start: u32) -> RawToken {
        // Whether this is the line-1 magic comment or discardable trivia is
        // the driver's decision; the boundary is the same either way.
        self.cursor.eat_line_body();
        RawToken::new(RawTag::HashComment, self.cursor.pos() - start)
    }

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_line_body();
                RawToken::new(RawTag::LineComment, self.cursor.pos() - start)
            }
            b'*' => self.block_comment(start),
            // A bare '/' matches no rule in this format.
            _ => self.unmatched(start),
        }
    }

    fn block_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2); // consume '/*'
        loop {
            self.cursor.eat_until(b'*');
            if self.cursor.is_eof() {
                return RawToken::new(RawTag::BlockCommentUnterminated, self.cursor.pos() - start);
            }
            self.cursor.advance(); // '*'
            if self.cursor.current() == b'/' {
                self.cursor.advance();
                return RawToken::new(RawTag::BlockComment, self.cursor.pos() - start);
            }
        }
    }

    // ─── Identifiers ──────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        let width = self.cursor.match_char();
        if width == 0 {
            // A lead byte with missing continuations cannot occur in source
            // that entered as &str, but the dispatch range is byte-level, so
            // stay total.
            return self.unmatched(start);
        }
        self.cursor.advance_n(width);
        self.cursor.eat_while(classify::is_ident_continue);

        // C++-style extension: `::`-joined segments. Strictly-longer match
        // outranks the plain identifier.
        let mut cpp_segments = 0u32;
        while self.cursor.current() == b':'
            && self.cursor.peek() == b':'
            && classify::is_ident_start(self.cursor.peek2())
        {
            let saved = self.cursor;
            self.cursor.advance_n(2);
            let w = self.cursor.match_char();
            if w == 0 {
                self.cursor = saved;
                break;
            }
            self.cursor.advance_n(w);
            self.cursor.eat_while(classify::is_ident_continue);
            cpp_segments += 1;
        }
        if cpp_segments > 0 {
            return RawToken::new(RawTag::CppNamespacedIdent, self.cursor.pos() - start);
        }

        // Colon-joined extension: `:`-separated segments; these admit dash
        // and bar so variant-selection names scan as one token.
        let mut ns_segments = 0u32;
        while self.cursor.current() == b':'
            && self.cursor.peek() != b':'
            && classify::is_ident_start(self.cursor.peek())
        {
            let saved = self.cursor;
            self.cursor.advance();
            let w = self.cursor.match_char();
            if w == 0 {
                self.cursor = saved;
                break;
            }
            self.cursor.advance_n(w);
            self.cursor.eat_while(classify::is_namespace_ident_continue);
            ns_segments += 1;
        }
        if ns_segments > 0 {
            return RawToken::new(RawTag::NamespacedIdent, self.cursor.pos() - start);
        }

        RawToken::new(RawTag::Ident, self.cursor.pos() - start)
    }

    // ─── Numeric Literals ─────────────────────────────────────────────

    /// Scan a number body. The cursor sits at the first digit or at a `.`
    /// known to be followed by a digit; a leading `-` was consumed by
    /// [`minus_or_number`](Self::minus_or_number).
    fn number_tail(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(classify::is_digit);
        if self.cursor.current() == b'.' {
            // Fractional part; may be empty ("5." scans as one number).
            self.cursor.advance();
            self.cursor.eat_while(classify::is_digit);
        }
        self.eat_exponent();
        RawToken::new(RawTag::Number, self.cursor.pos() - start)
    }

    /// Consume `[eE][+-]?digits` only when the digits are actually there;
    /// otherwise the `e` stays put and scans as an identifier ("1e" is the
    /// number 1 followed by the identifier e).
    fn eat_exponent(&mut self) {
        let c = self.cursor.current();
        if c != b'e' && c != b'E' {
            return;
        }
        let next = self.cursor.peek();
        if classify::is_digit(next) {
            self.cursor.advance();
            self.cursor.eat_while(classify::is_digit);
        } else if (next == b'+' || next == b'-') && classify::is_digit(self.cursor.peek2()) {
            self.cursor.advance_n(2);
            self.cursor.eat_while(classify::is_digit);
        }
    }

    fn minus_or_number(&mut self, start: u32) -> RawToken {
        let next = self.cursor.peek();
        if classify::is_digit(next) || (next == b'.' && classify::is_digit(self.cursor.peek2())) {
            self.cursor.advance(); // '-'
            return self.number_tail(start);
        }
        if next == b'i' && self.cursor.peek2() == b'n' && self.cursor.peek_at(3) == b'f' {
            self.cursor.advance_n(4);
            return RawToken::new(RawTag::NegInf, 4);
        }
        self.single(start, RawTag::Minus)
    }

    fn dot_or_number(&mut self, start: u32) -> RawToken {
        if classify::is_digit(self.cursor.peek()) {
            self.number_tail(start)
        } else {
            self.single(start, RawTag::Dot)
        }
    }

    // ─── Strings ──────────────────────────────────────────────────────

    fn quote(&mut self, start: u32) -> RawToken {
        let q = self.cursor.current();
        if self.cursor.peek() == q {
            if self.cursor.peek2() == q {
                return self.triple_string(start, q);
            }
            // Empty string. The peek2 check above is the lookahead that
            // keeps this shorter rule from eating the start of a
            // triple-quoted string.
            self.cursor.advance_n(2);
            return RawToken::new(RawTag::String, 2);
        }
        self.single_line_string(start, q)
    }

    fn single_line_string(&mut self, start: u32, q: u8) -> RawToken {
        let saved = self.cursor;
        self.cursor.advance(); // opening quote
        loop {
            let b = self.cursor.current();
            if b == q {
                self.cursor.advance();
                return RawToken::new(RawTag::String, self.cursor.pos() - start);
            }
            match b {
                b'\\' => {
                    self.cursor.advance();
                    let c = self.cursor.current();
                    if c == b'\n' || c == b'\r' || (c == 0 && self.cursor.is_eof()) {
                        break;
                    }
                    self.cursor.advance_n(classify::utf8_char_width(c));
                }
                b'\n' | b'\r' => break,
                0 if self.cursor.is_eof() => break,
                _ => self.cursor.advance(),
            }
        }
        // No closing quote on this line. The rule fails as a whole and the
        // opening quote alone falls through to the catch-all.
        self.cursor = saved;
        self.cursor.advance();
        RawToken::new(RawTag::Unmatched, 1)
    }

    fn triple_string(&mut self, start: u32, q: u8) -> RawToken {
        self.cursor.advance_n(3); // opening delimiter
        loop {
            let b = self.cursor.current();
            if b == 0 && self.cursor.is_eof() {
                return RawToken::new(RawTag::TripleStringUnterminated, self.cursor.pos() - start);
            }
            if b == q {
                if self.cursor.peek() == q && self.cursor.peek2() == q {
                    self.cursor.advance_n(3);
                    return RawToken::new(RawTag::TripleString, self.cursor.pos() - start);
                }
                self.cursor.advance();
                continue;
            }
            if b == b'\\' {
                self.cursor.advance();
                let c = self.cursor.current();
                if c == 0 && self.cursor.is_eof() {
                    continue; // trailing backslash; next pass reports EOF
                }
                self.cursor.advance_n(classify::utf8_char_width(c));
                continue;
            }
            self.cursor.advance();
        }
    }

    // ─── Asset References ─────────────────────────────────────────────

    fn at_sign(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'@' && self.cursor.peek2() == b'@' {
            self.triple_asset(start)
        } else {
            self.single_asset(start)
        }
    }

    fn single_asset(&mut self, start: u32) -> RawToken {
        let saved = self.cursor;
        self.cursor.advance(); // opening '@'
        self.cursor
            .eat_while(|b| b != b'@' && b != b'\n' && b != b'\r' && b != 0);
        if self.cursor.current() == b'@' {
            self.cursor.advance();
            return RawToken::new(RawTag::AssetRef, self.cursor.pos() - start);
        }
        // No closing delimiter on this line: the '@' alone is punctuation.
        self.cursor = saved;
        self.cursor.advance();
        RawToken::new(RawTag::At, 1)
    }

    fn triple_asset(&mut self, start: u32) -> RawToken {
        let saved = self.cursor;
        self.cursor.advance_n(3); // opening '@@@'
        loop {
            let b = self.cursor.current();
            if b == b'\n' || b == b'\r' || (b == 0 && self.cursor.is_eof()) {
                // Unterminated: the next-longest rule still wins, and the
                // single-asset rule matches the leading `@@` as an empty
                // reference.
                self.cursor = saved;
                return self.single_asset(start);
            }
            if b == b'\\'
                && self.cursor.peek() == b'@'
                && self.cursor.peek2() == b'@'
                && self.cursor.peek_at(3) == b'@'
            {
                self.cursor.advance_n(4); // escaped delimiter '\@@@'
                continue;
            }
            if b == b'@' {
                // Runs of one or two '@' are content; a longer run ends the
                // literal with its last three bytes as the delimiter, which
                // keeps the overall match maximal.
                let run_start = self.cursor.pos();
                self.cursor.eat_while(|b| b == b'@');
                if self.cursor.pos() - run_start >= 3 {
                    return RawToken::new(RawTag::TripleAssetRef, self.cursor.pos() - start);
                }
                continue;
            }
            self.cursor.advance();
        }
    }

    // ─── Path References ──────────────────────────────────────────────

    fn path_ref(&mut self, start: u32) -> RawToken {
        let saved = self.cursor;
        self.cursor.advance(); // opening '<'
        self.cursor
            .eat_while(|b| b != b'<' && b != b'>' && b != b'\n' && b != b'\r' && b != 0);
        if self.cursor.current() == b'>' {
            self.cursor.advance();
            return RawToken::new(RawTag::PathRef, self.cursor.pos() - start);
        }
        // Embedded '<' or no '>' on this line: '<' is not punctuation in
        // this format, so the opener itself is the error.
        self.cursor = saved;
        self.cursor.advance();
        RawToken::new(RawTag::Unmatched, 1)
    }

    // ─── Fallback ─────────────────────────────────────────────────────

    fn backslash(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        // The escaped-newline spelling is consumed whole so the error token
        // points at the backslash while the terminator still counts as a
        // line break.
        if self.cursor.current() == b'\r' {
            self.cursor.advance();
            if self.cursor.current() == b'\n' {
                self.cursor.advance();
            }
        } else if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        RawToken::new(RawTag::Unmatched, self.cursor.pos() - start)
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken::new(tag, self.cursor.pos() - start)
    }

    /// The catch-all rule: consume exactly one character.
    fn unmatched(&mut self, start: u32) -> RawToken {
        let width = self.cursor.match_char().max(1);
        self.cursor.advance_n(width);
        RawToken::new(RawTag::Unmatched, self.cursor.pos() - start)
    }
}
