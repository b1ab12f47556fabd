//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position has
//! reached or exceeded the source length; no bounds check is needed in the
//! common case because the sentinel guarantees termination.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from EOF by comparing `pos` against `source_len`.
//! A null at `pos < source_len` is an interior null (the scanner emits an
//! error token for it); a null at `pos >= source_len` is the sentinel.

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots: scanning rules
/// that fail part-way through (an unterminated string, an asset reference
/// with no closing delimiter) save the cursor on entry and restore it, so
/// the fallback rule rescans from a known position.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated with at least one cache line of zeros
/// after `source_len`. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction and is what makes
/// [`peek_at`](Self::peek_at) for small offsets unconditionally safe.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte at the current position.
    ///
    /// Returns `0x00` at EOF (the sentinel). Interior null bytes also return
    /// `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// The byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// The byte `n` positions ahead of current.
    ///
    /// Safe for `n < 64`: the buffer carries a full cache line of zero
    /// padding after the sentinel, so lookahead reads zeros rather than
    /// running out of bounds.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        debug_assert!(n < 64, "lookahead of {n} exceeds the padding guarantee");
        self.buf[(self.pos + n) as usize]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// EOF is when the current byte is the sentinel (`0x00`) and the
    /// position is at or past the source length. This distinguishes EOF
    /// from interior null bytes.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on UTF-8
    /// character boundaries. Both hold for ranges produced by the scanner's
    /// token boundary tracking, since the source entered as valid `&str`
    /// and rules only split at ASCII bytes or whole-codepoint steps.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on source originally validated as &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: The buffer was constructed from `&str` (valid UTF-8) and
        // the scanner ensures start..end lies on character boundaries.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Optimistically match one UTF-8 character at the current position.
    ///
    /// Delegates to [`classify::match_utf8_char`](crate::classify::match_utf8_char)
    /// over the source content: returns the byte length of the character, or
    /// 0 when the position cannot start one.
    #[inline]
    pub fn match_char(&self) -> u32 {
        crate::classify::match_utf8_char(
            &self.buf[..self.source_len as usize],
            self.pos as usize,
        )
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    /// This holds for every classification predicate in [`crate::classify`].
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is positioned at
    /// the found byte, or at EOF if the byte was not found. Interior null
    /// bytes are skipped (they are not EOF).
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let start = self.pos;
        loop {
            let b = self.buf[self.pos as usize];
            if b == byte {
                break;
            }
            if b == 0 && self.pos >= self.source_len {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance to the next line terminator (`\n` or `\r`) or EOF, using
    /// SIMD-accelerated search. Used to skip comment bodies.
    ///
    /// Scans only within source content; if no terminator is found the
    /// cursor lands on the EOF sentinel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets within the source fit in u32 by construction"
    )]
    pub fn eat_line_body(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }
}
