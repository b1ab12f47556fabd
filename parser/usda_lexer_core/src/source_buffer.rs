//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! letting the scanner detect EOF without explicit bounds checking, and a
//! full cache line of zero padding after that so multi-byte lookahead
//! (`peek_at`) near the end of the buffer stays in bounds.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment and padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00 sentinel, 0x00 padding...]
///  ^                ^
///  0            source_len          total rounded up, >= one cache line
///                                   of zeros after the content
/// ```
///
/// Interior `0x00` bytes in the source are representable: the cursor
/// distinguishes them from the sentinel by comparing its position against
/// `source_len`, and the scanner turns them into error tokens.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Copies the source bytes into a zero-padded buffer. The source enters
    /// as `&str`, so every byte range the scanner produces is valid UTF-8 by
    /// construction.
    ///
    /// # Panics
    ///
    /// Panics if the source is `u32::MAX` bytes or larger. Token spans are
    /// `u32` offsets; a single 4 GiB text layer is rejected here rather than
    /// silently mis-spanned.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();
        let Ok(source_len_u32) = u32::try_from(source_len) else {
            panic!("source of {source_len} bytes exceeds the u32 span range");
        };

        // Round up so at least one full cache line of zeros follows the
        // content. peek_at(n) for n < 64 is then always in bounds.
        let padded_len = (source_len + CACHE_LINE).next_multiple_of(CACHE_LINE);

        // Allocate zero-filled, then copy source bytes. The sentinel
        // (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// The source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The source as `&str`.
    #[allow(
        unsafe_code,
        reason = "buffer was constructed from &str; content bytes are unchanged"
    )]
    pub fn as_str(&self) -> &str {
        // SAFETY: `new()` copied the bytes of a valid `&str` and nothing
        // mutates them afterwards.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
