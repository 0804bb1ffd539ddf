//! Byte cursor over borrowed source text.
//!
//! The cursor advances through the text byte-by-byte. Reads past the end
//! return the sentinel `0x00` instead of panicking, so the tokenizer can look
//! ahead freely near EOF.
//!
//! # Interior Null Bytes
//!
//! If the text contains interior null bytes (U+0000), the cursor
//! distinguishes them from EOF by comparing `pos` against the text length.
//! A null at `pos < len` is ordinary content; a null at `pos >= len` is the
//! sentinel.

/// Sentinel returned by [`Cursor::current`] and [`Cursor::peek`] past EOF.
pub const SENTINEL: u8 = 0;

/// Byte cursor over borrowed source text.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
///
/// # Invariant
///
/// `pos <= src.len()`. Every movement is clamped to the text length.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source text as bytes.
    src: &'a [u8],
    /// Current read position (byte index into `src`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(text: &'a str) -> Self {
        Self {
            src: text.as_bytes(),
            pos: 0,
        }
    }

    /// Returns the byte at the current position, or [`SENTINEL`] at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead of current.
    ///
    /// Safe to call at any position: reads past the end return [`SENTINEL`].
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.pos
            .checked_add(offset)
            .and_then(|i| self.src.get(i))
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.src.len());
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Uses the leading byte to determine character width:
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Returns `true` if the cursor has reached the end of the text.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset in the text.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` if `literal` occurs starting at the current position.
    ///
    /// An empty literal never matches: an empty marker means "this language
    /// has no such comment", not "a comment starts everywhere".
    #[inline]
    pub fn matches(&self, literal: &[u8]) -> bool {
        !literal.is_empty() && self.src[self.pos..].starts_with(literal)
    }

    /// Advance to the next occurrence of `literal`.
    ///
    /// Searches for the literal's first byte with memchr and confirms the
    /// full match there. Returns `true` with the cursor on the first byte of
    /// the match, or `false` with the cursor at EOF.
    pub fn seek_to_literal(&mut self, literal: &[u8]) -> bool {
        let Some(&first) = literal.first() else {
            self.pos = self.src.len();
            return false;
        };
        while let Some(offset) = memchr::memchr(first, &self.src[self.pos..]) {
            self.pos += offset;
            if self.matches(literal) {
                return true;
            }
            self.pos += 1;
        }
        self.pos = self.src.len();
        false
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// The sentinel is neither space nor tab, so scanning stops at EOF.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t') {
            self.pos += 1;
        }
    }

    /// Advance to the next `\r` or `\n` byte, or to EOF.
    ///
    /// Used by the tokenizer to skip line-comment bodies. The newline itself
    /// is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.src[self.pos..];
        match memchr::memchr2(b'\r', b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Consume one logical newline (`\r\n`, lone `\r` or lone `\n`).
    ///
    /// Returns `false` without moving when the cursor is not on a newline.
    pub fn eat_newline(&mut self) -> bool {
        match self.current() {
            b'\r' if self.peek(1) == b'\n' => {
                self.advance_n(2);
                true
            }
            b'\r' | b'\n' => {
                self.advance();
                true
            }
            _ => false,
        }
    }
}
