//! Comment-span tokenizer.
//!
//! Walks a [`Cursor`] and emits a contiguous sequence of classified
//! [`Span`]s covering the whole input exactly once.
//!
//! # Design
//!
//! Two layers:
//!
//! - The raw scan (`raw_token`) groups bytes into text runs, whitespace runs,
//!   newlines and comments. Quoted literals and regex literals are swallowed
//!   into text runs, so markers inside them are never seen as comments.
//! - `next_span` applies line context. Whitespace is held back until the
//!   next token shows where it belongs: in front of a comment that starts its
//!   line, it becomes part of the whole-line comment; in front of a line
//!   comment after code, it goes with the comment; otherwise it is text.
//!
//! Malformed input never fails: unterminated comments, strings and regex
//! literals run to the end of the text.

use std::iter::FusedIterator;

use crate::category::{CharClass, CharClassTable};
use crate::cursor::Cursor;
use crate::regex_index::RegexStarts;
use crate::{Category, LanguageProfile, Span};

/// Raw token kind, before line context is applied.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum RawKind {
    Text,
    Whitespace,
    Newline,
    Block,
    SpecialBlock,
    LineComment,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct RawToken {
    kind: RawKind,
    start: usize,
    end: usize,
}

/// Comment-span tokenizer over one input text.
///
/// Iterating yields every span of the input in order. The tokenizer holds at
/// most one span of lookahead: an inline block comment that followed a
/// whitespace run, parked while the whitespace is returned.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    profile: &'a LanguageProfile,
    classes: CharClassTable,
    regex_starts: RegexStarts,
    /// True when only spaces and tabs were seen since the last newline.
    after_line_start: bool,
    lookahead: Option<Span>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer for `text` under `profile`.
    ///
    /// Regex literal starts are detected here, over the whole text, when the
    /// profile enables them.
    pub fn new(text: &'a str, profile: &'a LanguageProfile) -> Self {
        let regex_starts = if profile.regex_literals {
            RegexStarts::scan(text)
        } else {
            RegexStarts::default()
        };
        Self {
            cursor: Cursor::new(text),
            profile,
            classes: CharClassTable::new(profile),
            regex_starts,
            after_line_start: true,
            lookahead: None,
        }
    }

    /// Regex literal starts detected in the text.
    pub fn regex_starts(&self) -> &RegexStarts {
        &self.regex_starts
    }

    /// Produce the next span.
    ///
    /// Returns `None` once the text is exhausted and no span is parked.
    /// Subsequent calls keep returning `None`.
    pub fn next_span(&mut self) -> Option<Span> {
        if let Some(span) = self.lookahead.take() {
            return Some(span);
        }

        let mut pending_ws: Option<Span> = None;
        loop {
            let Some(raw) = self.raw_token() else {
                return pending_ws;
            };
            let leading = pending_ws.map_or(raw.start, |ws| ws.start);

            match raw.kind {
                RawKind::Whitespace => {
                    pending_ws = Some(Span::new(Category::Text, leading, raw.end));
                }
                RawKind::Newline => {
                    self.after_line_start = true;
                    return Some(Span::new(Category::Text, leading, raw.end));
                }
                RawKind::Text => {
                    self.after_line_start = false;
                    return Some(Span::new(Category::Text, leading, raw.end));
                }
                RawKind::LineComment => {
                    let span = Span::new(Category::LineEnd, leading, raw.end);
                    if self.after_line_start {
                        return Some(self.take_line(span));
                    }
                    return Some(span);
                }
                RawKind::Block | RawKind::SpecialBlock => {
                    let category = if raw.kind == RawKind::Block {
                        Category::Delimited
                    } else {
                        Category::Special
                    };
                    let comment = Span::new(category, raw.start, raw.end);
                    if self.after_line_start {
                        return Some(self.take_line(comment.extend_back_to(leading)));
                    }
                    if let Some(ws) = pending_ws {
                        self.lookahead = Some(comment);
                        return Some(ws);
                    }
                    return Some(comment);
                }
            }
        }
    }

    /// Turn a comment that starts its line into the whole-line variant,
    /// swallowing the newline that follows it.
    fn take_line(&mut self, span: Span) -> Span {
        self.after_line_start = self.cursor.eat_newline();
        Span::new(span.category.lines_variant(), span.start, self.cursor.pos())
    }

    // ─── Raw Scan ──────────────────────────────────────────────────

    fn raw_token(&mut self) -> Option<RawToken> {
        let start = self.cursor.pos();
        while !self.cursor.is_eof() {
            let b = self.cursor.current();
            match self.classes.get(b) {
                CharClass::Other => self.cursor.advance(),
                _ if b == b'/' && self.regex_starts.contains(self.cursor.pos()) => {
                    self.skip_regex();
                }
                CharClass::Quote => self.skip_quoted(b),
                CharClass::RegexStart => self.cursor.advance(),
                CharClass::CommentStart => {
                    let Some(kind) = self.comment_at_cursor() else {
                        self.cursor.advance();
                        continue;
                    };
                    if self.cursor.pos() != start {
                        return Some(self.text_token(start));
                    }
                    return Some(self.comment(kind, start));
                }
                // A lone space between words stays in the text run.
                CharClass::Whitespace
                    if b == b' '
                        && self.cursor.pos() != start
                        && self.classes.get(self.cursor.peek(1)) == CharClass::Other =>
                {
                    self.cursor.advance();
                }
                class @ (CharClass::Whitespace | CharClass::Newline) => {
                    if self.cursor.pos() != start {
                        return Some(self.text_token(start));
                    }
                    let kind = if class == CharClass::Newline {
                        self.cursor.eat_newline();
                        RawKind::Newline
                    } else {
                        self.cursor.eat_whitespace();
                        RawKind::Whitespace
                    };
                    return Some(RawToken {
                        kind,
                        start,
                        end: self.cursor.pos(),
                    });
                }
            }
        }

        (self.cursor.pos() != start).then(|| self.text_token(start))
    }

    fn text_token(&self, start: usize) -> RawToken {
        RawToken {
            kind: RawKind::Text,
            start,
            end: self.cursor.pos(),
        }
    }

    /// Which comment, if any, starts at the cursor.
    ///
    /// The line marker is tried first, then the special block marker, which
    /// must win over the plain block marker it extends.
    fn comment_at_cursor(&self) -> Option<RawKind> {
        let profile = self.profile;
        if self.cursor.matches(profile.line_start.as_bytes()) {
            Some(RawKind::LineComment)
        } else if self.cursor.matches(profile.block_start_special.as_bytes()) {
            Some(RawKind::SpecialBlock)
        } else if self.cursor.matches(profile.block_start.as_bytes()) {
            Some(RawKind::Block)
        } else {
            None
        }
    }

    fn comment(&mut self, kind: RawKind, start: usize) -> RawToken {
        let profile = self.profile;
        match kind {
            RawKind::LineComment => {
                self.cursor.advance_n(profile.line_start.len());
                self.cursor.eat_until_newline_or_eof();
            }
            _ => {
                let marker = if kind == RawKind::SpecialBlock {
                    &profile.block_start_special
                } else {
                    &profile.block_start
                };
                self.cursor.advance_n(marker.len());
                let end = profile.block_end.as_bytes();
                if self.cursor.seek_to_literal(end) {
                    self.cursor.advance_n(end.len());
                }
            }
        }
        RawToken {
            kind,
            start,
            end: self.cursor.pos(),
        }
    }

    /// Skip a quoted literal opened by `quote` at the cursor.
    ///
    /// `\` escapes the next character (a `\r\n` pair counts as one). The
    /// literal ends after the closing quote, before a newline unless the
    /// quote kind is multi-line, or at EOF.
    fn skip_quoted(&mut self, quote: u8) {
        let multiline = self.profile.is_multiline_quote(quote);
        self.cursor.advance(); // opening quote
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.eat_newline() {
                        self.cursor.advance_char();
                    }
                }
                b if b == quote => {
                    self.cursor.advance();
                    return;
                }
                b'\r' | b'\n' if !multiline => return,
                _ => self.cursor.advance(),
            }
        }
    }

    /// Skip a regex literal whose opening `/` is at the cursor.
    ///
    /// Stops after the closing `/`, which does not count inside a `[...]`
    /// bracket expression. A raw newline ends the literal early.
    fn skip_regex(&mut self) {
        self.cursor.advance(); // opening '/'
        let mut in_class = false;
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b'\\' => {
                    self.cursor.advance();
                    if !matches!(self.cursor.current(), b'\r' | b'\n') {
                        self.cursor.advance_char();
                    }
                }
                b'[' => {
                    in_class = true;
                    self.cursor.advance();
                }
                b']' => {
                    in_class = false;
                    self.cursor.advance();
                }
                b'/' if !in_class => {
                    self.cursor.advance();
                    return;
                }
                b'\r' | b'\n' => return,
                _ => self.cursor.advance(),
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Span;

    #[inline]
    fn next(&mut self) -> Option<Span> {
        self.next_span()
    }
}

impl FusedIterator for Tokenizer<'_> {}
