//! Span categories and the per-profile byte classification table.

use crate::LanguageProfile;

/// Category of an emitted span.
///
/// `Text` is everything that is not a comment and is always kept. The other
/// six are the deletable comment categories.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Category {
    /// Code, whitespace, newlines, string and regex literals.
    Text = 0,
    /// Block comment that is not the first thing on its line.
    Delimited = 1,
    /// Block comment that starts its line (with its indentation and the
    /// trailing newline).
    DelimitedLines = 2,
    /// Special block comment (e.g. `/*!`) that is not the first thing on its line.
    Special = 3,
    /// Special block comment that starts its line.
    SpecialLines = 4,
    /// Line comment after code on the same line, with the whitespace before it.
    LineEnd = 5,
    /// Line comment that is alone on its line, with the trailing newline.
    WholeLine = 6,
}

impl Category {
    /// All categories, in discriminant order.
    pub const ALL: [Category; 7] = [
        Category::Text,
        Category::Delimited,
        Category::DelimitedLines,
        Category::Special,
        Category::SpecialLines,
        Category::LineEnd,
        Category::WholeLine,
    ];

    /// Human-readable name, as shown in span dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Delimited => "Delimited",
            Category::DelimitedLines => "Delimited Line(s)",
            Category::Special => "Delimited-Special",
            Category::SpecialLines => "Delimited-Special Line(s)",
            Category::LineEnd => "End-of-Line",
            Category::WholeLine => "Whole Line",
        }
    }

    /// Returns `true` for the six comment categories.
    #[inline]
    pub const fn is_comment(self) -> bool {
        !matches!(self, Category::Text)
    }

    /// The whole-line variant of a block comment category.
    ///
    /// Categories without a whole-line variant map to themselves.
    #[inline]
    pub const fn lines_variant(self) -> Category {
        match self {
            Category::Delimited => Category::DelimitedLines,
            Category::Special => Category::SpecialLines,
            Category::LineEnd => Category::WholeLine,
            other => other,
        }
    }
}

/// Classification of a single byte for the tokenizer's main loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum CharClass {
    /// Plain content, absorbed into the current text run.
    #[default]
    Other,
    /// Space or tab.
    Whitespace,
    /// `\r` or `\n`.
    Newline,
    /// Opens a quoted literal.
    Quote,
    /// First byte of a comment marker.
    CommentStart,
    /// `/` that may open a regex literal.
    RegexStart,
}

/// Byte classification table derived from a [`LanguageProfile`].
///
/// Built once per profile and owned by the tokenizer. Later assignments win:
/// whitespace, newlines, comment marker bytes, then quote characters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharClassTable {
    classes: [CharClass; 256],
}

impl CharClassTable {
    /// Build the table for `profile`.
    pub fn new(profile: &LanguageProfile) -> Self {
        let mut table = CharClassTable {
            classes: [CharClass::Other; 256],
        };
        table.assign(b" \t", CharClass::Whitespace);
        table.assign(b"\r\n", CharClass::Newline);
        for marker in [
            &profile.block_start,
            &profile.block_start_special,
            &profile.line_start,
        ] {
            if let Some(&first) = marker.as_bytes().first() {
                table.assign(&[first], CharClass::CommentStart);
            }
        }
        table.assign(profile.quote_chars.as_bytes(), CharClass::Quote);
        if profile.regex_literals && table.get(b'/') == CharClass::Other {
            table.assign(b"/", CharClass::RegexStart);
        }
        table
    }

    fn assign(&mut self, bytes: &[u8], class: CharClass) {
        for &b in bytes {
            self.classes[usize::from(b)] = class;
        }
    }

    /// Class of `byte`.
    #[inline]
    pub fn get(&self, byte: u8) -> CharClass {
        self.classes[usize::from(byte)]
    }
}
