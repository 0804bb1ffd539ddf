//! Heuristic detection of regex literal start offsets.
//!
//! A `/` in brace-language source is either division, the start of a
//! comment, or the start of a regex literal. Telling them apart properly needs
//! a parser; this module uses a lexical pattern instead and records every
//! offset where a `/` is followed by something that looks like a complete
//! regex literal and is preceded by a token after which an expression may
//! begin:
//!
//! - start of a line,
//! - one of `= ! : , (` (comparisons such as `==` or `<=` end in `=`),
//! - the keyword `return`,
//!
//! optionally followed by spaces or tabs. The body must be non-empty, must not
//! start with `*`, `+` or `?` (so `/*` stays a comment and `//` never
//! qualifies), cannot contain a raw newline, and honors `\` escapes and
//! `[...]` bracket expressions (where `/` does not terminate). The closing `/`
//! may be followed by flag letters.
//!
//! The pattern can misfire on unusual operator sequences. It is kept
//! lexical on purpose: only offsets it reports are treated as regex starts.

use std::sync::LazyLock;

use regex::Regex;

const REGEX_LITERAL: &str = concat!(
    r"(?mR)(?:^|[=!:,(]|\breturn)[ \t]*",
    r"(/",
    // first element: no `*`, `+`, `?`
    r"(?:[^\r\n\[/\\*+?]|\\[^\r\n]|\[(?:[^\r\n\]\\]|\\[^\r\n])*\])",
    r"(?:[^\r\n\[/\\]|\\[^\r\n]|\[(?:[^\r\n\]\\]|\\[^\r\n])*\])*",
    r"/[A-Za-z]*)",
);

#[allow(
    clippy::expect_used,
    reason = "pattern is a constant covered by unit tests"
)]
static REGEX_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REGEX_LITERAL).expect("regex literal pattern compiles"));

/// Sorted set of byte offsets where a regex literal begins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegexStarts {
    offsets: Vec<usize>,
}

impl RegexStarts {
    /// Scan `text` for regex literal starts.
    pub fn scan(text: &str) -> Self {
        let offsets = REGEX_LITERAL_RE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|literal| literal.start())
            .collect();
        RegexStarts { offsets }
    }

    /// Returns `true` if a regex literal begins at `offset`.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Returns `true` if no regex literal was detected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
