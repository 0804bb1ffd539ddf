//! Human-readable span dump, for debugging profiles.

use std::fmt::Write as _;

use decomment_core::{LanguageProfile, Tokenizer};

/// One line per span: `Span@<start> (<category>) = "<text>"`.
///
/// Tabs, carriage returns and newlines in the text are shown as `\t`, `\r`
/// and `\n`.
pub fn describe_spans(text: &str, profile: &LanguageProfile) -> String {
    let mut out = String::new();
    for span in Tokenizer::new(text, profile) {
        let _ = writeln!(
            out,
            "Span@{} ({}) = \"{}\"",
            span.start,
            span.category.name(),
            make_visible(span.text(text))
        );
    }
    out
}

fn make_visible(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
