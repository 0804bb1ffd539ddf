//! Span filter and output assembly.

use decomment_core::Span;

use crate::CategoryFlags;

/// Iterator over the kept parts of a text, in order.
///
/// Created by [`kept_slices`].
#[derive(Clone, Debug)]
pub struct KeptSlices<'a, I> {
    text: &'a str,
    spans: I,
    flags: CategoryFlags,
}

impl<'a, I: Iterator<Item = Span>> Iterator for KeptSlices<'a, I> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for span in self.spans.by_ref() {
            if self.flags.removes(span.category) {
                tracing::trace!(
                    category = span.category.name(),
                    start = span.start,
                    end = span.end,
                    "drop span"
                );
                continue;
            }
            return Some(span.text(self.text));
        }
        None
    }
}

/// Substrings of `text` for every span whose category `flags` keeps.
pub fn kept_slices<I>(text: &str, spans: I, flags: CategoryFlags) -> KeptSlices<'_, I::IntoIter>
where
    I: IntoIterator<Item = Span>,
{
    KeptSlices {
        text,
        spans: spans.into_iter(),
        flags,
    }
}

/// Concatenate the kept parts of `text` into a new string.
pub fn assemble<I>(text: &str, spans: I, flags: CategoryFlags) -> String
where
    I: IntoIterator<Item = Span>,
{
    let mut out = String::with_capacity(text.len());
    for slice in kept_slices(text, spans, flags) {
        out.push_str(slice);
    }
    out
}
