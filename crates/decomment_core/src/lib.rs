//! Decomment core: language-agnostic comment tokenizer.
//!
//! This crate splits source text into a contiguous sequence of classified
//! [`Span`]s. It knows nothing about which comments to remove; that decision
//! and the reassembly of kept text live in the `decomment` crate.
//!
//! # Architecture
//!
//! - [`Cursor`]: sentinel-terminated byte cursor over borrowed text
//! - [`LanguageProfile`]: comment, quote and regex syntax of one language
//! - [`CharClassTable`]: per-profile byte classification
//! - [`RegexStarts`]: heuristic pre-pass finding regex literal starts
//! - [`Tokenizer`]: the span iterator
//!
//! # Example
//!
//! ```
//! use decomment_core::{Category, LanguageProfile, Tokenizer};
//!
//! let profile = LanguageProfile::brace();
//! let spans: Vec<_> = Tokenizer::new("x = 1 // one", &profile).collect();
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[1].category, Category::LineEnd);
//! ```

mod category;
mod cursor;
mod profile;
mod regex_index;
mod span;
mod tokenizer;

pub use category::{Category, CharClass, CharClassTable};
pub use cursor::{Cursor, SENTINEL};
pub use profile::{LanguageProfile, ProfileError};
pub use regex_index::RegexStarts;
pub use span::Span;
pub use tokenizer::Tokenizer;

/// Compile-time assertion that a type has a specific size.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

#[cfg(target_pointer_width = "64")]
static_assert_size!(Span, 24);
static_assert_size!(Category, 1);
