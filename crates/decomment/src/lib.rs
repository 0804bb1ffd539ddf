//! Decomment: remove comments from source text.
//!
//! Classifies comments with [`decomment_core::Tokenizer`], drops the
//! categories selected by [`CategoryFlags`], and reassembles the rest.
//! Strings, template literals and (for brace languages) regex literals are
//! never touched.
//!
//! # Modules
//!
//! - `options`: [`CategoryFlags`] and the [`Options`] record
//! - `registry`: built-in and caller-supplied [`LanguageProfile`]s by name
//! - `filter`: category filter and output assembly
//! - `engine`: [`Decommenter`], the configured entry point
//! - `describe`: span dump for debugging profiles
//!
//! # Example
//!
//! ```
//! use decomment::{remove_comments, CategoryFlags, LanguageProfile};
//!
//! let out = remove_comments(
//!     "/* remove */ console.log(\"/* */\") // Remove",
//!     &LanguageProfile::brace(),
//!     CategoryFlags::default(),
//! );
//! assert_eq!(out, " console.log(\"/* */\")");
//! ```

mod describe;
mod engine;
mod error;
mod filter;
mod options;
mod registry;

pub use decomment_core::{Category, LanguageProfile, ProfileError, Span, Tokenizer};
pub use describe::describe_spans;
pub use engine::Decommenter;
pub use error::ConfigError;
pub use filter::{assemble, kept_slices, KeptSlices};
pub use options::{CategoryFlags, Options};
pub use registry::{LanguageRegistry, DEFAULT_LANGUAGE};

/// Remove the comment categories selected by `flags` from `text`.
///
/// Never fails: malformed input (unterminated comments, strings or regex
/// literals) is consumed to the end of the text.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn remove_comments(text: &str, profile: &LanguageProfile, flags: CategoryFlags) -> String {
    assemble(text, Tokenizer::new(text, profile), flags)
}
