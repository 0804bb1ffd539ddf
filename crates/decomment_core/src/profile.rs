//! Language profiles: the comment, quote and regex syntax of one language.

use std::fmt;

/// Comment syntax of one target language.
///
/// Empty marker strings mean the language has no such comment form. The
/// built-in profiles are available as [`LanguageProfile::brace`],
/// [`LanguageProfile::stylesheet`] and [`LanguageProfile::markup`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct LanguageProfile {
    /// Characters that open (and close) a quoted literal.
    pub quote_chars: String,
    /// Quote characters whose literals may span lines. Literals opened by
    /// the other quote characters end at the next newline.
    ///
    /// Defaults to the back-tick when a deserialized profile omits it.
    #[cfg_attr(feature = "serde", serde(default = "default_multiline_quote_chars"))]
    pub multiline_quote_chars: String,
    /// Opens a block comment, e.g. `/*`.
    #[cfg_attr(feature = "serde", serde(rename = "startDelimited"))]
    pub block_start: String,
    /// Opens a special block comment, e.g. `/*!`. Extends `block_start`.
    #[cfg_attr(feature = "serde", serde(rename = "startDelimitedSpecial"))]
    pub block_start_special: String,
    /// Closes both block comment forms, e.g. `*/`.
    #[cfg_attr(feature = "serde", serde(rename = "endDelimited"))]
    pub block_end: String,
    /// Opens a line comment, e.g. `//`.
    #[cfg_attr(feature = "serde", serde(rename = "startLine"))]
    pub line_start: String,
    /// Whether `/.../flags` regex literals exist and must be skipped.
    #[cfg_attr(feature = "serde", serde(rename = "regex"))]
    pub regex_literals: bool,
}

impl LanguageProfile {
    /// Brace-language profile: JavaScript and relatives.
    pub fn brace() -> Self {
        LanguageProfile {
            quote_chars: "\"'`".to_owned(),
            multiline_quote_chars: "`".to_owned(),
            block_start: "/*".to_owned(),
            block_start_special: "/*!".to_owned(),
            block_end: "*/".to_owned(),
            line_start: "//".to_owned(),
            regex_literals: true,
        }
    }

    /// Stylesheet profile: block comments and double-quoted strings only.
    pub fn stylesheet() -> Self {
        LanguageProfile {
            quote_chars: "\"".to_owned(),
            multiline_quote_chars: String::new(),
            block_start: "/*".to_owned(),
            block_start_special: "/*!".to_owned(),
            block_end: "*/".to_owned(),
            line_start: String::new(),
            regex_literals: false,
        }
    }

    /// Markup profile: `<!-- -->` comments, no quoting.
    pub fn markup() -> Self {
        LanguageProfile {
            quote_chars: String::new(),
            multiline_quote_chars: String::new(),
            block_start: "<!--".to_owned(),
            block_start_special: "<!--!".to_owned(),
            block_end: "-->".to_owned(),
            line_start: String::new(),
            regex_literals: false,
        }
    }

    /// Check the marker and quote invariants the tokenizer relies on.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.block_start.is_empty() != self.block_end.is_empty() {
            return Err(ProfileError::UnbalancedBlockMarkers);
        }
        if !self.block_start_special.is_empty()
            && (self.block_start.is_empty()
                || self.block_start_special.len() <= self.block_start.len()
                || !self.block_start_special.starts_with(&self.block_start))
        {
            return Err(ProfileError::SpecialNotExtension {
                special: self.block_start_special.clone(),
                plain: self.block_start.clone(),
            });
        }
        for c in self.quote_chars.chars().chain(self.multiline_quote_chars.chars()) {
            if !c.is_ascii() {
                return Err(ProfileError::NonAsciiQuote(c));
            }
            if matches!(c, ' ' | '\t' | '\r' | '\n' | '\\') {
                return Err(ProfileError::ReservedQuote(c));
            }
        }
        Ok(())
    }

    /// Returns `true` if literals opened by `quote` may span lines.
    #[inline]
    pub fn is_multiline_quote(&self, quote: u8) -> bool {
        self.multiline_quote_chars.as_bytes().contains(&quote)
    }
}

#[cfg(feature = "serde")]
fn default_multiline_quote_chars() -> String {
    "`".to_owned()
}

/// A profile violates an invariant of [`LanguageProfile`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProfileError {
    /// Exactly one of `block_start` and `block_end` is empty.
    UnbalancedBlockMarkers,
    /// The special block marker does not strictly extend the plain one.
    SpecialNotExtension { special: String, plain: String },
    /// Quote characters must be ASCII.
    NonAsciiQuote(char),
    /// Whitespace, newlines and `\` cannot be quote characters.
    ReservedQuote(char),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::UnbalancedBlockMarkers => {
                write!(f, "block comment start and end must both be set or both be empty")
            }
            ProfileError::SpecialNotExtension { special, plain } => write!(
                f,
                "special block marker {special:?} must strictly extend block marker {plain:?}"
            ),
            ProfileError::NonAsciiQuote(c) => {
                write!(f, "quote character {c:?} is not ASCII")
            }
            ProfileError::ReservedQuote(c) => {
                write!(f, "{c:?} cannot be a quote character")
            }
        }
    }
}

impl std::error::Error for ProfileError {}
