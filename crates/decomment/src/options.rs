//! Deletion flags and the engine's option record.

use decomment_core::{Category, LanguageProfile};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Which comment categories to delete.
///
/// One flag per deletable category; `true` means "delete". [`Category::Text`]
/// has no flag and is always kept.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(
    clippy::struct_excessive_bools,
    reason = "one independent switch per comment category"
)]
pub struct CategoryFlags {
    /// Inline block comments.
    pub delimited: bool,
    /// Block comments that start their line.
    pub delimited_lines: bool,
    /// Inline special block comments.
    pub special: bool,
    /// Special block comments that start their line.
    pub special_lines: bool,
    /// Line comments alone on their line.
    pub line: bool,
    /// Line comments after code.
    pub line_end: bool,
}

impl CategoryFlags {
    /// Delete nothing.
    pub const NONE: CategoryFlags = CategoryFlags {
        delimited: false,
        delimited_lines: false,
        special: false,
        special_lines: false,
        line: false,
        line_end: false,
    };

    /// Delete every comment category.
    pub const ALL: CategoryFlags = CategoryFlags {
        delimited: true,
        delimited_lines: true,
        special: true,
        special_lines: true,
        line: true,
        line_end: true,
    };

    /// Flags deleting exactly `category`.
    pub fn only(category: Category) -> Self {
        let mut flags = Self::NONE;
        flags.set(category, true);
        flags
    }

    /// Returns `true` if spans of `category` are deleted.
    #[inline]
    pub const fn removes(self, category: Category) -> bool {
        match category {
            Category::Text => false,
            Category::Delimited => self.delimited,
            Category::DelimitedLines => self.delimited_lines,
            Category::Special => self.special,
            Category::SpecialLines => self.special_lines,
            Category::LineEnd => self.line_end,
            Category::WholeLine => self.line,
        }
    }

    /// Set the flag for `category`. Setting [`Category::Text`] has no effect.
    pub fn set(&mut self, category: Category, remove: bool) {
        let flag = match category {
            Category::Text => return,
            Category::Delimited => &mut self.delimited,
            Category::DelimitedLines => &mut self.delimited_lines,
            Category::Special => &mut self.special,
            Category::SpecialLines => &mut self.special_lines,
            Category::LineEnd => &mut self.line_end,
            Category::WholeLine => &mut self.line,
        };
        *flag = remove;
    }
}

impl Default for CategoryFlags {
    /// Delete ordinary comments, keep special ones.
    fn default() -> Self {
        CategoryFlags {
            delimited: true,
            delimited_lines: true,
            special: false,
            special_lines: false,
            line: true,
            line_end: true,
        }
    }
}

/// Options for a [`Decommenter`](crate::Decommenter).
///
/// Deserializes from an object such as
/// `{"special": true, "language": "css", "aliases": {"scss": "css"}}`.
/// Missing keys take their defaults.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Categories to delete.
    #[serde(flatten)]
    pub flags: CategoryFlags,
    /// Language key; `None` selects the default language.
    pub language: Option<String>,
    /// Extra or replacement language profiles, by name.
    pub types: FxHashMap<String, LanguageProfile>,
    /// Extra or replacement aliases, alias name to profile name.
    pub aliases: FxHashMap<String, String>,
}
