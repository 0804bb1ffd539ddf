//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use decomment::{Category, CategoryFlags};

#[derive(Debug, Parser)]
#[command(author, version, about = "Remove comments from source files", long_about = None)]
pub struct Args {
    /// Files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Language for every file (default: from the file extension)
    #[arg(short, long)]
    pub language: Option<String>,

    /// JSON options file: flags, language, types and aliases
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Delete this comment category (repeatable)
    #[arg(long, value_name = "CATEGORY")]
    pub remove: Vec<CategoryArg>,

    /// Keep this comment category (repeatable, applied after --remove)
    #[arg(long, value_name = "CATEGORY")]
    pub keep: Vec<CategoryArg>,

    /// Write results into this directory instead of rewriting the inputs
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Print the span dump of each file instead of writing anything
    #[arg(long)]
    pub show_spans: bool,
}

impl Args {
    /// Apply `--remove` then `--keep` on top of `flags`.
    pub fn apply_flags(&self, flags: &mut CategoryFlags) {
        for arg in &self.remove {
            flags.set(arg.category(), true);
        }
        for arg in &self.keep {
            flags.set(arg.category(), false);
        }
    }
}

/// Comment category as named on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CategoryArg {
    /// Inline block comments
    Delimited,
    /// Block comments on their own lines
    DelimitedLines,
    /// Inline special block comments (`/*!`)
    Special,
    /// Special block comments on their own lines
    SpecialLines,
    /// Line comments on their own line
    Line,
    /// Line comments after code
    LineEnd,
}

impl CategoryArg {
    pub fn category(self) -> Category {
        match self {
            CategoryArg::Delimited => Category::Delimited,
            CategoryArg::DelimitedLines => Category::DelimitedLines,
            CategoryArg::Special => Category::Special,
            CategoryArg::SpecialLines => Category::SpecialLines,
            CategoryArg::Line => Category::WholeLine,
            CategoryArg::LineEnd => Category::LineEnd,
        }
    }
}
