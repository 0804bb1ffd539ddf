#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property tests for comment removal.
//!
//! - coverage: keeping everything reproduces the input
//! - quote and regex opacity: literals survive untouched
//! - idempotence: a second pass over fully decommented code is a no-op
//! - flag independence: each flag removes exactly its own spans

use decomment::{remove_comments, Category, CategoryFlags, LanguageProfile, Tokenizer};
use proptest::prelude::*;

/// Source built from whole tokens, so every comment is well formed.
fn brace_source() -> impl Strategy<Value = String> {
    let atom = prop_oneof![
        Just("code"),
        Just("x = 1;"),
        Just(" "),
        Just("\t"),
        Just("\n"),
        Just("\r\n"),
        Just("// line"),
        Just("/* block */"),
        Just("/*! special */"),
        Just("/* multi\n line */"),
        Just("\"str // not\""),
        Just("'it''s'"),
        Just("`tpl\n/* not */`"),
        Just("re = /[/*]\\//g;"),
    ];
    prop::collection::vec(atom, 0..24).prop_map(|atoms| atoms.concat())
}

fn arbitrary_flags() -> impl Strategy<Value = CategoryFlags> {
    any::<[bool; 6]>().prop_map(|f| CategoryFlags {
        delimited: f[0],
        delimited_lines: f[1],
        special: f[2],
        special_lines: f[3],
        line: f[4],
        line_end: f[5],
    })
}

proptest! {
    #[test]
    fn keeping_everything_is_identity(text in "\\PC{0,80}") {
        let profile = LanguageProfile::brace();
        prop_assert_eq!(remove_comments(&text, &profile, CategoryFlags::NONE), text);
    }

    #[test]
    fn output_length_matches_kept_spans(text in brace_source(), flags in arbitrary_flags()) {
        let profile = LanguageProfile::brace();
        let kept: usize = Tokenizer::new(&text, &profile)
            .filter(|span| !flags.removes(span.category))
            .map(|span| span.len())
            .sum();
        prop_assert_eq!(remove_comments(&text, &profile, flags).len(), kept);
    }

    #[test]
    fn string_literals_are_opaque(
        prefix in "[a-z =(]{0,8}",
        body in "[a-z /*!#<>-]{0,24}",
    ) {
        let text = format!("{prefix}\"{body}\"");
        let out = remove_comments(&text, &LanguageProfile::brace(), CategoryFlags::ALL);
        let literal = format!("\"{body}\"");
        prop_assert!(out.contains(&literal), "{:?} lost {:?}", out, literal);
    }

    #[test]
    fn regex_literals_are_opaque(body in "[a-z\"' ]([a-z\"' *]|\\[[a-z/*]{0,4}\\]){0,12}") {
        let text = format!("x = /{body}/g; // tail");
        let out = remove_comments(&text, &LanguageProfile::brace(), CategoryFlags::ALL);
        prop_assert_eq!(out, format!("x = /{body}/g;"));
    }

    #[test]
    fn decommenting_twice_changes_nothing(text in brace_source()) {
        let profile = LanguageProfile::brace();
        let once = remove_comments(&text, &profile, CategoryFlags::ALL);
        let twice = remove_comments(&once, &profile, CategoryFlags::ALL);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn each_flag_removes_only_its_category(text in brace_source()) {
        let profile = LanguageProfile::brace();
        for category in Category::ALL {
            let expected: usize = Tokenizer::new(&text, &profile)
                .filter(|span| span.category != category || !category.is_comment())
                .map(|span| span.len())
                .sum();
            let out = remove_comments(&text, &profile, CategoryFlags::only(category));
            prop_assert_eq!(out.len(), expected, "category {:?}", category);
        }
    }
}
