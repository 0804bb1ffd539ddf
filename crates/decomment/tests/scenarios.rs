#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end comment removal on small inputs and the `script.js` fixture.

use decomment::{remove_comments, CategoryFlags, Decommenter, LanguageProfile, Options};
use pretty_assertions::assert_eq;

const HAS_EVERYTHING: &str = "/** Foo */
function add(x, y) /* inline */{ return x + y }

// Another function
function subtract(x, y) { return x - y }
";

const SCRIPT: &str = include_str!("fixtures/script.js");

fn js(text: &str, flags: CategoryFlags) -> String {
    remove_comments(text, &LanguageProfile::brace(), flags)
}

// === Single Categories ===

#[test]
fn remove_delimited_lines_only() {
    let flags = CategoryFlags {
        delimited_lines: true,
        ..CategoryFlags::NONE
    };
    assert_eq!(
        js(HAS_EVERYTHING, flags),
        "function add(x, y) /* inline */{ return x + y }

// Another function
function subtract(x, y) { return x - y }
"
    );
}

#[test]
fn remove_delimited_inline_only() {
    let flags = CategoryFlags {
        delimited: true,
        ..CategoryFlags::NONE
    };
    assert_eq!(
        js(HAS_EVERYTHING, flags),
        "/** Foo */
function add(x, y) { return x + y }

// Another function
function subtract(x, y) { return x - y }
"
    );
}

// === Quotes and Regex Literals ===

#[test]
fn comments_inside_strings_survive() {
    assert_eq!(
        js(
            r#"/* remove */ console.log("/* */") // Remove"#,
            CategoryFlags::default()
        ),
        r#" console.log("/* */")"#
    );
}

#[test]
fn regex_with_character_class_survives() {
    assert_eq!(
        js(
            r#"/* remove */ const re = /(["']+)/g // Remove"#,
            CategoryFlags::default()
        ),
        r#" const re = /(["']+)/g"#
    );
}

#[test]
fn regex_after_logical_not() {
    assert_eq!(
        js(
            r"if (!/\/search_queries\//i.test(window.location.href)) return false // Comment",
            CategoryFlags::default()
        ),
        r"if (!/\/search_queries\//i.test(window.location.href)) return false"
    );
}

#[test]
fn regex_after_return() {
    assert_eq!(
        js("return /[abc]/.text(s) // Comment", CategoryFlags::default()),
        "return /[abc]/.text(s)"
    );
}

#[test]
fn closing_tag_is_not_a_regex() {
    assert_eq!(
        js("<b>{x}</b>; // close", CategoryFlags::default()),
        "<b>{x}</b>;"
    );
}

// === Whitespace Handling ===

#[test]
fn trailing_whitespace_is_kept() {
    assert_eq!(js("foo   \nbar", CategoryFlags::ALL), "foo   \nbar");
    assert_eq!(js("foo   ", CategoryFlags::ALL), "foo   ");
}

#[test]
fn line_endings_are_preserved() {
    assert_eq!(
        js("a // x\r\nb // y\rc // z\n", CategoryFlags::default()),
        "a\r\nb\rc\n"
    );
    assert_eq!(
        js("a\r\n// x\r\nb\r// y\rc", CategoryFlags::default()),
        "a\r\nb\rc"
    );
}

// === Fixture ===

#[test]
fn fixture_whole_line_and_special_lines() {
    let flags = CategoryFlags {
        line: true,
        special_lines: true,
        ..CategoryFlags::NONE
    };
    assert_eq!(
        js(SCRIPT, flags),
        include_str!("fixtures/script.line_special_lines.expected.js")
    );
}

#[test]
fn fixture_default_flags() {
    assert_eq!(
        js(SCRIPT, CategoryFlags::default()),
        "/*!
 * This is important work we do, Horatio.
 */

function f1 (a, b) {
  return a + b
}

function f2 (hack) {
  return hack.replace('a', 'b')
}

let foo = 10
/*!*/

 foo = 20

module.exports = { f1, f2, foo }
"
    );
}

#[test]
fn fixture_all_flags() {
    assert_eq!(
        js(SCRIPT, CategoryFlags::ALL),
        "
function f1 (a, b) {
  return a + b
}

function f2 (hack) {
  return hack.replace('a', 'b')
}

let foo = 10

 foo = 20

module.exports = { f1, f2, foo }
"
    );
}

#[test]
fn fixture_no_flags_is_identity() {
    assert_eq!(js(SCRIPT, CategoryFlags::NONE), SCRIPT);
}

// === Engine ===

#[test]
fn engine_from_json_options() {
    let options: Options =
        serde_json::from_str(r#"{ "line": true, "specialLines": true, "delimited": false, "delimitedLines": false, "lineEnd": false }"#)
            .unwrap();
    let engine = Decommenter::new(options).unwrap();
    assert_eq!(
        engine.delete_as(SCRIPT, "ts").unwrap(),
        include_str!("fixtures/script.line_special_lines.expected.js")
    );
}

#[test]
fn engine_css_and_html() {
    let engine = Decommenter::new(Options::default()).unwrap();
    assert_eq!(
        engine
            .delete_as("a { b: \"/* no */\" } /* yes */\n/*! keep */\n", "less")
            .unwrap(),
        "a { b: \"/* no */\" } \n/*! keep */\n"
    );
    assert_eq!(
        engine
            .delete_as("<p>\n  <!-- gone -->\n  <!--! kept -->\n</p>\n", "htm")
            .unwrap(),
        "<p>\n  <!--! kept -->\n</p>\n"
    );
}
