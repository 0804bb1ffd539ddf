use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

use super::*;

#[test]
fn defaults_use_js() {
    let engine = Decommenter::new(Options::default()).unwrap();
    assert_eq!(engine.language(), None);
    assert_eq!(engine.delete("a = 1 // x").unwrap(), "a = 1");
}

#[test]
fn configured_language() {
    let engine = Decommenter::new(Options {
        language: Some("html".to_owned()),
        ..Options::default()
    })
    .unwrap();
    assert_eq!(engine.delete("a<!-- b -->c").unwrap(), "ac");
    assert_eq!(engine.delete_as("a/* b */c", "css").unwrap(), "ac");
}

#[test]
fn unknown_configured_language_fails_early() {
    let err = Decommenter::new(Options {
        language: Some("cobol".to_owned()),
        ..Options::default()
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "unknown language \"cobol\"");
}

#[test]
fn unknown_language_per_call() {
    let engine = Decommenter::new(Options::default()).unwrap();
    assert!(matches!(
        engine.delete_as("x", "txt"),
        Err(ConfigError::UnknownLanguage { .. })
    ));
}

#[test]
fn custom_profile_through_alias() {
    let mut types = FxHashMap::default();
    types.insert(
        "sh".to_owned(),
        LanguageProfile {
            quote_chars: "\"'".to_owned(),
            line_start: "#".to_owned(),
            ..LanguageProfile::default()
        },
    );
    let mut aliases = FxHashMap::default();
    aliases.insert("bash".to_owned(), "sh".to_owned());

    let engine = Decommenter::new(Options {
        types,
        aliases,
        ..Options::default()
    })
    .unwrap();
    assert_eq!(
        engine.delete_as("# setup\necho '#1' # tail\n", "bash").unwrap(),
        "echo '#1'\n"
    );
}

#[test]
fn flags_are_applied() {
    let engine = Decommenter::new(Options {
        flags: CategoryFlags::ALL,
        ..Options::default()
    })
    .unwrap();
    assert_eq!(engine.flags(), CategoryFlags::ALL);
    assert_eq!(engine.delete("/*! keep? */\nx").unwrap(), "x");
}

#[test]
fn describe_uses_profile() {
    let engine = Decommenter::new(Options::default()).unwrap();
    assert_eq!(
        engine.describe("a<!--b-->", Some("html")).unwrap(),
        "Span@0 (Text) = \"a\"\nSpan@1 (Delimited) = \"<!--b-->\"\n"
    );
}

#[test]
fn shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Decommenter>();
}

#[test]
fn json_profile_keeps_template_literals_multiline() {
    let options: Options = serde_json::from_str(
        r#"{
            "language": "mjs",
            "types": { "mjs": {
                "quoteChars": "\"'`",
                "startDelimited": "/*",
                "startDelimitedSpecial": "/*!",
                "endDelimited": "*/",
                "startLine": "//",
                "regex": true
            } }
        }"#,
    )
    .unwrap();
    let engine = Decommenter::new(options).unwrap();

    let text = "const t = `line one\n// not a comment\n`;\n";
    assert_eq!(engine.delete(text).unwrap(), text);
    assert_eq!(engine.delete("x // c\n").unwrap(), "x\n");
}
