#![allow(unused)]
//! Argument-surface integration harness.
//!
//! # What this covers
//!
//! - **Dynamic lists**: `FieldInput::from_args` over flat key/value lists,
//!   including the error taxonomy for malformed lists and the handling of
//!   unknown and repeated keys.
//! - **Macro**: `note_pattern!` produces the same fragment as a direct
//!   `Compiler::compile` call.
//! - **Keyword values from JSON**: string and list encodings of keyword
//!   expressions deserialise into the expected trees.
//! - **Date helpers**: `identifier_date` constrains the identifier to one day.
//!
//! # What this does NOT cover
//!
//! - Rendered regex text (see render_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test args_harness
//! ```

mod common;
use common::*;

use chrono::NaiveDate;
use notename::{
    note_pattern, Arg, Component, Error, FieldInput, FieldName, FileTypes, KeywordSpec,
    PatternFragment,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Dynamic argument lists
// ---------------------------------------------------------------------------

#[test]
fn full_argument_list_matches_builder() {
    init_tracing();
    let input = FieldInput::from_args([
        Arg::key(":identifier"),
        Arg::text("2024"),
        Arg::key(":title"),
        Arg::Pattern(PatternFragment::literal("plan")),
        Arg::key(":keywords"),
        Arg::Keywords(KeywordSpec::or(["agenda", "inbox"])),
        Arg::key(":file-type"),
        Arg::Tags(vec!["org".into(), "text".into()]),
    ])
    .unwrap();

    assert_eq!(
        input,
        FieldInput::new()
            .identifier("2024")
            .title(PatternFragment::literal("plan"))
            .keywords(KeywordSpec::or(["agenda", "inbox"]))
            .file_type(["org", "text"])
    );
}

#[test]
fn empty_argument_list_is_unconstrained() {
    let input = FieldInput::from_args(Vec::<Arg>::new()).unwrap();
    assert!(input.is_empty());
    assert!(compiler().compile(&input).unwrap().is_identity());
}

#[rstest]
#[case::one(vec![Arg::key("title")], 1)]
#[case::three(vec![Arg::key("title"), Arg::text("a"), Arg::key("keywords")], 3)]
fn odd_lists_are_malformed(#[case] args: Vec<Arg>, #[case] len: usize) {
    let err = FieldInput::from_args(args).unwrap_err();
    assert!(matches!(err, Error::MalformedCall { len: l } if l == len));
}

/// Parity is checked before any key, so a bad key in an odd list still
/// reports the length.
#[test]
fn parity_is_checked_first() {
    let err = FieldInput::from_args([Arg::text("x"), Arg::text("y"), Arg::text("z")])
        .unwrap_err();
    assert!(matches!(err, Error::MalformedCall { len: 3 }));
}

#[test]
fn value_in_key_position_reports_its_index() {
    let err = FieldInput::from_args([
        Arg::key("title"),
        Arg::text("plan"),
        Arg::text("keywords"),
        Arg::text("work"),
    ])
    .unwrap_err();
    assert!(matches!(err, Error::ExpectedField { position: 2 }));
}

#[test]
fn directory_and_unknown_keys_are_ignored() {
    let input = FieldInput::from_args([
        Arg::key(":directory"),
        Arg::text("~/notes"),
        Arg::key(":colour"),
        Arg::text("blue"),
        Arg::key(":keywords"),
        Arg::text("work"),
    ])
    .unwrap();
    assert_eq!(input, FieldInput::new().keywords("work"));
}

#[test]
fn repeated_key_keeps_first_value() {
    let input = FieldInput::from_args([
        Arg::key("title"),
        Arg::text("first"),
        Arg::key("title"),
        Arg::text("second"),
    ])
    .unwrap();
    assert_eq!(input.title, Some(Component::Text("first".into())));
}

#[rstest]
#[case(FieldName::Identifier, Arg::Pattern(PatternFragment::literal("x")))]
#[case(FieldName::Signature, Arg::Tags(vec!["a".into()]))]
#[case(FieldName::Title, Arg::Keywords(KeywordSpec::literal("a")))]
#[case(FieldName::Keywords, Arg::Tags(vec!["a".into()]))]
#[case(FieldName::FileType, Arg::Pattern(PatternFragment::literal("x")))]
fn wrong_value_shape_names_the_field(#[case] field: FieldName, #[case] value: Arg) {
    let err = FieldInput::from_args([Arg::key(field.as_str()), value]).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { field: f, .. } if f == field));
}

#[test]
fn text_values_widen_to_field_shapes() {
    let input = FieldInput::from_args([
        Arg::key("keywords"),
        Arg::text("work"),
        Arg::key("file-type"),
        Arg::text("org"),
    ])
    .unwrap();
    assert_eq!(input.keywords, Some(KeywordSpec::literal("work")));
    assert_eq!(input.file_type, Some(FileTypes(vec!["org".into()])));
}

#[test]
fn argument_list_compiles_like_builder() {
    let c = compiler();
    let from_args = FieldInput::from_args([
        Arg::key("signature"),
        Arg::text("1a"),
        Arg::key("keywords"),
        Arg::Keywords(KeywordSpec::and(["work", "review"])),
    ])
    .unwrap();
    let built = FieldInput::new()
        .signature("1a")
        .keywords(["work", "review"]);
    assert_eq!(c.compile(&from_args).unwrap(), c.compile(&built).unwrap());
}

// ---------------------------------------------------------------------------
// Macro
// ---------------------------------------------------------------------------

#[test]
fn macro_matches_direct_compile() {
    let c = compiler();
    let via_macro = note_pattern!(
        c,
        identifier = "20240115",
        title = "Weekly Review",
        keywords = KeywordSpec::or(["review", "journal"]),
        file_type = ["org", "markdown-yaml"],
    )
    .unwrap();
    let direct = c
        .compile(
            &FieldInput::new()
                .identifier("20240115")
                .title("Weekly Review")
                .keywords(KeywordSpec::or(["review", "journal"]))
                .file_type(["org", "markdown-yaml"]),
        )
        .unwrap();
    assert_eq!(via_macro, direct);
}

#[test]
fn macro_propagates_errors() {
    let c = compiler();
    let err = note_pattern!(c, file_type = "docx").unwrap_err();
    assert!(err.is_unresolved_reference());
}

// ---------------------------------------------------------------------------
// Keyword values from JSON
// ---------------------------------------------------------------------------

#[rstest]
#[case::string(r#""work""#, KeywordSpec::literal("work"))]
#[case::plain_list(r#"["work", "review"]"#, KeywordSpec::and(["work", "review"]))]
#[case::or(r#"["or", "agenda", "inbox"]"#, KeywordSpec::or(["agenda", "inbox"]))]
#[case::nested(
    r#"["or", "agenda", ["and", "project", "inprogress"]]"#,
    KeywordSpec::Or(vec![
        KeywordSpec::literal("agenda"),
        KeywordSpec::and(["project", "inprogress"]),
    ])
)]
fn keyword_json(#[case] json: &str, #[case] expected: KeywordSpec) {
    let spec: KeywordSpec = serde_json::from_str(json).unwrap();
    assert_eq!(spec, expected);
}

#[test]
fn keyword_json_rejects_numbers() {
    assert!(serde_json::from_str::<KeywordSpec>("[\"or\", 3]").is_err());
}

#[test]
fn json_and_text_forms_agree() {
    let from_json: KeywordSpec =
        serde_json::from_str(r#"["or", "agenda", ["and", "project", "inprogress"]]"#).unwrap();
    let from_text = KeywordSpec::parse("(or agenda (and project inprogress))").unwrap();
    assert_eq!(from_json, from_text);
}

// ---------------------------------------------------------------------------
// Date helpers
// ---------------------------------------------------------------------------

#[test]
fn identifier_date_selects_one_day() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let re = compiler()
        .compile_regex(&FieldInput::new().identifier_date(day))
        .unwrap();
    assert_eq!(
        matching(&re, CORPUS),
        vec![
            "20240115T090500--weekly-review__review_work.org",
            "20240115T101500==1a--reading-list__books.md",
            "20240115T090501--trusty-tools__trusty.org",
        ]
    );
}

#[test]
fn full_identifier_from_datetime_is_exact() {
    let at = NaiveDate::from_ymd_opt(2024, 2, 3)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();
    let id = notename::identifier::from_datetime(&at);
    let re = compiler()
        .compile_regex(&FieldInput::new().identifier(id))
        .unwrap();
    assert_eq!(matching(&re, CORPUS), vec!["20240203T140000==2b__inbox.org"]);
}
