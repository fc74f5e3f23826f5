//! Brace policy behavior: doubling escapes vs. outright rejection.

use fmtkit::{BracePolicy, Error, FormatConfig, Template, args, format, format_with};

const REJECT: FormatConfig = FormatConfig::new().with_brace_policy(BracePolicy::Reject);

#[test_case::test_case("{{", "{"; "open brace")]
#[test_case::test_case("}}", "}"; "close brace")]
#[test_case::test_case("{{}}", "{}"; "brace pair")]
#[test_case::test_case("a{{0}}b", "a{0}b"; "escaped placeholder syntax")]
#[test_case::test_case("{{{{}}}}", "{{}}"; "double escapes")]
fn test_doubling_collapses(template: &str, expected: &str) {
    assert_eq!(format(template, &args![]).unwrap(), expected);
}

#[test]
fn test_escapes_adjacent_to_placeholder() {
    // {{ then {0} then }} : a placeholder wrapped in literal braces.
    let out = format("{{{0}}}", &args!["X"]).unwrap();
    assert_eq!(out, "{X}");
}

#[test]
fn test_escapes_inside_literal_run() {
    let out = format("set {{a, b}} has {0} members", &args![2]).unwrap();
    assert_eq!(out, "set {a, b} has 2 members");
}

#[test]
fn test_brace_free_output_reformats_unchanged() {
    // Formatting resolves all placeholder syntax; brace-free output is a
    // fixed point of repeated formatting.
    let out = format("{0} and {1}", &args!["salt", "pepper"]).unwrap();
    assert_eq!(out, "salt and pepper");
    assert_eq!(format(&out, &args![]).unwrap(), out);
}

#[test]
fn test_placeholders_still_work_under_reject() {
    let out = format_with("{0}-{1}", &args![1, 2], REJECT).unwrap();
    assert_eq!(out, "1-2");
}

#[test]
fn test_reject_policy_refuses_doubled_open() {
    let err = format_with("{{", &args![], REJECT).unwrap_err();
    assert!(matches!(err, Error::MalformedPlaceholder { .. }));
}

#[test]
fn test_reject_policy_refuses_doubled_close() {
    let err = format_with("}}", &args![], REJECT).unwrap_err();
    assert!(matches!(err, Error::UnmatchedClosingBrace { .. }));
}

#[test]
fn test_reject_policy_refuses_bare_close() {
    let err = format_with("a}b", &args![], REJECT).unwrap_err();
    assert!(matches!(err, Error::UnmatchedClosingBrace { .. }));
}

#[test]
fn test_reject_policy_literal_text_passes() {
    assert_eq!(
        format_with("no braces here", &args![], REJECT).unwrap(),
        "no braces here"
    );
}

#[test]
fn test_policy_is_consistent_with_display() {
    // A template parsed under Double prints with its escapes restored,
    // so the printed form parses back to the same template.
    let tmpl = Template::parse("{{x}} = {0}").unwrap();
    assert_eq!(tmpl.to_string(), "{{x}} = {0}");
    assert_eq!(Template::parse(&tmpl.to_string()).unwrap(), tmpl);
}
