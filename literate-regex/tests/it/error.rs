use literate_regex::compiler::CompileErrorKind;
use literate_regex::{compile, compile_with_params, CompilerParams};

use crate::utils::{check_err, Checker};

#[test]
fn test_invalid_sources() {
    // Those sources are not inlined here, so that they can be used to check how is the "pretty"
    // display of errors. The first line of each file is a comment with the expected prefix of
    // the description of the error.
    for file in glob::glob("tests/assets/invalid_sources/**/*.lre").unwrap() {
        let file = file.unwrap();

        let contents = std::fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("cannot read file {file:?}: {e}"));
        let expected = contents
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("# "))
            .unwrap_or_else(|| panic!("missing expected error in {file:?}"));

        println!("checking file {file:?}");
        check_err(&contents, expected);
    }
}

#[test]
fn test_literal_errors() {
    check_err("a/", "mem:1:1: error: Expected regex literal to start with '/'");
    check_err("", "mem:1:1: error: Expected regex literal to start with '/'");
    check_err("  # only a comment", "mem:1:19: error: Expected regex literal");
    check_err("/abc", "mem:1:1: error: Invalid regex literal: missing trailing '/'");
    check_err(
        "  /abc # no closing /",
        "mem:1:3: error: Invalid regex literal: missing trailing '/'",
    );
}

#[test]
fn test_flags_errors() {
    check_err("/a/gg", "mem:1:5: error: regex flag `g` appears multiple times");
    check_err(
        "/\n  a\n/ g g",
        "mem:3:5: error: regex flag `g` appears multiple times",
    );
    check_err("/a/x", "mem:1:4: error: unknown regex flag `x`");
    check_err(
        "/a/dgimsuvyd",
        "mem:1:4: error: too many regex flags: 9, at most 8 are allowed",
    );
    check_err(
        "/a/uv",
        "mem:1:4: error: regex flags `u` and `v` cannot be used together",
    );
}

#[test]
fn test_group_errors() {
    check_err("/(?<>a)/", "mem:1:3: error: capture group name cannot be empty");
    check_err(
        "/(?<a>x)(?<a>y)/",
        "mem:1:9: error: duplicate capture group name `a`",
    );
    check_err(
        "/[(]a/",
        "mem:1:2: error: pattern has 0 capturing groups, but 1 were expected",
    );
    // Inline modifiers are counted as capturing groups by the analysis.
    check_err(
        "/(?i:a)b/",
        "mem:1:2: error: pattern has 0 capturing groups, but 1 were expected",
    );
}

#[test]
fn test_pattern_syntax_errors() {
    check_err("/ a ( /", "mem:1:3: error: invalid regex pattern: ");
    check_err("/ a{2,1} /g", "mem:1:3: error: invalid regex pattern: ");

    let err = compile("/a(/").unwrap_err();
    assert!(matches!(
        err.kind(),
        CompileErrorKind::PatternSyntax { span, .. } if *span == (1..3)
    ));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_error_kinds() {
    let err = compile("/a/gg").unwrap_err();
    assert!(matches!(err.kind(), CompileErrorKind::Parse(_)));
    assert_eq!(err.to_diagnostic().message, "regex flag `g` appears multiple times");

    let err = compile("/a/vu").unwrap_err();
    assert!(matches!(
        err.kind(),
        CompileErrorKind::IncompatibleFlags { span } if *span == (3..5)
    ));
    assert!(std::error::Error::source(&err).is_none());

    let err = compile("/[(]a/").unwrap_err();
    assert!(matches!(
        err.kind(),
        CompileErrorKind::GroupCountMismatch { expected: 1, found: 0, .. }
    ));
}

#[test]
fn test_group_count_check_disabled() {
    let checker = Checker::new_with_params(
        "/[(]a/",
        &CompilerParams::default().check_group_count(false),
    );
    checker.check("b(a", &[Some("(a"), None]);

    assert!(compile_with_params("/(?<>a)/", &CompilerParams::default().check_group_count(false))
        .is_err());
}
