use literate_regex::{compile, compile_with_params, CompilerParams, Indices};

use crate::utils::Checker;

#[test]
fn test_exec_no_groups() {
    let checker = Checker::new("/ a+ /");
    checker.check("baac", &[Some("aa")]);
    checker.check_none("bc");

    let res = checker.exec("baac").unwrap();
    assert_eq!(res.index, 1);
    assert_eq!(res.range(), 1..3);
    assert!(res.captures.is_empty());
    assert_eq!(res.groups, None);
    assert_eq!(res.indices, None);
}

#[test]
fn test_exec_groups() {
    let checker = Checker::new(
        r"
        /
          (a)         # captured
          (?:b)       # not captured
          (?<tag>c)   # named
          (?=d)       # lookahead
        /
        ",
    );
    checker.check("xabcd", &[Some("abc"), Some("a"), Some("c")]);
    checker.check_none("xabce");

    let res = checker.exec("xabcd").unwrap();
    assert_eq!(res.index, 1);
    assert_eq!(
        res.groups,
        Some(vec![("tag".to_owned(), Some("c".to_owned()))])
    );
    assert_eq!(res.group("tag"), Some("c"));
}

#[test]
fn test_exec_non_participating_groups() {
    let checker = Checker::new("/(a)|(b)/");
    checker.check("b", &[Some("b"), None, Some("b")]);
    checker.check("a", &[Some("a"), Some("a"), None]);

    let checker = Checker::new("/(?<x>a)?(?<y>b)/");
    let res = checker.exec("b").unwrap();
    assert_eq!(
        res.groups,
        Some(vec![
            ("x".to_owned(), None),
            ("y".to_owned(), Some("b".to_owned())),
        ])
    );
    assert_eq!(res.group("x"), None);
}

#[test]
fn test_exec_numbering() {
    // The indexes given by the description must be the ones used by the engine.
    let checker = Checker::new("/ (?<a> x ) ( y ) (?: _ )? (?<b> z ) /");
    let desc = checker.pattern.descriptor();
    assert_eq!(desc.capture.group_count, 3);
    assert_eq!(desc.capture.index_of("a"), Some(1));
    assert_eq!(desc.capture.index_of("b"), Some(3));

    let res = checker.exec("xyz").unwrap();
    assert_eq!(
        res.captures,
        vec![
            Some("x".to_owned()),
            Some("y".to_owned()),
            Some("z".to_owned())
        ]
    );
    assert_eq!(res.group("a"), Some("x"));
    assert_eq!(res.group("b"), Some("z"));

    // Nested groups are numbered by their opening parenthesis.
    let checker = Checker::new("/ (?<outer> (?<inner> a ) b ) (c) /");
    checker.check("abc", &[Some("abc"), Some("ab"), Some("a"), Some("c")]);
}

#[test]
fn test_exec_indices() {
    let checker = Checker::new("/ (?<x> b ) (c)? / d");
    let res = checker.exec("abd").unwrap();
    assert_eq!(res.index, 1);
    assert_eq!(
        res.indices,
        Some(Indices {
            matched: 1..2,
            captures: vec![Some(1..2), None],
            groups: Some(vec![("x".to_owned(), Some(1..2))]),
        })
    );

    // Without named groups, there are no named indices.
    let checker = Checker::new("/(b)/d");
    let res = checker.exec("ab").unwrap();
    assert_eq!(
        res.indices,
        Some(Indices {
            matched: 1..2,
            captures: vec![Some(1..2)],
            groups: None,
        })
    );

    // Offsets are in bytes.
    let checker = Checker::new("/(b)/d");
    let res = checker.exec("éb").unwrap();
    assert_eq!(res.index, 2);
    assert_eq!(res.indices.unwrap().captures, vec![Some(2..3)]);
}

#[test]
fn test_exec_flags() {
    let checker = Checker::new("/abc/i");
    checker.check("xABC", &[Some("ABC")]);
    Checker::new("/abc/").check_none("xABC");

    let checker = Checker::new("/^b$/m");
    checker.check("a\nb\nc", &[Some("b")]);
    Checker::new("/^b$/").check_none("a\nb\nc");

    let checker = Checker::new("/a.b/s");
    checker.check("a\nb", &[Some("a\nb")]);
    Checker::new("/a.b/").check_none("a\nb");

    let checker = Checker::new("/é+/u");
    checker.check("aééb", &[Some("éé")]);
    let checker = Checker::new("/é+/v");
    checker.check("aééb", &[Some("éé")]);
}

#[test]
fn test_exec_lookarounds_and_backrefs() {
    let checker = Checker::new(r"/ (?<= \$ ) \d+ /");
    checker.check("cost: $42", &[Some("42")]);
    checker.check_none("cost: 42");

    let checker = Checker::new(r"/ (?<! - ) \b \d+ /");
    checker.check("-3 4", &[Some("4")]);

    let checker = Checker::new(r#"/ (['"]) \w+ \1 /"#);
    checker.check(r#"say "hi" now"#, &[Some(r#""hi""#), Some("\"")]);
    checker.check_none(r#"say "hi' now"#);
}

#[test]
fn test_exec_literate_source() {
    let checker = Checker::new(
        r"
        /
          ^ \# \s* (?<title> [^\#]+ ? ) \s* \#* $   # a markdown title
        / m
        ",
    );
    let res = checker.exec("text\n# Hello world #\nmore").unwrap();
    assert_eq!(res.group("title"), Some("Hello world"));
    assert_eq!(res.matched, "# Hello world #");
}

#[test]
fn test_exec_at() {
    let pattern = compile("/a/").unwrap();
    assert_eq!(pattern.exec_at("aba", 1).unwrap().unwrap().index, 2);
    assert_eq!(pattern.exec_at("aba", 3).unwrap(), None);
    assert_eq!(pattern.exec_at("aba", 4).unwrap(), None);

    // Text before the start is visible to anchors and lookbehinds.
    let pattern = compile("/^a/").unwrap();
    assert_eq!(pattern.exec_at("aa", 1).unwrap(), None);
    let pattern = compile("/(?<=a)b/").unwrap();
    assert_eq!(pattern.exec_at("ab", 1).unwrap().unwrap().index, 1);

    // Not on a char boundary.
    let pattern = compile("/a/").unwrap();
    assert_eq!(pattern.exec_at("éa", 1).unwrap().unwrap().index, 2);
    let pattern = compile("/a/y").unwrap();
    assert_eq!(pattern.exec_at("éa", 1).unwrap(), None);
}

#[test]
fn test_exec_sticky() {
    let pattern = compile("/a/y").unwrap();
    assert_eq!(pattern.exec("ba").unwrap(), None);
    assert_eq!(pattern.exec_at("ba", 1).unwrap().unwrap().index, 1);
    assert!(!pattern.is_match("ba").unwrap());
    assert!(pattern.is_match("ab").unwrap());

    let pattern = compile("/a/").unwrap();
    assert!(pattern.is_match("ba").unwrap());
    assert!(!pattern.is_match("bc").unwrap());
}

#[test]
fn test_backtrack_limit() {
    let haystack = "ab".repeat(30);
    let params = CompilerParams::default().backtrack_limit(Some(100_000));
    let pattern = compile_with_params("/(a|b|ab)*(?=c)/i", &params).unwrap();

    let err = pattern.exec(&haystack).unwrap_err();
    assert!(err.to_string().starts_with("regex execution failed: "));
    assert!(std::error::Error::source(&err).is_some());
    assert!(pattern.exec_iter(&haystack).next().unwrap().is_err());
}
