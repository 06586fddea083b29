use literate_regex::{compile, ReplaceArgs};

#[test]
fn test_replace_template() {
    let pattern = compile(r"/ (?<year> \d{4} ) - (?<month> \d{2} ) /").unwrap();
    let haystack = "from 2024-01 to 2025-02";
    assert_eq!(
        pattern.replace(haystack, "$<month>/$<year>").unwrap(),
        "from 01/2024 to 2025-02"
    );
    assert_eq!(
        pattern.replace_all(haystack, "$2/$1").unwrap(),
        "from 01/2024 to 02/2025"
    );
    assert_eq!(
        pattern.replace_all(haystack, "[$&|$$|$3]").unwrap(),
        "from [2024-01|$|$3] to [2025-02|$|$3]"
    );

    let pattern = compile(r"/ \d+ / g").unwrap();
    assert_eq!(pattern.replace("a1b22c", "<$`>").unwrap(), "a<a>b<a1b>c");
    assert_eq!(pattern.replace("a1b22c", String::from("<$'>")).unwrap(), "a<b22c>b<c>c");
}

#[test]
fn test_replace_flags() {
    let pattern = compile("/a/").unwrap();
    assert_eq!(pattern.replace("aab", "x").unwrap(), "xab");
    assert_eq!(pattern.replace_all("aab", "x").unwrap(), "xxb");
    assert_eq!(pattern.replace("bcd", "x").unwrap(), "bcd");

    let pattern = compile("/a/g").unwrap();
    assert_eq!(pattern.replace("aba", "x").unwrap(), "xbx");

    let pattern = compile("/a/y").unwrap();
    assert_eq!(pattern.replace("baa", "x").unwrap(), "baa");
    assert_eq!(pattern.replace("aab", "x").unwrap(), "xab");

    let pattern = compile("/a/gy").unwrap();
    assert_eq!(pattern.replace("aaba", "x").unwrap(), "xxba");
}

#[test]
fn test_replace_empty_matches() {
    let pattern = compile("/ a* /g").unwrap();
    assert_eq!(pattern.replace("baac", "-").unwrap(), "-b--c-");

    let pattern = compile("/ (?: ) /g").unwrap();
    assert_eq!(pattern.replace("é€", "|").unwrap(), "|é|€|");
}

#[test]
fn test_replace_callback_without_named_groups() {
    let pattern = compile("/ (a) (?: x )? (b)? /g").unwrap();

    let mut calls = Vec::new();
    let res = pattern
        .replace("zab-a", |args: &ReplaceArgs<'_>| {
            calls.push((
                args.matched.to_owned(),
                args.captures.to_vec(),
                args.offset,
                args.input.to_owned(),
                args.groups.is_some(),
            ));
            "X"
        })
        .unwrap();

    assert_eq!(res, "zX-X");
    assert_eq!(
        calls,
        vec![
            (
                "ab".to_owned(),
                vec![Some("a".to_owned()), Some("b".to_owned())],
                1,
                "zab-a".to_owned(),
                false
            ),
            (
                "a".to_owned(),
                vec![Some("a".to_owned()), None],
                4,
                "zab-a".to_owned(),
                false
            ),
        ]
    );
}

#[test]
fn test_replace_callback_with_named_groups() {
    let pattern = compile(
        r"
        /
          (?<key> \w+ )
          =
          (?<value> \w+ )?   # may be empty
          ;
        / g
        ",
    )
    .unwrap();

    let mut calls = Vec::new();
    let res = pattern
        .replace("a=1;b=;", |args: &ReplaceArgs<'_>| {
            calls.push((args.captures.len(), args.groups.map(<[_]>::to_vec)));
            format!("{}:{};", args.offset, args.captures[0].as_deref().unwrap_or(""))
        })
        .unwrap();

    assert_eq!(res, "0:a;4:b;");
    assert_eq!(
        calls,
        vec![
            (
                2,
                Some(vec![
                    ("key".to_owned(), Some("a".to_owned())),
                    ("value".to_owned(), Some("1".to_owned())),
                ])
            ),
            (
                2,
                Some(vec![
                    ("key".to_owned(), Some("b".to_owned())),
                    ("value".to_owned(), None),
                ])
            ),
        ]
    );
}
