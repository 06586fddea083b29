use literate_regex::{compile, compile_with_params, CompiledPattern, CompilerParams, ExecResult};

pub struct Checker {
    pub pattern: CompiledPattern,
}

impl Checker {
    #[track_caller]
    pub fn new(src: &str) -> Self {
        Self::new_with_params(src, &CompilerParams::default())
    }

    #[track_caller]
    pub fn new_with_params(src: &str, params: &CompilerParams) -> Self {
        match compile_with_params(src, params) {
            Ok(pattern) => Self { pattern },
            Err(err) => panic!("compilation failed: {err}"),
        }
    }

    #[track_caller]
    pub fn exec(&self, haystack: &str) -> Option<ExecResult> {
        self.pattern.exec(haystack).unwrap()
    }

    /// Check the result of exec: the matched text followed by the text of each capture.
    #[track_caller]
    pub fn check(&self, haystack: &str, expected: &[Option<&str>]) {
        let Some(res) = self.exec(haystack) else {
            panic!("no match on haystack {haystack:?}");
        };
        let res = std::iter::once(Some(res.matched.as_str()))
            .chain(res.captures.iter().map(|c| c.as_deref()))
            .collect::<Vec<_>>();
        assert_eq!(res, expected, "haystack: {haystack:?}");
    }

    /// Check that exec does not find a match.
    #[track_caller]
    pub fn check_none(&self, haystack: &str) {
        let res = self.exec(haystack);
        assert!(res.is_none(), "unexpected match {res:?} on haystack {haystack:?}");
    }

    /// Check the text of every match returned by the iterator.
    #[track_caller]
    pub fn check_all(&self, haystack: &str, expected: &[&str]) {
        let res: Vec<_> = self
            .pattern
            .exec_iter(haystack)
            .map(|res| res.unwrap().matched)
            .collect();
        assert_eq!(res, expected, "haystack: {haystack:?}");
    }

    /// Check the start offset of every match returned by the iterator.
    #[track_caller]
    pub fn check_all_index(&self, haystack: &str, expected: &[usize]) {
        let res: Vec<_> = self
            .pattern
            .exec_iter(haystack)
            .map(|res| res.unwrap().index)
            .collect();
        assert_eq!(res, expected, "haystack: {haystack:?}");
    }
}

/// Check that the compilation of a source fails, and that its description starts with
/// the expected prefix.
#[track_caller]
pub fn check_err(src: &str, expected_prefix: &str) {
    match compile(src) {
        Ok(_) => panic!("compilation should have failed"),
        Err(err) => {
            let desc = err.to_string();
            assert!(
                desc.starts_with(expected_prefix),
                "error: {desc}\nexpected prefix: {expected_prefix}"
            );
        }
    }
}
