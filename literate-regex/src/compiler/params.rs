//! Compilation parameters

/// Parameters used during compilation.
#[derive(Clone, Debug)]
pub struct CompilerParams {
    /// Maximum number of backtracking steps of the engine.
    pub(crate) backtrack_limit: Option<usize>,

    /// Compare the number of captures of the engine with the analyzed one.
    pub(crate) check_group_count: bool,
}

impl Default for CompilerParams {
    fn default() -> Self {
        Self {
            backtrack_limit: None,
            check_group_count: true,
        }
    }
}

impl CompilerParams {
    /// Maximum number of backtracking steps of the engine, on a single search.
    ///
    /// Patterns using backreferences or lookarounds are run by a backtracking engine. A
    /// search exceeding this limit fails with an [`crate::ExecError`].
    ///
    /// Default value is `None`, which uses the limit of the engine (one million steps).
    #[must_use]
    pub fn backtrack_limit(mut self, backtrack_limit: Option<usize>) -> Self {
        self.backtrack_limit = backtrack_limit;
        self
    }

    /// Check that the engine sees as many capturing groups as the group analysis.
    ///
    /// The analysis does not handle character classes, so a parenthesis inside a class, as in
    /// `/[(]/`, is counted as a group. When this check is enabled, such patterns are rejected
    /// at compilation instead of producing matches with a wrong shape.
    ///
    /// When disabled, the content of a class is always literal for the engine: `/[(?<a>x]/`
    /// matches one of `(`, `?`, `<`, `a`, `>` or `x`, while its match still reports the group
    /// `a`, which never participates.
    ///
    /// Default value is `true`.
    #[must_use]
    pub fn check_group_count(mut self, check_group_count: bool) -> Self {
        self.check_group_count = check_group_count;
        self
    }
}
