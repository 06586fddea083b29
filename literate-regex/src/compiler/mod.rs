//! Compilation of literate regexes into [`CompiledPattern`] objects.
use literate_regex_parser::{describe_source, DescribeParams, Description, Flags, RegexDescriptor};

mod error;
pub use error::{generate_description, CompileError, CompileErrorKind};
mod params;
pub use params::CompilerParams;
mod translate;

use crate::exec::{ExecError, ExecResult, Matches};
use crate::replace::Replacer;

/// A literate regex, compiled into a matcher.
#[derive(Clone, Debug)]
pub struct CompiledPattern {
    /// Description of the source.
    descriptor: RegexDescriptor,

    /// Canonical flags of the source.
    flags: Flags,

    /// The matcher.
    pub(crate) regex: fancy_regex::Regex,
}

/// Compile a literate regex with default parameters.
///
/// # Errors
///
/// See [`compile_with_params`].
pub fn compile(src: &str) -> Result<CompiledPattern, CompileError> {
    compile_with_params(src, &CompilerParams::default())
}

/// Compile a literate regex.
///
/// The source is described (see [`literate_regex_parser::describe`]), then its pattern is
/// translated and handed to the matching engine. The translation keeps the ECMAScript
/// semantics of the pattern: `\d`, `\w` and `\b` only match ASCII chars, `.` does not match
/// any line terminator, and constructs such as `[^]`, `\cJ` or `\0` are accepted.
///
/// - the `i` flag configures the engine, the `m` and `s` flags drive the translation.
/// - the `u` and `v` flags enable `\u{...}` and `\p{...}` escapes, and `v` enables nested
///   classes. They cannot be used together.
/// - the `g`, `y` and `d` flags configure the behavior of [`CompiledPattern::exec_at`] and
///   [`CompiledPattern::exec_iter`].
///
/// # Errors
///
/// Fails if the source cannot be described, if the flags are incompatible, if the engine
/// rejects the pattern, or if the engine does not agree with the group analysis.
pub fn compile_with_params(
    src: &str,
    params: &CompilerParams,
) -> Result<CompiledPattern, CompileError> {
    let Description {
        descriptor,
        pattern_span,
        flags_span,
        ..
    } = describe_source(src, &DescribeParams::default())
        .map_err(|err| CompileError::new(CompileErrorKind::Parse(err), src))?;

    // Flags are always canonical when described strictly.
    let flags = descriptor.flags.canonical().unwrap_or_default();
    if flags.unicode() && flags.unicode_sets() {
        return Err(CompileError::new(
            CompileErrorKind::IncompatibleFlags { span: flags_span },
            src,
        ));
    }

    let engine_pattern = translate::translate(&descriptor.pattern, flags, &descriptor.capture);
    let mut builder = fancy_regex::RegexBuilder::new(&engine_pattern);
    let _r = builder.case_insensitive(flags.ignore_case());
    if let Some(limit) = params.backtrack_limit {
        let _r = builder.backtrack_limit(limit);
    }
    let regex = builder.build().map_err(|error| {
        CompileError::new(
            CompileErrorKind::PatternSyntax {
                error,
                span: pattern_span.clone(),
            },
            src,
        )
    })?;

    // Group 0 is the whole match.
    let found = regex.captures_len().saturating_sub(1);
    if params.check_group_count && found != descriptor.capture.group_count {
        return Err(CompileError::new(
            CompileErrorKind::GroupCountMismatch {
                expected: descriptor.capture.group_count,
                found,
                span: pattern_span,
            },
            src,
        ));
    }

    Ok(CompiledPattern {
        descriptor,
        flags,
        regex,
    })
}

impl CompiledPattern {
    /// Description of the literate regex.
    #[must_use]
    pub fn descriptor(&self) -> &RegexDescriptor {
        &self.descriptor
    }

    /// Canonical flags of the literate regex.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The pattern, as given to the engine.
    #[must_use]
    pub fn as_engine_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Search for a match from the start of the haystack.
    ///
    /// # Errors
    ///
    /// See [`CompiledPattern::exec_at`].
    pub fn exec(&self, haystack: &str) -> Result<Option<ExecResult>, ExecError> {
        self.exec_at(haystack, 0)
    }

    /// Search for a match starting at byte offset `start`.
    ///
    /// With the `y` flag, only a match starting exactly at `start` is returned. Text before
    /// `start` is still visible to lookbehinds and anchors.
    ///
    /// If `start` is greater than the length of the haystack, no match is found. If it is not
    /// on a char boundary, the search starts on the next one, unless the `y` flag is set, in
    /// which case no match is found.
    ///
    /// # Errors
    ///
    /// Fails if the engine fails during the search, for example if the backtrack limit is
    /// exceeded.
    pub fn exec_at(&self, haystack: &str, start: usize) -> Result<Option<ExecResult>, ExecError> {
        crate::exec::exec_at(self, haystack, start)
    }

    /// Returns true if the pattern matches the haystack.
    ///
    /// This honors the `y` flag: the match must then start at the beginning of the haystack.
    ///
    /// # Errors
    ///
    /// See [`CompiledPattern::exec_at`].
    pub fn is_match(&self, haystack: &str) -> Result<bool, ExecError> {
        Ok(self.exec(haystack)?.is_some())
    }

    /// Iterate over the matches in the haystack.
    ///
    /// With the `g` flag, every successive match is returned, otherwise at most one. An empty
    /// match moves the next search one character forward. With both `g` and `y`, matches must
    /// follow each other without gap.
    #[must_use]
    pub fn exec_iter<'r, 'h>(&'r self, haystack: &'h str) -> Matches<'r, 'h> {
        Matches::new(self, haystack, self.flags.global())
    }

    /// Replace matches in the haystack.
    ///
    /// With the `g` flag, every match is replaced, otherwise only the first one. Matches are
    /// the ones returned by [`CompiledPattern::exec_iter`].
    ///
    /// The replacement is either a template (see [`Replacer`] for its syntax) or a function
    /// receiving the match as a [`crate::ReplaceArgs`].
    ///
    /// # Errors
    ///
    /// See [`CompiledPattern::exec_at`].
    pub fn replace<R: Replacer>(&self, haystack: &str, replacer: R) -> Result<String, ExecError> {
        crate::replace::replace(Matches::new(self, haystack, self.flags.global()), replacer)
    }

    /// Replace every match in the haystack, whether the `g` flag is set or not.
    ///
    /// # Errors
    ///
    /// See [`CompiledPattern::exec_at`].
    pub fn replace_all<R: Replacer>(
        &self,
        haystack: &str,
        replacer: R,
    ) -> Result<String, ExecError> {
        crate::replace::replace(Matches::new(self, haystack, true), replacer)
    }
}
