use std::fmt::Display;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;

/// Error when compiling a literate regex.
#[derive(Debug)]
pub struct CompileError {
    /// The kind of error.
    ///
    /// Boxed because big.
    kind: Box<CompileErrorKind>,

    /// Description of the error.
    desc: String,
}

impl CompileError {
    pub(crate) fn new(kind: CompileErrorKind, input: &str) -> Self {
        Self {
            desc: generate_description(&kind.to_diagnostic(), "mem", input),
            kind: Box::new(kind),
        }
    }

    /// Kind of the error.
    #[must_use]
    pub fn kind(&self) -> &CompileErrorKind {
        &self.kind
    }

    /// Convert to a [`Diagnostic`].
    ///
    /// This can be used to display the error in a more user-friendly manner than the
    /// single-lined description given by the [`Display`] implementation.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic<()> {
        self.kind.to_diagnostic()
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.desc)
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.kind {
            CompileErrorKind::Parse(err) => Some(err),
            CompileErrorKind::PatternSyntax { error, .. } => Some(error),
            CompileErrorKind::IncompatibleFlags { .. }
            | CompileErrorKind::GroupCountMismatch { .. } => None,
        }
    }
}

/// Kind of error when compiling a literate regex.
#[derive(Debug)]
#[non_exhaustive]
pub enum CompileErrorKind {
    /// The literate source could not be described.
    Parse(literate_regex_parser::error::Error),

    /// The `u` and `v` flags are both set.
    IncompatibleFlags {
        /// Span of the flags in the literate source.
        span: Range<usize>,
    },

    /// The engine rejected the pattern.
    PatternSyntax {
        /// Error returned by the engine.
        error: fancy_regex::Error,

        /// Span of the pattern in the literate source.
        span: Range<usize>,
    },

    /// The engine and the group analysis disagree on the number of capturing groups.
    GroupCountMismatch {
        /// Number of capturing groups found by the analysis.
        expected: usize,

        /// Number of capturing groups found by the engine.
        found: usize,

        /// Span of the pattern in the literate source.
        span: Range<usize>,
    },
}

impl CompileErrorKind {
    fn to_diagnostic(&self) -> Diagnostic<()> {
        match self {
            Self::Parse(err) => err.to_diagnostic(),
            Self::IncompatibleFlags { span } => Diagnostic::error()
                .with_message("regex flags `u` and `v` cannot be used together")
                .with_labels(vec![Label::primary((), span.clone())]),
            Self::PatternSyntax { error, span } => Diagnostic::error()
                .with_message(format!("invalid regex pattern: {error}"))
                .with_labels(vec![Label::primary((), span.clone())]),
            Self::GroupCountMismatch {
                expected,
                found,
                span,
            } => Diagnostic::error()
                .with_message(format!(
                    "pattern has {found} capturing groups, but {expected} were expected"
                ))
                .with_labels(vec![Label::primary((), span.clone())])
                .with_notes(vec![
                    "a parenthesis inside a character class must be escaped".to_owned()
                ]),
        }
    }
}

/// Convert to a displayable, single-lined description.
///
/// # Arguments
///
/// * `input_name`: a name for the input, used at the beginning of the
///   description: `<filename>:<line>:<column>: <description>`.
/// * `input`: the literate source of the regex.
#[must_use]
pub fn generate_description(diag: &Diagnostic<()>, input_name: &str, input: &str) -> String {
    // Generate a small report using codespan_reporting
    let mut writer = term::termcolor::Buffer::no_color();
    let config = term::Config {
        display_style: term::DisplayStyle::Short,
        ..term::Config::default()
    };

    let files = SimpleFile::new(input_name, &input);
    let _res = term::emit(&mut writer, &config, &files, diag);
    let mut res = writer.as_slice();
    // remove the trailing \n that codespan reporting adds.
    if res.ends_with(b"\n") {
        res = &res[..(res.len() - 1)];
    }
    String::from_utf8_lossy(res).to_string()
}
