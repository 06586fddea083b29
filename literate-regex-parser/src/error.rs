//! Error types of the literate regex pipeline.
use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use nom::error::{ErrorKind as NomErrorKind, ParseError};

use super::types::Input;

/// Error raised by one of the pipeline stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    /// Span of the error in the input.
    ///
    /// This is a range of byte offsets from the beginning of the literate source given to the
    /// public entrypoint, even for stages that work on the normalized text.
    span: Range<usize>,

    /// Kind of the error.
    kind: ErrorKind,
}

impl Error {
    #[must_use]
    pub(crate) fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Kind of the error.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Span of the error, in byte offsets into the source.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Rewrite the spans of the error through the given mapping.
    ///
    /// Used to move an error from normalized offsets to literate source offsets.
    pub(crate) fn map_spans<F>(mut self, f: F) -> Self
    where
        F: Fn(Range<usize>) -> Range<usize>,
    {
        self.span = f(self.span);
        if let ErrorKind::GroupNameDuplicated { first_span, .. } = &mut self.kind {
            *first_span = f(first_span.clone());
        }
        self
    }

    /// Convert to a [`Diagnostic`].
    ///
    /// This can be used to display the error in a user-friendly manner.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic<()> {
        let diag = Diagnostic::error().with_message(self.to_string());

        match &self.kind {
            ErrorKind::MalformedLiteral(MalformedLiteral::MissingLeadingSlash) => diag
                .with_labels(vec![Label::primary((), self.span.clone())
                    .with_message("expected '/' here")]),

            ErrorKind::MalformedLiteral(MalformedLiteral::MissingTrailingSlash) => diag
                .with_labels(vec![Label::primary((), self.span.clone())
                    .with_message("this literal is never closed")]),

            ErrorKind::FlagUnknown { .. } => diag
                .with_labels(vec![Label::primary((), self.span.clone())])
                .with_notes(vec!["valid flags are d, g, i, m, s, u, v and y".to_owned()]),

            ErrorKind::FlagDuplicated { .. } => diag
                .with_labels(vec![
                    Label::primary((), self.span.clone()).with_message("repeated here")
                ]),

            ErrorKind::FlagsTooMany { .. } => diag
                .with_labels(vec![Label::primary((), self.span.clone())]),

            ErrorKind::GroupNameDuplicated { first_span, .. } => diag.with_labels(vec![
                Label::primary((), self.span.clone()).with_message("redefined here"),
                Label::secondary((), first_span.clone()).with_message("first defined here"),
            ]),

            ErrorKind::GroupNameEmpty => diag
                .with_labels(vec![Label::primary((), self.span.clone())]),

            ErrorKind::NomError(_) => diag.with_labels(vec![Label::primary((), self.span.clone())]),
        }
    }

    fn from_nom_error_kind(position: usize, kind: NomErrorKind) -> Self {
        Self {
            span: Range {
                start: position,
                end: position + 1,
            },
            kind: ErrorKind::NomError(kind),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::MalformedLiteral(MalformedLiteral::MissingLeadingSlash) => {
                write!(f, "Expected regex literal to start with '/'")
            }
            ErrorKind::MalformedLiteral(MalformedLiteral::MissingTrailingSlash) => {
                write!(f, "Invalid regex literal: missing trailing '/'")
            }
            ErrorKind::FlagUnknown { flag } => write!(f, "unknown regex flag `{flag}`"),
            ErrorKind::FlagDuplicated { flag } => {
                write!(f, "regex flag `{flag}` appears multiple times")
            }
            ErrorKind::FlagsTooMany { count } => {
                write!(f, "too many regex flags: {count}, at most 8 are allowed")
            }
            ErrorKind::GroupNameDuplicated { name, .. } => {
                write!(f, "duplicate capture group name `{name}`")
            }
            ErrorKind::GroupNameEmpty => write!(f, "capture group name cannot be empty"),
            ErrorKind::NomError(_) => write!(f, "syntax error"),
        }
    }
}

impl std::error::Error for Error {}

impl ParseError<Input<'_>> for Error {
    fn from_error_kind(input: Input, kind: NomErrorKind) -> Self {
        Self::from_nom_error_kind(input.get_position_offset(), kind)
    }

    fn append(_: Input, _: NomErrorKind, other: Self) -> Self {
        other
    }
}

/// Kind of an [`Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The source is not a `/pattern/flags` literal.
    MalformedLiteral(MalformedLiteral),

    /// A flag is not one of `d g i m s u v y`.
    FlagUnknown {
        /// The offending character.
        flag: char,
    },

    /// A flag is specified more than once.
    FlagDuplicated {
        /// The repeated flag.
        flag: char,
    },

    /// More flags than the size of the flag alphabet.
    FlagsTooMany {
        /// Number of flag characters found.
        count: usize,
    },

    /// Two named capture groups use the same name.
    GroupNameDuplicated {
        /// The repeated name.
        name: String,
        /// Span of the first group using this name.
        first_span: Range<usize>,
    },

    /// A named capture group has an empty name, ie `(?<>...)`.
    GroupNameEmpty,

    /// Generic error on nom parsing utilities.
    ///
    /// The pipeline is total on the inputs it accepts, so this is only reachable
    /// through internal helpers.
    NomError(NomErrorKind),
}

/// Reason for a [`ErrorKind::MalformedLiteral`] error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedLiteral {
    /// The normalized source does not start with `/`.
    MissingLeadingSlash,

    /// The normalized source has no closing `/`.
    MissingTrailingSlash,
}
