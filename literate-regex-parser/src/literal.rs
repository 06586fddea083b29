//! Splitting of a `/pattern/flags` literal.
use std::ops::Range;

use super::error::{Error, ErrorKind, MalformedLiteral};
use super::normalize::{normalize_source, NormalizedSource};

/// The two fields of a regex literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralParts {
    /// The pattern, between the first and the last `/`.
    pub pattern: String,
    /// The flags, after the last `/`. They are not validated.
    pub flags: String,

    /// Span of the pattern in the literate source.
    pub pattern_span: Range<usize>,
    /// Span of the flags in the literate source.
    pub flags_span: Range<usize>,
}

/// Parse a literate regex literal into its pattern and flags.
///
/// The source is first normalized (see [`crate::normalize::normalize_source`]). The
/// normalized text must start with `/`, and the last `/` of the text closes the pattern:
/// since the flags never contain a `/`, this is unambiguous even if the pattern contains
/// escaped slashes or slashes inside a class.
///
/// # Errors
///
/// Returns a [`ErrorKind::MalformedLiteral`] error if the normalized source does not start
/// with `/`, or does not contain a closing `/`.
pub fn parse_literal(src: &str) -> Result<LiteralParts, Error> {
    let normalized = normalize_source(src);
    let literal =
        Literal::split(normalized.as_str()).map_err(|err| err.map_spans(|s| normalized.source_span(s)))?;

    Ok(literal.to_parts(&normalized))
}

/// A literal split into its two fields, borrowed from the normalized text.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Literal<'a> {
    pub(crate) pattern: &'a str,
    /// Offset of the pattern in the normalized text.
    pub(crate) pattern_offset: usize,

    pub(crate) flags: &'a str,
    /// Offset of the flags in the normalized text.
    pub(crate) flags_offset: usize,
}

impl<'a> Literal<'a> {
    /// Split a normalized literal.
    ///
    /// Spans of the returned error are in the normalized text.
    pub(crate) fn split(text: &'a str) -> Result<Self, Error> {
        match text.chars().next() {
            Some('/') => (),
            first => {
                let len = first.map_or(0, char::len_utf8);
                return Err(Error::new(
                    0..len,
                    ErrorKind::MalformedLiteral(MalformedLiteral::MissingLeadingSlash),
                ));
            }
        }

        let last_slash = match text.rfind('/') {
            Some(pos) if pos > 0 => pos,
            _ => {
                return Err(Error::new(
                    0..1,
                    ErrorKind::MalformedLiteral(MalformedLiteral::MissingTrailingSlash),
                ))
            }
        };

        Ok(Self {
            pattern: &text[1..last_slash],
            pattern_offset: 1,
            flags: &text[(last_slash + 1)..],
            flags_offset: last_slash + 1,
        })
    }

    pub(crate) fn pattern_span(&self) -> Range<usize> {
        self.pattern_offset..(self.pattern_offset + self.pattern.len())
    }

    pub(crate) fn flags_span(&self) -> Range<usize> {
        self.flags_offset..(self.flags_offset + self.flags.len())
    }

    pub(crate) fn to_parts(self, normalized: &NormalizedSource) -> LiteralParts {
        LiteralParts {
            pattern: self.pattern.to_owned(),
            flags: self.flags.to_owned(),
            pattern_span: normalized.source_span(self.pattern_span()),
            flags_span: normalized.source_span(self.flags_span()),
        }
    }
}
