//! Assembly of the structural description of a literate regex.
use std::fmt;
use std::ops::Range;

use super::captures::{analyze_captures, CaptureAnalysis, CaptureDescriptor};
use super::error::Error;
use super::flags::{canonicalize_flags_at, Flags};
use super::literal::Literal;
use super::normalize::{normalize_source, NormalizedSource};

/// Parameters used when describing a literate regex.
#[derive(Clone, Debug)]
pub struct DescribeParams {
    /// Reject invalid flags.
    pub(crate) strict_flags: bool,
}

impl Default for DescribeParams {
    fn default() -> Self {
        Self { strict_flags: true }
    }
}

impl DescribeParams {
    /// Reject invalid flags.
    ///
    /// When disabled, flags that cannot be canonicalized do not raise an error, and are
    /// kept verbatim in the descriptor as [`DescriptorFlags::Raw`].
    ///
    /// Default value is `true`.
    #[must_use]
    pub fn strict_flags(mut self, strict_flags: bool) -> Self {
        self.strict_flags = strict_flags;
        self
    }
}

/// Flags of a [`RegexDescriptor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptorFlags {
    /// Flags were validated and canonicalized.
    Canonical(Flags),

    /// Flags are invalid and were kept as written.
    ///
    /// Only produced when [`DescribeParams::strict_flags`] is disabled.
    Raw(String),
}

impl DescriptorFlags {
    /// Canonical flags, if they are valid.
    #[must_use]
    pub fn canonical(&self) -> Option<Flags> {
        match self {
            Self::Canonical(flags) => Some(*flags),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for DescriptorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical(flags) => fmt::Display::fmt(flags, f),
            Self::Raw(flags) => f.write_str(flags),
        }
    }
}

/// Description of a literate regex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegexDescriptor {
    /// The compact pattern.
    pub pattern: String,

    /// The flags.
    pub flags: DescriptorFlags,

    /// The capturing groups of the pattern.
    pub capture: CaptureDescriptor,
}

impl RegexDescriptor {
    /// Returns true if match results should carry indices, ie the `d` flag is set.
    #[must_use]
    pub fn has_indices(&self) -> bool {
        self.flags.canonical().is_some_and(Flags::has_indices)
    }
}

/// Describe a literate regex with default parameters.
///
/// See [`describe_with_params`].
///
/// # Errors
///
/// See [`describe_with_params`].
pub fn describe(src: &str) -> Result<RegexDescriptor, Error> {
    describe_with_params(src, &DescribeParams::default())
}

/// Describe a literate regex.
///
/// The source is normalized, split into pattern and flags, the flags are canonicalized and the
/// groups of the pattern analyzed.
///
/// # Errors
///
/// Returns the first error raised by one of those stages. Spans of the error are byte
/// offsets in `src`.
pub fn describe_with_params(src: &str, params: &DescribeParams) -> Result<RegexDescriptor, Error> {
    Ok(describe_source(src, params)?.descriptor)
}

/// Full result of the description of a literate regex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    /// Description of the regex.
    pub descriptor: RegexDescriptor,

    /// Analysis of the groups of the pattern.
    ///
    /// Spans of the groups are relative to the pattern.
    pub analysis: CaptureAnalysis,

    /// Span of the pattern in the literate source.
    pub pattern_span: Range<usize>,

    /// Span of the flags in the literate source.
    pub flags_span: Range<usize>,
}

/// Describe a literate regex, keeping the analysis of its groups and the location of its
/// fields in the source.
///
/// # Errors
///
/// See [`describe_with_params`].
pub fn describe_source(src: &str, params: &DescribeParams) -> Result<Description, Error> {
    let normalized = normalize_source(src);
    let to_source = |err: Error| err.map_spans(|span| normalized.source_span(span));

    let literal = Literal::split(normalized.as_str()).map_err(to_source)?;

    let flags = match canonicalize_flags_at(literal.flags, &literal.flags_span()) {
        Ok(flags) => DescriptorFlags::Canonical(flags),
        Err(_) if !params.strict_flags => DescriptorFlags::Raw(literal.flags.to_owned()),
        Err(err) => return Err(to_source(err)),
    };

    let analysis = analyze_pattern(&literal, &normalized)?;

    Ok(Description {
        descriptor: RegexDescriptor {
            pattern: literal.pattern.to_owned(),
            flags,
            capture: analysis.descriptor(),
        },
        analysis,
        pattern_span: normalized.source_span(literal.pattern_span()),
        flags_span: normalized.source_span(literal.flags_span()),
    })
}

fn analyze_pattern(
    literal: &Literal,
    normalized: &NormalizedSource,
) -> Result<CaptureAnalysis, Error> {
    let offset = literal.pattern_offset;

    analyze_captures(literal.pattern).map_err(|err| {
        err.map_spans(|span| normalized.source_span((span.start + offset)..(span.end + offset)))
    })
}
