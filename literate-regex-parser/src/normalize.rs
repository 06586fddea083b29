//! Normalization of literate regex sources.
//!
//! A literate source is a regex written over several lines, with indentation and `#` comments:
//!
//! ```text
//! /
//!   ^ (?<year> \d{4} )   # four digits
//!   - (?<month> \d{2} )  # two digits
//!   \#                   # a literal hash
//! /du
//! ```
//!
//! Normalization removes comments and whitespace and unescapes `\#`, producing a compact
//! literal: `/^(?<year>\d{4})-(?<month>\d{2})#/du`.
use std::ops::Range;

/// Returns true if the character is removed by normalization.
///
/// This is the set matched by `\s` in ECMAScript regexes, ie the union of the `WhiteSpace` and
/// `LineTerminator` productions.
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\x0B'
            | '\x0C'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Characters ending a `#` comment.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// A normalized literate source.
///
/// Along with the normalized text, this keeps for each of its bytes the span of the literate
/// source it was produced from, so that errors detected on the normalized text can be
/// reported on the text the user wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedSource {
    text: String,

    /// Span in the literate source of each byte of `text`.
    origins: Vec<Range<usize>>,

    /// Length of the literate source.
    source_len: usize,
}

impl NormalizedSource {
    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the object and return the normalized text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Convert a span in the normalized text into a span in the literate source.
    ///
    /// Offsets past the end of the normalized text are mapped to the end of the literate
    /// source.
    #[must_use]
    pub fn source_span(&self, span: Range<usize>) -> Range<usize> {
        let start = self
            .origins
            .get(span.start)
            .map_or(self.source_len, |r| r.start);
        if span.end <= span.start {
            return start..start;
        }
        let end = self
            .origins
            .get(span.end - 1)
            .map_or(self.source_len, |r| r.end);
        start..end.max(start)
    }
}

/// Normalize a literate source, returning the compact text.
///
/// See [`normalize_source`].
#[must_use]
pub fn normalize(src: &str) -> String {
    normalize_source(src).into_string()
}

/// Normalize a literate source.
///
/// - An unescaped `#` starts a comment, which runs up to and including the next line
///   terminator.
/// - Every whitespace character (see [`is_whitespace`]) is removed, even when preceded by a
///   `\`. The removed character consumes the escape: the `\` is kept, and a `#` following the
///   whitespace starts a comment.
/// - Every `\#` left in the output is then replaced by `#`.
///
/// This never fails.
#[must_use]
pub fn normalize_source(src: &str) -> NormalizedSource {
    let mut kept = Vec::with_capacity(src.len());
    let mut escaped = false;
    let mut in_comment = false;

    for (i, c) in src.char_indices() {
        if in_comment {
            if is_line_terminator(c) {
                in_comment = false;
            }
            continue;
        }
        if c == '#' && !escaped {
            in_comment = true;
            continue;
        }
        if is_whitespace(c) {
            escaped = false;
            continue;
        }

        escaped = c == '\\' && !escaped;
        kept.push((c, i..(i + c.len_utf8())));
    }

    let mut text = String::with_capacity(kept.len());
    let mut origins = Vec::with_capacity(kept.len());
    let mut chars = kept.into_iter().peekable();
    while let Some((c, span)) = chars.next() {
        let unescaped = match chars.peek() {
            Some(('#', next)) if c == '\\' => Some(span.start..next.end),
            _ => None,
        };
        let (c, span) = match unescaped {
            Some(span) => {
                let _r = chars.next();
                ('#', span)
            }
            None => (c, span),
        };

        text.push(c);
        origins.extend(std::iter::repeat(span).take(c.len_utf8()));
    }

    NormalizedSource {
        text,
        origins,
        source_len: src.len(),
    }
}
