//! Results of the execution of a compiled pattern.
use std::fmt;
use std::ops::Range;

use crate::compiler::CompiledPattern;

/// A successful match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecResult {
    /// Byte offset of the start of the match in the haystack.
    pub index: usize,

    /// The matched text.
    pub matched: String,

    /// Text of each capturing group, in index order. `None` if the group did not
    /// participate in the match.
    ///
    /// There is always one element per capturing group of the pattern: `captures[0]` is
    /// group 1.
    pub captures: Vec<Option<String>>,

    /// Text of each named group, ordered by index.
    ///
    /// `None` if the pattern has no named groups.
    pub groups: Option<Vec<(String, Option<String>)>>,

    /// Positions of the match and of the groups.
    ///
    /// `None` if the `d` flag is not set.
    pub indices: Option<Indices>,
}

impl ExecResult {
    /// Text of the named group with the given name.
    ///
    /// Returns `None` if there is no such group, or if it did not participate in the match.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&str> {
        self.groups
            .as_ref()?
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Byte range of the match in the haystack.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.index..(self.index + self.matched.len())
    }
}

/// Byte ranges of a match and its groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indices {
    /// Range of the whole match.
    pub matched: Range<usize>,

    /// Range of each capturing group, with the same shape as [`ExecResult::captures`].
    pub captures: Vec<Option<Range<usize>>>,

    /// Range of each named group, with the same shape as [`ExecResult::groups`].
    pub groups: Option<Vec<(String, Option<Range<usize>>)>>,
}

/// Error raised by the engine during a search.
#[derive(Debug)]
pub struct ExecError {
    error: fancy_regex::Error,
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "regex execution failed: {}", self.error)
    }
}

impl std::error::Error for ExecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

pub(crate) fn exec_at(
    pattern: &CompiledPattern,
    haystack: &str,
    start: usize,
) -> Result<Option<ExecResult>, ExecError> {
    let sticky = pattern.flags().sticky();

    let Some(start) = search_start(haystack, start, sticky) else {
        return Ok(None);
    };

    let Some(found) = pattern
        .regex
        .captures_from_pos(haystack, start)
        .map_err(|error| ExecError { error })?
    else {
        return Ok(None);
    };
    let Some(full_match) = found.get(0) else {
        return Ok(None);
    };
    if sticky && full_match.start() != start {
        return Ok(None);
    }

    let descriptor = pattern.descriptor();
    let spans: Vec<Option<Range<usize>>> = (1..=descriptor.capture.group_count)
        .map(|i| found.get(i).map(|m| m.start()..m.end()))
        .collect();

    let captures: Vec<Option<String>> = spans
        .iter()
        .map(|span| span.clone().map(|span| haystack[span].to_owned()))
        .collect();
    let groups = descriptor.capture.has_named_groups().then(|| {
        descriptor
            .capture
            .named_groups
            .iter()
            .map(|group| (group.name.clone(), captures[group.index - 1].clone()))
            .collect()
    });

    let indices = descriptor.has_indices().then(|| Indices {
        matched: full_match.start()..full_match.end(),
        groups: descriptor.capture.has_named_groups().then(|| {
            descriptor
                .capture
                .named_groups
                .iter()
                .map(|group| (group.name.clone(), spans[group.index - 1].clone()))
                .collect()
        }),
        captures: spans,
    });

    Ok(Some(ExecResult {
        index: full_match.start(),
        matched: full_match.as_str().to_owned(),
        captures,
        groups,
        indices,
    }))
}

/// Adjust the start of a search to a char boundary of the haystack.
fn search_start(haystack: &str, start: usize, sticky: bool) -> Option<usize> {
    if start > haystack.len() {
        None
    } else if haystack.is_char_boundary(start) {
        Some(start)
    } else if sticky {
        None
    } else {
        (start..=haystack.len()).find(|i| haystack.is_char_boundary(*i))
    }
}

/// Iterator over the matches of a [`CompiledPattern`] in a haystack.
///
/// Created by [`CompiledPattern::exec_iter`].
#[derive(Debug)]
pub struct Matches<'r, 'h> {
    pattern: &'r CompiledPattern,
    haystack: &'h str,

    /// Continue after the first match.
    global: bool,

    /// Start of the next search, `None` once the iteration is over.
    next_start: Option<usize>,
}

impl<'r, 'h> Matches<'r, 'h> {
    pub(crate) fn new(pattern: &'r CompiledPattern, haystack: &'h str, global: bool) -> Self {
        Self {
            pattern,
            haystack,
            global,
            next_start: Some(0),
        }
    }

    /// The haystack being searched.
    pub(crate) fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// Start of the search following a match.
    fn next_start_after(&self, range: &Range<usize>) -> Option<usize> {
        if !self.global {
            return None;
        }
        if !range.is_empty() {
            return Some(range.end);
        }
        self.haystack[range.end..]
            .chars()
            .next()
            .map(|c| range.end + c.len_utf8())
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Result<ExecResult, ExecError>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start.take()?;

        match self.pattern.exec_at(self.haystack, start) {
            Ok(Some(result)) => {
                self.next_start = self.next_start_after(&result.range());
                Some(Ok(result))
            }
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
