//! Validation and canonical ordering of regex flags.
use std::fmt;
use std::ops::Range;

use super::error::{Error, ErrorKind};

/// All valid flags, in canonical order.
///
/// - `d`: generate indices for matches and captures.
/// - `g`: global search.
/// - `i`: case-insensitive search.
/// - `m`: `^` and `$` match at line boundaries.
/// - `s`: `.` matches newlines.
/// - `u`: unicode mode.
/// - `v`: unicode sets mode.
/// - `y`: sticky search, matches must start at the search position.
pub const FLAG_ALPHABET: [char; 8] = ['d', 'g', 'i', 'm', 's', 'u', 'v', 'y'];

/// A validated set of flags.
///
/// The set is stored as a bitmask over [`FLAG_ALPHABET`], so two sets holding the same flags
/// are equal regardless of the order in which the flags were written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    fn has(self, flag: char) -> bool {
        FLAG_ALPHABET
            .iter()
            .position(|c| *c == flag)
            .is_some_and(|pos| self.0 & (1_u8 << pos) != 0)
    }

    /// Iterate over the flags, in canonical order.
    pub fn chars(self) -> impl Iterator<Item = char> {
        FLAG_ALPHABET
            .into_iter()
            .enumerate()
            .filter(move |(pos, _)| self.0 & (1_u8 << *pos) != 0)
            .map(|(_, c)| c)
    }

    /// Number of flags in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.chars().count()
    }

    /// Returns true if no flags are set.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices are generated for matches and captures (`d`).
    #[must_use]
    pub fn has_indices(self) -> bool {
        self.has('d')
    }

    /// Global search (`g`).
    #[must_use]
    pub fn global(self) -> bool {
        self.has('g')
    }

    /// Case-insensitive search (`i`).
    #[must_use]
    pub fn ignore_case(self) -> bool {
        self.has('i')
    }

    /// `^` and `$` match at line boundaries (`m`).
    #[must_use]
    pub fn multiline(self) -> bool {
        self.has('m')
    }

    /// `.` matches newlines (`s`).
    #[must_use]
    pub fn dot_all(self) -> bool {
        self.has('s')
    }

    /// Unicode mode (`u`).
    #[must_use]
    pub fn unicode(self) -> bool {
        self.has('u')
    }

    /// Unicode sets mode (`v`).
    #[must_use]
    pub fn unicode_sets(self) -> bool {
        self.has('v')
    }

    /// Matches must start at the search position (`y`).
    #[must_use]
    pub fn sticky(self) -> bool {
        self.has('y')
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Validate a flags string and return it in canonical order.
///
/// For example, `gdi` is canonicalized into `dgi`.
///
/// # Errors
///
/// Fails if:
/// - more than 8 characters are given: [`ErrorKind::FlagsTooMany`].
/// - a character is not in [`FLAG_ALPHABET`]: [`ErrorKind::FlagUnknown`].
/// - a character is given twice: [`ErrorKind::FlagDuplicated`].
///
/// The spans of the error are byte offsets in `flags`.
pub fn canonicalize_flags(flags: &str) -> Result<Flags, Error> {
    let count = flags.chars().count();
    if count > FLAG_ALPHABET.len() {
        return Err(Error::new(
            0..flags.len(),
            ErrorKind::FlagsTooMany { count },
        ));
    }

    let mut mask = 0_u8;
    for (i, flag) in flags.char_indices() {
        let span = i..(i + flag.len_utf8());
        let Some(pos) = FLAG_ALPHABET.iter().position(|c| *c == flag) else {
            return Err(Error::new(span, ErrorKind::FlagUnknown { flag }));
        };
        let bit = 1_u8 << pos;
        if mask & bit != 0 {
            return Err(Error::new(span, ErrorKind::FlagDuplicated { flag }));
        }
        mask |= bit;
    }

    Ok(Flags(mask))
}

/// Canonicalize flags found at the given span of a larger text.
pub(crate) fn canonicalize_flags_at(flags: &str, span: &Range<usize>) -> Result<Flags, Error> {
    canonicalize_flags(flags)
        .map_err(|err| err.map_spans(|s| (s.start + span.start)..(s.end + span.start)))
}
