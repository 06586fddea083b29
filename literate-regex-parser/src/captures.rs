//! Classification of groups and numbering of capturing groups.
use std::collections::HashMap;
use std::ops::Range;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::char;
use nom::combinator::{map, recognize, success, value};
use nom::sequence::delimited;
use nom::{Finish, Parser};

use super::error::{Error, ErrorKind};
use super::nom_recipes::{map_res, take_one};
use super::types::{Input, ParseResult};

/// Kind of a parenthesized group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupKind {
    /// Plain capturing group: `(...)`.
    Capturing,
    /// Named capturing group: `(?<name>...)`.
    Named(String),
    /// Non-capturing group: `(?:...)`.
    NonCapturing,
    /// Lookahead: `(?=...)`.
    Lookahead,
    /// Negative lookahead: `(?!...)`.
    NegativeLookahead,
    /// Lookbehind: `(?<=...)`.
    Lookbehind,
    /// Negative lookbehind: `(?<!...)`.
    NegativeLookbehind,
}

impl GroupKind {
    /// Returns true if the group captures, and thus receives an index.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        matches!(self, Self::Capturing | Self::Named(_))
    }
}

/// A group of a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Kind of the group.
    pub kind: GroupKind,

    /// Span of the opening construct of the group, from the `(` up to the start of
    /// its contents.
    ///
    /// For example, this is `(?<name>` for a named group.
    pub span: Range<usize>,

    /// Index of the group, starting at 1. Only set on capturing groups.
    pub index: Option<usize>,
}

/// A named capturing group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedGroup {
    /// Name of the group.
    pub name: String,
    /// Index of the group, starting at 1.
    pub index: usize,
}

/// Groups of a pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureAnalysis {
    /// Every group of the pattern, in order of their opening parenthesis.
    pub groups: Vec<Group>,
}

impl CaptureAnalysis {
    /// Number of capturing groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.iter().filter(|g| g.kind.is_capturing()).count()
    }

    /// Named capturing groups, in order of their indexes.
    pub fn named_groups(&self) -> impl Iterator<Item = NamedGroup> + '_ {
        self.groups.iter().filter_map(|group| match (&group.kind, group.index) {
            (GroupKind::Named(name), Some(index)) => Some(NamedGroup {
                name: name.clone(),
                index,
            }),
            _ => None,
        })
    }

    /// Structural description of the capturing groups.
    #[must_use]
    pub fn descriptor(&self) -> CaptureDescriptor {
        CaptureDescriptor {
            group_count: self.group_count(),
            named_groups: self.named_groups().collect(),
        }
    }
}

/// Description of the capturing groups of a pattern.
///
/// This describes the shape of a match: `group_count` captures, numbered from 1, and some of
/// them also available by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureDescriptor {
    /// Number of capturing groups.
    pub group_count: usize,

    /// Named groups, ordered by index.
    pub named_groups: Vec<NamedGroup>,
}

impl CaptureDescriptor {
    /// Index of the group with the given name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.named_groups
            .iter()
            .find(|group| group.name == name)
            .map(|group| group.index)
    }

    /// Name of the group with the given index, if it is named.
    #[must_use]
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.named_groups
            .iter()
            .find(|group| group.index == index)
            .map(|group| group.name.as_str())
    }

    /// Returns true if the pattern has named groups.
    #[must_use]
    pub fn has_named_groups(&self) -> bool {
        !self.named_groups.is_empty()
    }
}

/// Analyze the groups of a pattern.
///
/// The pattern is scanned left to right. A `\` escapes the next character, so `\(` does not
/// open a group and `\\(` does. Each unescaped `(` is classified depending on what follows
/// it:
///
/// - `?:`: non-capturing group.
/// - `?=`, `?!`: lookahead and negative lookahead.
/// - `?<=`, `?<!`: lookbehind and negative lookbehind.
/// - `?<name>`: named capturing group.
/// - anything else: capturing group.
///
/// Capturing groups are numbered in the order of their opening parenthesis, the way
/// ECMAScript engines number `$1`, `$2`, etc.
///
/// Character classes are not special-cased: a `(` inside `[...]` is analyzed as a group.
///
/// # Errors
///
/// Fails if a named group has an empty name, or if two named groups have the same name.
/// Spans of the error are byte offsets in `pattern`.
pub fn analyze_captures(pattern: &str) -> Result<CaptureAnalysis, Error> {
    let mut input = Input::new(pattern);
    let mut groups = Vec::new();
    let mut names: HashMap<String, Range<usize>> = HashMap::new();
    let mut index = 0;
    let mut escaped = false;

    while let Some(c) = input.cursor().chars().next() {
        if escaped || c != '(' {
            escaped = !escaped && c == '\\';
            input.advance(c.len_utf8());
            continue;
        }

        let start = input.pos();
        let (new_input, kind) = group_opening(input).finish()?;
        input = new_input;
        let span = input.get_span_from(start);

        if let GroupKind::Named(name) = &kind {
            if let Some(first_span) = names.get(name) {
                return Err(Error::new(
                    span,
                    ErrorKind::GroupNameDuplicated {
                        name: name.clone(),
                        first_span: first_span.clone(),
                    },
                ));
            }
            let _r = names.insert(name.clone(), span.clone());
        }

        let group_index = if kind.is_capturing() {
            index += 1;
            Some(index)
        } else {
            None
        };
        groups.push(Group {
            kind,
            span,
            index: group_index,
        });
    }

    Ok(CaptureAnalysis { groups })
}

/// Parse the opening of a group, starting on its `(`.
fn group_opening(input: Input) -> ParseResult<GroupKind> {
    let (input, _) = char('(').parse(input)?;

    alt((
        value(GroupKind::NonCapturing, tag("?:")),
        value(GroupKind::Lookahead, tag("?=")),
        value(GroupKind::NegativeLookahead, tag("?!")),
        value(GroupKind::Lookbehind, tag("?<=")),
        value(GroupKind::NegativeLookbehind, tag("?<!")),
        map_res(tag("?<>"), |_| Err(ErrorKind::GroupNameEmpty)),
        map(delimited(tag("?<"), group_name, char('>')), GroupKind::Named),
        success(GroupKind::Capturing),
    ))
    .parse(input)
}

/// Returns true if the char can start a group name.
fn is_name_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

/// Returns true if the char can continue a group name.
fn is_name_continue(c: char) -> bool {
    is_name_start(c) || c.is_alphanumeric()
}

/// Parse the name of a named group.
fn group_name(input: Input) -> ParseResult<String> {
    map(
        recognize((take_one(is_name_start), take_while(is_name_continue))),
        |input: Input| input.cursor().to_owned(),
    )
    .parse(input)
}
