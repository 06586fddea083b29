//! Replacement of matches.
use crate::exec::{ExecError, Matches};

/// A match, as given to a replacement function.
///
/// Its shape follows the description of the pattern, as for [`crate::ExecResult`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplaceArgs<'a> {
    /// The matched text.
    pub matched: &'a str,

    /// Text of each capturing group, in index order. There is always one element per
    /// capturing group of the pattern.
    pub captures: &'a [Option<String>],

    /// Byte offset of the match in the input.
    pub offset: usize,

    /// The whole input.
    pub input: &'a str,

    /// Text of each named group, ordered by index.
    ///
    /// `None` if the pattern has no named groups.
    pub groups: Option<&'a [(String, Option<String>)]>,
}

/// Replacement of a match.
///
/// This is implemented for functions taking a [`ReplaceArgs`], and for templates. In a
/// template:
///
/// - `$$` is a `$`.
/// - `$&` is the matched text.
/// - `` $` `` is the text before the match, and `$'` the text after it.
/// - `$n` and `$nn` are the text of the group of index `n` or `nn`, from 1 to 99. The longest
///   index that exists is used.
/// - `$<name>` is the text of the named group `name`. This is only recognized when the pattern
///   has named groups.
///
/// A group that did not participate in the match is replaced by an empty string. Any other
/// use of `$` is kept as is.
pub trait Replacer {
    /// Append the replacement of a match to `dst`.
    fn replace_append(&mut self, args: &ReplaceArgs<'_>, dst: &mut String);
}

impl Replacer for &str {
    fn replace_append(&mut self, args: &ReplaceArgs<'_>, dst: &mut String) {
        expand(self, args, dst);
    }
}

impl Replacer for String {
    fn replace_append(&mut self, args: &ReplaceArgs<'_>, dst: &mut String) {
        expand(self, args, dst);
    }
}

impl<F, T> Replacer for F
where
    F: FnMut(&ReplaceArgs<'_>) -> T,
    T: AsRef<str>,
{
    fn replace_append(&mut self, args: &ReplaceArgs<'_>, dst: &mut String) {
        dst.push_str((*self)(args).as_ref());
    }
}

pub(crate) fn replace<R: Replacer>(
    matches: Matches<'_, '_>,
    mut replacer: R,
) -> Result<String, ExecError> {
    let input = matches.haystack();
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for result in matches {
        let result = result?;
        out.push_str(&input[last..result.index]);
        replacer.replace_append(
            &ReplaceArgs {
                matched: &result.matched,
                captures: &result.captures,
                offset: result.index,
                input,
                groups: result.groups.as_deref(),
            },
            &mut out,
        );
        last = result.range().end;
    }
    out.push_str(&input[last..]);

    Ok(out)
}

fn expand(template: &str, args: &ReplaceArgs<'_>, dst: &mut String) {
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        dst.push_str(&rest[..pos]);
        rest = &rest[(pos + 1)..];
        match substitution(rest, args) {
            Some((value, len)) => {
                dst.push_str(value);
                rest = &rest[len..];
            }
            None => dst.push('$'),
        }
    }
    dst.push_str(rest);
}

/// Value of the substitution following a `$`, and length of its text after the `$`.
fn substitution<'a>(rest: &str, args: &ReplaceArgs<'a>) -> Option<(&'a str, usize)> {
    match rest.chars().next()? {
        '$' => Some(("$", 1)),
        '&' => Some((args.matched, 1)),
        '`' => Some((&args.input[..args.offset], 1)),
        '\'' => Some((&args.input[(args.offset + args.matched.len())..], 1)),
        '<' => {
            let groups = args.groups?;
            let end = rest.find('>')?;
            let name = &rest[1..end];
            let value = groups
                .iter()
                .find(|(n, _)| n == name)
                .and_then(|(_, value)| value.as_deref());
            Some((value.unwrap_or(""), end + 1))
        }
        '0'..='9' => {
            let group_index = |len: usize| {
                rest.get(..len)
                    .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|digits| digits.parse::<usize>().ok())
                    .filter(|index| (1..=args.captures.len()).contains(index))
            };
            let (index, len) = group_index(2)
                .map(|index| (index, 2))
                .or_else(|| group_index(1).map(|index| (index, 1)))?;
            Some((args.captures[index - 1].as_deref().unwrap_or(""), len))
        }
        _ => None,
    }
}
