//! Some common and useful nom recipes, shared by all other modules.

use nom::error::ParseError;
use nom::Parser;

use super::error::{Error, ErrorKind};
use super::types::{Input, ParseResult};

/// Accepts a single character if the passed function returns true on it.
pub(crate) fn take_one<F>(f: F) -> impl for<'a> Fn(Input<'a>) -> ParseResult<'a, char>
where
    F: Fn(char) -> bool,
{
    move |mut input| match input.cursor().chars().next().map(|c| (c, f(c))) {
        Some((c, true)) => {
            input.advance(c.len_utf8());
            Ok((input, c))
        }
        _ => Err(nom::Err::Error(Error::from_char(input, '0'))),
    }
}

/// Equivalent to [`nom::combinator::map_res`] but expects an
/// [`ErrorKind`] type of error.
///
/// This allows using the starting input to generate a proper span
/// for the error. The error is a failure: no other alternative is tried.
pub(crate) fn map_res<'a, O1, O2, F, G>(
    mut parser: F,
    mut f: G,
) -> impl FnMut(Input<'a>) -> ParseResult<'a, O2>
where
    F: Parser<Input<'a>, Output = O1, Error = Error>,
    G: FnMut(O1) -> Result<O2, ErrorKind>,
{
    move |input: Input| {
        let start = input.pos();
        let (input, o1) = parser.parse(input)?;
        match f(o1) {
            Ok(o2) => Ok((input, o2)),
            Err(kind) => Err(nom::Err::Failure(Error::new(
                input.get_span_from(start),
                kind,
            ))),
        }
    }
}
