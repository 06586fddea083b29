//! **literate-regex** compiles literate regular expressions into matchers.
//!
//! A literate regex is a regex literal written over several lines, with free whitespace and
//! `#` comments. The source is described by the [`literate_regex_parser`] crate, then compiled
//! by the [`fancy_regex`] engine. Matches are shaped by the description of the source: one
//! entry per capturing group, named groups when the pattern has some, and indices when the `d`
//! flag is set.
//!
//! ```
//! let pattern = literate_regex::compile(r"
//!     /
//!       (?<key> [a-z]+ )     # the key
//!       \s* = \s*
//!       (?<value> [^;]* )    # the value
//!     / g d
//! ")?;
//!
//! let matches = pattern
//!     .exec_iter("a = 1; bc=2")
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(matches.len(), 2);
//!
//! let second = &matches[1];
//! assert_eq!(second.index, 7);
//! assert_eq!(second.matched, "bc=2");
//! assert_eq!(second.group("key"), Some("bc"));
//! assert_eq!(second.group("value"), Some("2"));
//! assert_eq!(second.indices.as_ref().unwrap().captures[1], Some(10..11));
//!
//! # Ok::<(), literate_regex::compiler::CompileError>(())
//! ```

// Used in integration tests, not in the library.
#[cfg(test)]
use glob as _;

pub mod compiler;
pub use compiler::{compile, compile_with_params, CompiledPattern, CompilerParams};
pub mod exec;
pub use exec::{ExecError, ExecResult, Indices};
pub mod replace;
pub use replace::{ReplaceArgs, Replacer};

pub use literate_regex_parser as parser;
