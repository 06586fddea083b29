//! Parser for literate regular expressions.
//!
//! A literate regex is a regex literal written over several lines, with free whitespace and
//! `#` comments. This crate turns such a source into a compact `/pattern/flags` pair, and
//! describes the capturing groups of the pattern.
//!
//! It is designed to be used by the `literate-regex` crate, which compiles the result into a
//! matcher.
//!
//! The main entrypoint is [`describe`], which runs the whole pipeline:
//!
//! ```rust
//! use literate_regex_parser::*;
//!
//! let desc = describe(r"
//!     /
//!       (?<year> \d{4} ) - (?<month> \d{2} )  # a date
//!       (?: T ( \d{2} ) )?                    # an optional hour
//!     / g d
//! ")?;
//!
//! assert_eq!(desc.pattern, r"(?<year>\d{4})-(?<month>\d{2})(?:T(\d{2}))?");
//! assert_eq!(desc.flags.to_string(), "dg");
//! assert_eq!(desc.capture.group_count, 3);
//! assert_eq!(
//!     desc.capture.named_groups,
//!     vec![
//!         NamedGroup { name: "year".to_owned(), index: 1 },
//!         NamedGroup { name: "month".to_owned(), index: 2 },
//!     ]
//! );
//! assert!(desc.has_indices());
//!
//! # Ok::<(), literate_regex_parser::error::Error>(())
//! ```
//!
//! Each stage of the pipeline is also exposed on its own: [`normalize`], [`parse_literal`],
//! [`canonicalize_flags`] and [`analyze_captures`].

// Parsing uses the [`nom`] crate, adapted for textual parsing.
//
// Every stage works on the normalized text. Errors are raised with spans in the text the stage
// received, then moved to the literate source through the normalization origins.

pub mod captures;
pub mod descriptor;
pub mod error;
pub mod flags;
pub mod literal;
pub mod normalize;
mod nom_recipes;
mod types;

pub use captures::{
    analyze_captures, CaptureAnalysis, CaptureDescriptor, Group, GroupKind, NamedGroup,
};
pub use descriptor::{
    describe, describe_source, describe_with_params, DescribeParams, Description,
    DescriptorFlags, RegexDescriptor,
};
pub use flags::{canonicalize_flags, Flags, FLAG_ALPHABET};
pub use literal::{parse_literal, LiteralParts};
pub use normalize::{normalize, normalize_source, NormalizedSource};
