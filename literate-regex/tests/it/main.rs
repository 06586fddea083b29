#![allow(missing_docs, unused_results, unused_crate_dependencies, clippy::pedantic)]

// Tests related to errors on sources.
mod error;

// Tests related to the shape of match results.
mod exec;



// Tests related to the replacement of matches.
mod replace;

// utils to compile and check patterns
mod utils;
