// crates/core/src/lib.rs
//! Core counting library for the `wcc` CLI.
//!
//! One forward pass over a UTF-8 stream updates up to four independent
//! counters (lines, words, bytes, characters); [`format::render`] turns the
//! final totals into the single summary line the binary prints.
//!
//! Known quirk, kept on purpose: the formatter hides any field whose final
//! value is zero, even when that counter was explicitly requested. Counting
//! lines in an empty file prints an empty line, not `0`. See
//! [`format::render`].

pub mod counter;
pub mod error;
pub mod format;
pub mod input;

pub use counter::{Counts, Selection, count_reader};
pub use error::{CountError, Result};
