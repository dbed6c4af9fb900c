// crates/core/src/format.rs
use std::fmt::Write;
use std::path::Path;

use crate::counter::Counts;

/// Width of each rendered numeric field.
const FIELD_WIDTH: usize = 8;

/// Render the final totals as one summary line.
///
/// Only fields whose final value is greater than zero are shown. This is a
/// value gate, not a flag gate: a counter that was requested but ended at
/// zero is hidden, so an empty file renders an empty line. Field order is
/// lines, words, then characters when positive, otherwise bytes when
/// positive. A supplied path is appended after a single space.
#[must_use]
pub fn render(counts: &Counts, path: Option<&Path>) -> String {
    let mut line = String::new();

    if counts.lines > 0 {
        let _ = write!(line, "{:>FIELD_WIDTH$}", counts.lines);
    }
    if counts.words > 0 {
        let _ = write!(line, "{:>FIELD_WIDTH$}", counts.words);
    }
    if counts.chars > 0 {
        let _ = write!(line, "{:>FIELD_WIDTH$}", counts.chars);
    } else if counts.bytes > 0 {
        let _ = write!(line, "{:>FIELD_WIDTH$}", counts.bytes);
    }
    if let Some(path) = path {
        let _ = write!(line, " {}", path.display());
    }

    line
}
