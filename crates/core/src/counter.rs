// crates/core/src/counter.rs
use std::io::{BufRead, BufReader, ErrorKind, Read};

use crate::error::{CountError, Result};

/// Which counters are active for a pass. Each one is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
    pub chars: bool,
}

impl Selection {
    #[must_use]
    pub const fn any(self) -> bool {
        self.lines || self.words || self.bytes || self.chars
    }

    /// Apply the defaulting rule: when no counter is explicitly requested,
    /// lines, words, and bytes become active. Character counting is opt-in
    /// only and is never defaulted. An explicit set is honored verbatim.
    #[must_use]
    pub const fn effective(self) -> Self {
        if self.any() {
            self
        } else {
            Self {
                lines: true,
                words: true,
                bytes: true,
                chars: false,
            }
        }
    }
}

/// Final totals of one pass. Inactive counters stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
    pub chars: usize,
}

impl Counts {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines == 0 && self.words == 0 && self.bytes == 0 && self.chars == 0
    }
}

/// Count lines/words/bytes/characters in a single forward pass.
///
/// Characters are decoded one at a time; byte and character totals are
/// tracked separately so multi-byte input keeps them distinct. Lines are
/// counted by `'\n'` occurrences, so a final line without a trailing
/// newline adds no extra line. A word is a maximal run of non-whitespace
/// characters (`char::is_whitespace`), counted once at its leading
/// character.
///
/// # Errors
/// `CountError::Decode` if the stream is not valid UTF-8, `CountError::Read`
/// on an underlying I/O failure. Either way the accumulated totals are
/// discarded; the pass fails as a whole.
pub fn count_reader<R: Read>(reader: R, selection: Selection) -> Result<Counts> {
    let mut reader = BufReader::new(reader);
    let mut counts = Counts::default();
    let mut in_word = false;
    // Byte offset of the next character, for decode diagnostics.
    let mut offset: u64 = 0;

    while let Some((ch, width)) = next_char(&mut reader, offset)? {
        offset += width as u64;

        if selection.bytes {
            counts.bytes += width;
        }
        if selection.chars {
            counts.chars += 1;
        }
        if selection.lines && ch == '\n' {
            counts.lines += 1;
        }
        if selection.words {
            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                counts.words += 1;
                in_word = true;
            }
        }
    }

    Ok(counts)
}

/// Decode the next character and its encoded width, or `None` at
/// end-of-stream.
fn next_char<R: BufRead>(reader: &mut R, offset: u64) -> Result<Option<(char, usize)>> {
    let mut buf = [0u8; 4];
    match reader.read_exact(&mut buf[..1]) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(CountError::Read(e)),
    }

    let width = utf8_width(buf[0]).ok_or(CountError::Decode { offset })?;
    if width > 1 {
        // A truncated sequence at end-of-stream is a decode error, not EOF.
        reader.read_exact(&mut buf[1..width]).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                CountError::Decode { offset }
            } else {
                CountError::Read(e)
            }
        })?;
    }

    let decoded =
        std::str::from_utf8(&buf[..width]).map_err(|_| CountError::Decode { offset })?;
    Ok(decoded.chars().next().map(|ch| (ch, width)))
}

/// Expected sequence length from a UTF-8 leading byte. Continuation and
/// out-of-range leading bytes are rejected here; `from_utf8` validates the
/// rest of the sequence.
const fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: Selection = Selection {
        lines: true,
        words: true,
        bytes: true,
        chars: true,
    };

    fn count_str(input: &str, selection: Selection) -> Counts {
        count_reader(input.as_bytes(), selection).unwrap()
    }

    #[test]
    fn empty_input_counts_nothing() {
        assert_eq!(count_str("", ALL), Counts::default());
    }

    #[test]
    fn single_line_without_newline() {
        let counts = count_str("Hello World", ALL);
        assert_eq!(
            counts,
            Counts {
                lines: 0,
                words: 2,
                bytes: 11,
                chars: 11,
            }
        );
    }

    #[test]
    fn multiple_lines() {
        let counts = count_str("Hello World\nThis is a test\n", ALL);
        assert_eq!(
            counts,
            Counts {
                lines: 2,
                words: 6,
                bytes: 27,
                chars: 27,
            }
        );
    }

    #[test]
    fn inactive_counters_stay_zero() {
        let only_lines = Selection {
            lines: true,
            ..Selection::default()
        };
        let counts = count_str("Hello\nWorld\n", only_lines);
        assert_eq!(
            counts,
            Counts {
                lines: 2,
                words: 0,
                bytes: 0,
                chars: 0,
            }
        );
    }

    #[test]
    fn consecutive_whitespace_counts_one_word_boundary() {
        let counts = count_str("a  \t  b", ALL);
        assert_eq!(counts.words, 2);
    }

    #[test]
    fn final_line_without_newline_is_not_counted() {
        let counts = count_str("one\ntwo", ALL);
        assert_eq!(counts.lines, 1);
    }

    #[test]
    fn multibyte_chars_widen_bytes_not_chars() {
        // 'é' is 2 bytes, '日' is 3.
        let counts = count_str("é日", ALL);
        assert_eq!(counts.bytes, 5);
        assert_eq!(counts.chars, 2);
        assert_eq!(counts.words, 1);
    }

    #[test]
    fn unicode_space_separates_words() {
        // U+00A0 NO-BREAK SPACE is whitespace for `char::is_whitespace`.
        let counts = count_str("a\u{00A0}b", ALL);
        assert_eq!(counts.words, 2);
    }

    #[test]
    fn invalid_utf8_fails_with_offset() {
        let err = count_reader(&[b'o', b'k', 0xFF][..], ALL).unwrap_err();
        match err {
            CountError::Decode { offset } => assert_eq!(offset, 2),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn truncated_sequence_is_a_decode_error() {
        // Leading byte of a 2-byte sequence, then EOF.
        let err = count_reader(&[0xC3][..], ALL).unwrap_err();
        assert!(matches!(err, CountError::Decode { offset: 0 }));
    }

    #[test]
    fn defaulting_rule_activates_lines_words_bytes() {
        let effective = Selection::default().effective();
        assert!(effective.lines && effective.words && effective.bytes);
        assert!(!effective.chars);
    }

    #[test]
    fn explicit_selection_is_honored_verbatim() {
        let only_chars = Selection {
            chars: true,
            ..Selection::default()
        };
        assert_eq!(only_chars.effective(), only_chars);
    }
}
