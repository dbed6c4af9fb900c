// crates/cli/src/args.rs
use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use clap::builder::OsStringValueParser;
use wcc_core::Selection;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wcc",
    version = crate::VERSION,
    about = "Count lines, words, bytes, and characters in a file or standard input"
)]
pub struct Args {
    /// File to read; standard input when omitted or empty
    // clap's PathBuf parser rejects empty values, but an empty path
    // argument must fall back to standard input.
    #[arg(value_parser = OsStringValueParser::new())]
    pub file: Option<OsString>,

    /// Count lines
    #[arg(short = 'l', long = "lines")]
    pub lines: bool,

    /// Count words
    #[arg(short = 'w', long = "words")]
    pub words: bool,

    /// Count bytes
    #[arg(short = 'c', long = "bytes")]
    pub bytes: bool,

    /// Count characters
    #[arg(short = 'm', long = "chars")]
    pub chars: bool,
}

impl Args {
    /// The file to read, if any. An empty path argument means standard
    /// input, same as omitting it.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(Path::new)
    }

    /// Counter selection with the no-flags default applied: bare
    /// invocations count lines, words, and bytes.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection {
            lines: self.lines,
            words: self.words,
            bytes: self.bytes,
            chars: self.chars,
        }
        .effective()
    }
}
