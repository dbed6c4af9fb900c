// crates/core/src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single counting pass. All variants are fatal for the
/// invocation: there is no retry, fallback encoding, or partial result.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read: {0}")]
    Read(#[from] io::Error),

    #[error("invalid UTF-8 at byte offset {offset}")]
    Decode { offset: u64 },
}

pub type Result<T> = std::result::Result<T, CountError>;
