// crates/core/src/input.rs
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{CountError, Result};

/// Resolve the input source: a named file, or standard input when no path
/// is given. The returned handle is closed when dropped, on every exit
/// path of the caller.
///
/// # Errors
/// `CountError::Open` when the file cannot be opened; no scan is attempted.
pub fn open(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CountError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin())),
    }
}
