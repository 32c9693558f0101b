//! Filesystem utilities.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A directory creation or file write failure, carrying the path involved.
#[derive(Debug, Error)]
#[error("failed to write {path}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl WriteError {
    fn new(path: &Path, source: io::Error) -> Self {
        WriteError {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Ensure a directory exists, creating it (and its parents) if necessary.
pub fn ensure_dir(path: &Path) -> Result<(), WriteError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| WriteError::new(path, source))?;
    }
    Ok(())
}

/// Stream `reader` into a freshly truncated file at `path`, creating parent
/// directories as needed. Returns the number of bytes written. The file
/// handle is closed on all exit paths, including write errors.
pub fn write_stream(path: &Path, reader: &mut dyn Read) -> Result<u64, WriteError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let mut file = File::create(path).map_err(|source| WriteError::new(path, source))?;
    io::copy(reader, &mut file).map_err(|source| WriteError::new(path, source))
}
