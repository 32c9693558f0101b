//! In-memory access to a downloaded package archive.
//!
//! NuGet packages are zip archives. The archive is opened directly over the
//! downloaded bytes; entries are visited in a single pass and classified by
//! file suffix into the destination they belong to.

use std::io::{Cursor, Read};

use anyhow::Result;
use thiserror::Error;
use zip::ZipArchive;

/// Errors from opening or reading the archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The downloaded bytes are not a valid zip archive.
    #[error("downloaded package is not a valid zip archive")]
    Format(#[source] zip::result::ZipError),

    /// An individual entry could not be read.
    #[error("failed to read archive entry #{index}")]
    Entry {
        index: usize,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Where a classified entry lands on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Header files (`.h`) go to the include directory.
    Include,
    /// Libraries and debug symbols (`.dll`, `.lib`, `.pdb`) go to the
    /// lib directory.
    Lib,
}

impl Destination {
    /// Classify an entry path by its suffix. Returns `None` for entries
    /// that should not be extracted. Matching is case-sensitive.
    pub fn classify(entry_path: &str) -> Option<Destination> {
        if entry_path.ends_with(".h") {
            Some(Destination::Include)
        } else if entry_path.ends_with(".dll")
            || entry_path.ends_with(".lib")
            || entry_path.ends_with(".pdb")
        {
            Some(Destination::Lib)
        } else {
            None
        }
    }
}

/// Final path component of an archive entry path, used as the on-disk file
/// name. Internal archive directory structure is discarded. NuGet packages
/// are assembled on Windows, so both separators are handled.
pub fn base_name(entry_path: &str) -> &str {
    entry_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(entry_path)
}

/// A package archive held entirely in memory.
#[derive(Debug)]
pub struct PackageArchive {
    inner: ZipArchive<Cursor<Vec<u8>>>,
}

impl PackageArchive {
    /// Open the downloaded bytes as a zip archive.
    pub fn open(bytes: Vec<u8>) -> Result<Self, ArchiveError> {
        let inner = ZipArchive::new(Cursor::new(bytes)).map_err(ArchiveError::Format)?;
        Ok(PackageArchive { inner })
    }

    /// Number of entries in the archive, directories included.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Visit every entry once, in archive order. The callback receives the
    /// entry's full path within the archive and a reader over its bytes.
    /// An error from the callback aborts the pass.
    pub fn for_each_entry<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&str, &mut dyn Read) -> Result<()>,
    {
        for index in 0..self.inner.len() {
            let mut entry = self
                .inner
                .by_index(index)
                .map_err(|source| ArchiveError::Entry { index, source })?;
            let name = entry.name().to_owned();
            f(&name, &mut entry)?;
        }
        Ok(())
    }
}
