//! Capability-scoped access to the data directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

/// Directory holding the seed JSON files and the resume.
///
/// Files are opened relative to the directory handle, so a name such as
/// `../secret` cannot escape it. A missing directory reads like an empty
/// one.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: Utf8PathBuf,
}

impl DataDir {
    /// Creates a handle for `root`. The directory is opened on each read.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory path.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn open(&self) -> io::Result<Option<Dir>> {
        match Dir::open_ambient_dir(&self.root, ambient_authority()) {
            Ok(dir) => Ok(Some(dir)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Reads a UTF-8 file, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns any I/O error other than a missing file or directory.
    pub fn read_to_string(&self, name: &str) -> io::Result<Option<String>> {
        let Some(dir) = self.open()? else {
            return Ok(None);
        };
        match dir.read_to_string(name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Reads a file as bytes, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns any I/O error other than a missing file or directory.
    pub fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        let Some(dir) = self.open()? else {
            return Ok(None);
        };
        match dir.read(name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
