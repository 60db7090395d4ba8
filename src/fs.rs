//! File access facade
//!
//! Thin wrappers around `std::fs` consumed by the store mutator. Read and
//! write failures are mapped onto the crate error taxonomy with the offending
//! path attached; deletes are logged rather than escalated.

use std::fs;
use std::path::Path;

use tracing::{debug, error, warn};

use crate::error::{Result, SaveError};

/// Check whether a regular file exists at the given path
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Create a directory (and any missing parents) if it does not already exist
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the entire contents of a file
pub fn read_all_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| SaveError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite a file with the given bytes, creating it if missing
///
/// Overwrite semantics, not append: the previous content is replaced whole.
pub fn write_all_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Delete a file by path
///
/// Missing files and failed deletes are logged, not escalated. Returns
/// whether a file was actually removed.
pub fn delete_file(path: &Path) -> bool {
    if !path.is_file() {
        warn!(path = %path.display(), "file does not exist");
        return false;
    }

    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "deleted file");
            true
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to delete file");
            false
        }
    }
}
