//! Whole-file persistence for fetched bodies.
//!
//! Creates or truncates the target file and writes the full body as raw
//! bytes, so binary responses are preserved verbatim. No partial-write
//! recovery; any filesystem failure becomes a [`StorageError`].

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Filesystem error carrying the target path.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct StorageError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl StorageError {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes `body` to `path`, overwriting any existing file.
pub fn write_body(path: &Path, body: &[u8]) -> Result<(), StorageError> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| StorageError {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(body).map_err(|source| StorageError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
