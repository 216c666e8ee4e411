//! Uploaded files and their temporary storage.
//!
//! An [`Upload`] is the byte source of one profiling request. Streams are
//! spooled into a named temporary file that is removed when the `Upload` is
//! dropped, so cleanup happens on every exit path of the request.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{IngestError, Result};

#[derive(Debug)]
enum Storage {
    /// Bytes copied into a temp file owned by this upload.
    Spooled(NamedTempFile),
    /// A file that already exists on disk and is left untouched.
    Borrowed(PathBuf),
}

/// A file supplied for profiling.
#[derive(Debug)]
pub struct Upload {
    name: String,
    storage: Storage,
}

impl Upload {
    /// Spools `reader` into a temporary file.
    pub fn from_reader<R: Read>(name: impl Into<String>, mut reader: R) -> Result<Self> {
        let name = name.into();
        let spool_err = |source: io::Error| IngestError::Spool {
            name: name.clone(),
            source,
        };
        let mut temp = NamedTempFile::new().map_err(spool_err)?;
        let bytes = io::copy(&mut reader, &mut temp).map_err(spool_err)?;
        temp.flush().map_err(spool_err)?;
        debug!(upload = %name, bytes, path = %temp.path().display(), "upload spooled");
        Ok(Self {
            name,
            storage: Storage::Spooled(temp),
        })
    }

    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        Self::from_reader(name, bytes)
    }

    /// Uses an existing file in place. The file is not deleted on drop.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        File::open(&path).map_err(|e| IngestError::open(&path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            storage: Storage::Borrowed(path),
        })
    }

    /// Display name of the upload (original file name when known).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the bytes on disk.
    pub fn path(&self) -> &Path {
        match &self.storage {
            Storage::Spooled(temp) => temp.path(),
            Storage::Borrowed(path) => path,
        }
    }

    /// True when the bytes live in a temp file owned by this upload.
    pub fn is_temporary(&self) -> bool {
        matches!(self.storage, Storage::Spooled(_))
    }

    /// Size of the upload in bytes.
    pub fn len(&self) -> Result<u64> {
        let path = self.path();
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| IngestError::open(path, e))
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
