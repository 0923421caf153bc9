//! Directory-backed raw file storage.
//!
//! Stores one regular file per name directly under the root:
//! `{root}/{name}`.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::RawStorageConfig;
use crate::error::{RawError, RawResult};
use crate::names::validate_file_name;
use crate::traits::RawFileStorage;

/// Prefix for in-flight temporary files inside the root.
const TEMP_PREFIX: &str = ".filestorage-";

/// Raw file store keeping each name as a file directly under a root directory.
///
/// Writes are atomic: content is copied into a temporary file in the root,
/// then renamed over the target. A failed add never leaves a partial file
/// behind or disturbs the previous content.
#[derive(Clone, Debug)]
pub struct DirFileStorage {
    root: PathBuf,
    sync_on_write: bool,
}

impl DirFileStorage {
    /// Open a store rooted at an existing directory.
    ///
    /// The directory is not created; a missing root or one that is not a
    /// directory fails with [`RawError::InvalidRoot`].
    pub fn new(root: impl AsRef<Path>) -> RawResult<Self> {
        Self::from_config(&RawStorageConfig::new(root.as_ref()))
    }

    /// Open a store described by `config`.
    pub fn from_config(config: &RawStorageConfig) -> RawResult<Self> {
        let root = config.root_dir.clone();
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(RawError::InvalidRoot {
                    path: root,
                    reason: "not a directory".into(),
                })
            }
            Err(e) => {
                return Err(RawError::InvalidRoot {
                    path: root,
                    reason: e.to_string(),
                })
            }
        }
        Ok(Self {
            root,
            sync_on_write: config.sync_on_write,
        })
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the full path for a file name.
    fn file_path(&self, name: &str) -> RawResult<PathBuf> {
        validate_file_name(name)?;
        Ok(self.root.join(name))
    }
}

impl RawFileStorage for DirFileStorage {
    type File = File;

    fn add_file(&self, name: &str, content: &mut dyn Read, length: u64) -> RawResult<()> {
        let path = self.file_path(name)?;

        // The temp file is deleted on drop unless persisted below.
        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(&self.root)?;
        let copied = io::copy(&mut Read::take(&mut *content, length), &mut tmp)?;
        if copied < length {
            return Err(RawError::InvalidSize {
                name: name.to_string(),
                expected: length,
                actual: copied,
            });
        }
        if self.sync_on_write {
            tmp.as_file().sync_all()?;
        }
        tmp.persist(&path).map_err(|e| RawError::Io(e.error))?;

        debug!(name, path = %path.display(), size = length, "stored raw file");
        Ok(())
    }

    fn file(&self, name: &str) -> RawResult<File> {
        let path = self.file_path(name)?;
        let file = File::open(&path).map_err(|e| not_found_or_io(name, e))?;
        // Directories open fine on some platforms but are not stored files.
        if !file.metadata()?.is_file() {
            return Err(RawError::NotFound {
                name: name.to_string(),
            });
        }
        Ok(file)
    }

    fn remove_file(&self, name: &str) -> RawResult<()> {
        let path = self.file_path(name)?;
        fs::remove_file(&path).map_err(|e| not_found_or_io(name, e))?;
        debug!(name, "removed raw file");
        Ok(())
    }

    fn exists(&self, name: &str) -> RawResult<bool> {
        let path = self.file_path(name)?;
        match fs::metadata(&path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(RawError::Io(e)),
        }
    }
}

fn not_found_or_io(name: &str, e: io::Error) -> RawError {
    if e.kind() == io::ErrorKind::NotFound {
        RawError::NotFound {
            name: name.to_string(),
        }
    } else {
        RawError::Io(e)
    }
}
