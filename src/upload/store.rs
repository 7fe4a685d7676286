//! On-disk storage for uploaded images
//!
//! Files are written under a single uploads directory using their
//! sanitized original name. A later upload with the same name replaces
//! the earlier file; nothing is ever cleaned up.

use std::fs;
use std::path::{Path, PathBuf};
use log::info;

use crate::color::errors::{PaletteError, PaletteResult};
use crate::utils::filename_utils::secure_filename;

/// Directory-backed store for uploaded files
#[derive(Debug, Clone)]
pub struct UploadStore {
    /// Directory holding the uploaded files
    dir: PathBuf,
}

impl UploadStore {
    /// Open the store, creating the directory if it does not exist
    pub fn new(dir: impl Into<PathBuf>) -> PaletteResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(UploadStore { dir })
    }

    /// Directory the files are stored in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write uploaded bytes under the sanitized file name
    ///
    /// # Returns
    /// The stored name and its full path
    pub fn save(&self, filename: &str, bytes: &[u8]) -> PaletteResult<(String, PathBuf)> {
        let name = secure_filename(filename).ok_or_else(|| {
            PaletteError::InvalidArgument(format!("File name {:?} has no usable characters", filename))
        })?;

        let path = self.dir.join(&name);
        fs::write(&path, bytes)?;
        info!("Stored upload {} ({} bytes)", path.display(), bytes.len());

        Ok((name, path))
    }

    /// Resolve a stored file by name
    ///
    /// The name is sanitized again so requests cannot escape the directory.
    ///
    /// # Returns
    /// The path if a file with that name exists
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        let safe = secure_filename(name)?;
        if safe != name {
            return None;
        }

        let path = self.dir.join(safe);
        path.is_file().then_some(path)
    }
}
