//! Mod root directory handle

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::info::{MOD_INFO_FILE, ModInfo};
use crate::scan;

/// A mod directory opened for validation or packaging.
///
/// Opening checks that the root exists and loads the `mod.info` descriptor
/// when one is present. A missing descriptor is not an error here - the
/// validation engine reports it as an issue so that packaging still works
/// for descriptor-less trees.
#[derive(Debug)]
pub struct ModRoot {
    path: PathBuf,
    info: Option<ModInfo>,
}

impl ModRoot {
    /// Open a mod directory.
    ///
    /// Fails if `path` does not exist or its descriptor cannot be read as
    /// text.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::ModRootNotFound { path });
        }

        let descriptor = path.join(MOD_INFO_FILE);
        let info = if descriptor.exists() {
            Some(ModInfo::load(&descriptor)?)
        } else {
            None
        };

        Ok(Self { path, info })
    }

    /// The root directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded descriptor, if the root has one.
    #[must_use]
    pub fn info(&self) -> Option<&ModInfo> {
        self.info.as_ref()
    }

    /// Directory name of the root, used as the fallback artifact name.
    #[must_use]
    pub fn dir_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// All files under the root, relative and sorted.
    pub fn files(&self) -> Result<Vec<String>> {
        scan::list_files(&self.path)
    }

    /// Total content size in bytes.
    pub fn total_size(&self) -> Result<u64> {
        scan::total_size(&self.path)
    }
}
