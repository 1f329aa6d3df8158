use crate::shared::Result;
use std::path::Path;

/// Outcome of [`DirectoryProvisioner::ensure_directory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Created,
    AlreadyPresent,
}

/// DirectoryProvisioner port for preparing the output directory
pub trait DirectoryProvisioner {
    /// Creates `path` as a directory unless it already is one.
    ///
    /// # Errors
    /// Returns `IoExampleError::DirectoryAlreadyExists` if the path is taken by a
    /// non-directory entry, or the underlying I/O error otherwise.
    fn ensure_directory(&self, path: &Path) -> Result<DirectoryStatus>;

    /// Removes a file if it exists. Returns whether anything was removed.
    fn remove_file_if_present(&self, path: &Path) -> Result<bool>;
}
