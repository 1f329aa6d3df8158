use crate::ports::outbound::{DirectoryProvisioner, DirectoryStatus};
use crate::shared::error::IoExampleError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// FileSystemDirectory adapter for the output directory bootstrap
pub struct FileSystemDirectory;

impl FileSystemDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryProvisioner for FileSystemDirectory {
    fn ensure_directory(&self, path: &Path) -> Result<DirectoryStatus> {
        if path.is_dir() {
            return Ok(DirectoryStatus::AlreadyPresent);
        }

        match fs::create_dir(path) {
            Ok(()) => Ok(DirectoryStatus::Created),
            // Another process may have created it since the check above
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => existing_entry_status(path),
            Err(e) => Err(IoExampleError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to create directory: {}", e),
            }
            .into()),
        }
    }

    fn remove_file_if_present(&self, path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(IoExampleError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to remove file: {}", e),
            }
            .into()),
        }
    }
}

/// Status of a path that `create_dir` reported as already existing
fn existing_entry_status(path: &Path) -> Result<DirectoryStatus> {
    if path.is_dir() {
        Ok(DirectoryStatus::AlreadyPresent)
    } else {
        Err(IoExampleError::DirectoryAlreadyExists {
            path: path.to_path_buf(),
        }
        .into())
    }
}
