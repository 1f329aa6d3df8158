use crate::shared::error::IoExampleError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Maximum size accepted by whole-file reads (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a write target that already exists as a symbolic link.
///
/// A missing target is fine: the write creates it.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not what it points to.
pub fn validate_write_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(IoExampleError::SecurityError {
            path: path.to_path_buf(),
            reason: "Writing through a symbolic link is not allowed".to_string(),
            hint: "Remove the link or run with --fresh".to_string(),
        }
        .into()),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(IoExampleError::FileWriteError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        }
        .into()),
    }
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// Returns the file size on success so callers can apply [`validate_file_size`].
pub fn validate_regular_file(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| IoExampleError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(IoExampleError::SecurityError {
            path: path.to_path_buf(),
            reason: "Reading through a symbolic link is not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(IoExampleError::FileReadError {
            path: path.to_path_buf(),
            details: "not a regular file".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(IoExampleError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Run with --fresh to start from empty example files".to_string(),
        }
        .into());
    }
    Ok(())
}
