use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Argument errors exit with 2 from clap before any of these apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested example ran, or the run stopped on an informational condition
    Success = 0,
    /// I/O failure, invalid configuration, security violation
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the example runner.
///
/// Uses thiserror to derive Display and Error traits. Messages name the
/// offending path and end with a hint for the user.
#[derive(Debug, Error)]
pub enum IoExampleError {
    /// The output directory path is taken by something that is not a directory.
    #[error("Output directory already exists as a non-directory entry: {path}\n\n💡 Hint: Remove the entry or choose another directory with --output-dir")]
    DirectoryAlreadyExists { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Invalid configuration or CLI value
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl IoExampleError {
    /// Whether this error is informational and should not fail the process.
    pub fn is_informational(&self) -> bool {
        matches!(self, IoExampleError::DirectoryAlreadyExists { .. })
    }
}
