use crate::adapters::outbound::filesystem::DEFAULT_CHUNK_SIZE;
use crate::io_examples::domain::{IoStyle, TextEncoding};
use std::path::{Path, PathBuf};

/// Directory created next to the working directory when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "example-files";

/// RunRequest - resolved settings for one run of the examples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Directory the example files live in
    pub output_dir: PathBuf,
    /// Encoding for every text-based style
    pub encoding: TextEncoding,
    /// Buffer capacity for the channel read
    pub chunk_size: usize,
    /// Styles to run, in order
    pub styles: Vec<IoStyle>,
    /// Delete the example files before running
    pub fresh: bool,
}

impl RunRequest {
    pub fn new(
        output_dir: PathBuf,
        encoding: TextEncoding,
        chunk_size: usize,
        styles: Vec<IoStyle>,
        fresh: bool,
    ) -> Self {
        Self {
            output_dir,
            encoding,
            chunk_size,
            styles,
            fresh,
        }
    }

    pub fn file_path(&self, style: IoStyle) -> PathBuf {
        self.output_dir.join(style.file_name())
    }

    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }
}

impl Default for RunRequest {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_OUTPUT_DIR),
            TextEncoding::default(),
            DEFAULT_CHUNK_SIZE,
            IoStyle::ALL.to_vec(),
            false,
        )
    }
}
