use crate::io_examples::domain::IoStyle;
use crate::ports::outbound::{OutputPresenter, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// What a read step got back from its file, in the shape the style produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadBack {
    /// Whole-file byte array
    Bytes(Vec<u8>),
    /// Lines without their terminators
    Lines(Vec<String>),
    /// Decoded pieces in read order, one per chunk
    Chunks(Vec<String>),
}

impl ReadBack {
    /// The text read back with line breaks and chunk boundaries removed.
    /// `None` for byte read-backs.
    pub fn joined_text(&self) -> Option<String> {
        match self {
            ReadBack::Bytes(_) => None,
            ReadBack::Lines(lines) => Some(lines.concat()),
            ReadBack::Chunks(chunks) => Some(chunks.concat()),
        }
    }
}

/// IoExample port: one write/read pair demonstrating an I/O style
///
/// Each implementation owns the resource it opens for the duration of a single
/// call and releases it before returning, on success and on error.
pub trait IoExample {
    fn style(&self) -> IoStyle;

    /// Writes the style's payload to `path`
    ///
    /// # Returns
    /// Number of bytes written
    fn write(&self, path: &Path) -> Result<usize>;

    /// Reads `path` back, presenting the content as it is read
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read, or if presenting fails
    fn read(
        &self,
        path: &Path,
        presenter: &dyn OutputPresenter,
        progress: &dyn ProgressReporter,
    ) -> Result<ReadBack>;
}
