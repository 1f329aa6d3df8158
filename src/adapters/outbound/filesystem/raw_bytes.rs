use super::{read_error, write_error};
use crate::io_examples::domain::{IoStyle, Payload, TextEncoding};
use crate::io_examples::services::format_byte_values;
use crate::ports::outbound::{IoExample, OutputPresenter, ProgressReporter, ReadBack};
use crate::shared::security::{
    validate_file_size, validate_regular_file, validate_write_target, MAX_FILE_SIZE,
};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Whole-file byte array I/O: one call writes the file, one call reads it back.
pub struct RawBytesExample {
    payload: Vec<u8>,
}

impl RawBytesExample {
    pub fn new() -> Self {
        // byte payloads are stored verbatim whatever the encoding
        let payload = Payload::for_style(IoStyle::RawBytes).to_bytes(TextEncoding::default());
        Self { payload }
    }
}

impl Default for RawBytesExample {
    fn default() -> Self {
        Self::new()
    }
}

impl IoExample for RawBytesExample {
    fn style(&self) -> IoStyle {
        IoStyle::RawBytes
    }

    fn write(&self, path: &Path) -> Result<usize> {
        validate_write_target(path)?;
        fs::write(path, &self.payload).map_err(write_error(path))?;
        Ok(self.payload.len())
    }

    fn read(
        &self,
        path: &Path,
        presenter: &dyn OutputPresenter,
        _progress: &dyn ProgressReporter,
    ) -> Result<ReadBack> {
        let size = validate_regular_file(path)?;
        validate_file_size(size, path, MAX_FILE_SIZE)?;

        let bytes = fs::read(path).map_err(read_error(path))?;
        presenter.line(&format_byte_values(&bytes))?;
        Ok(ReadBack::Bytes(bytes))
    }
}
