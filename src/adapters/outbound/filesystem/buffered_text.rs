use super::{read_error, write_error, TextLines};
use crate::io_examples::domain::{IoStyle, Payload, TextEncoding};
use crate::ports::outbound::{IoExample, OutputPresenter, ProgressReporter, ReadBack};
use crate::shared::security::validate_write_target;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Buffered character I/O with an explicit encoding.
///
/// The write truncates the file; the read yields lines lazily through a
/// buffered reader.
pub struct BufferedTextExample {
    encoding: TextEncoding,
    text: &'static str,
}

impl BufferedTextExample {
    pub fn new(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            text: Payload::for_style(IoStyle::BufferedText)
                .as_text()
                .unwrap_or_default(),
        }
    }

    /// Opens `path` for lazy line-by-line reading with this example's encoding.
    ///
    /// The file handle lives inside the returned iterator and is closed when it is dropped.
    pub fn open_lines(&self, path: &Path) -> Result<TextLines<BufReader<File>>> {
        let file = File::open(path).map_err(read_error(path))?;
        Ok(TextLines::new(BufReader::new(file), self.encoding))
    }
}

impl IoExample for BufferedTextExample {
    fn style(&self) -> IoStyle {
        IoStyle::BufferedText
    }

    fn write(&self, path: &Path) -> Result<usize> {
        validate_write_target(path)?;
        let data = self.encoding.encode(self.text);

        let file = File::create(path).map_err(write_error(path))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&data).map_err(write_error(path))?;
        // Drop would swallow a failed final flush
        writer.flush().map_err(write_error(path))?;

        Ok(data.len())
    }

    fn read(
        &self,
        path: &Path,
        presenter: &dyn OutputPresenter,
        _progress: &dyn ProgressReporter,
    ) -> Result<ReadBack> {
        let mut lines = Vec::new();
        for line in self.open_lines(path)? {
            let line = line.map_err(read_error(path))?;
            presenter.line(&line)?;
            lines.push(line);
        }
        Ok(ReadBack::Lines(lines))
    }
}
