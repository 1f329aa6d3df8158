use super::{read_error, write_error, TextLines};
use crate::io_examples::domain::{IoStyle, Payload, TextEncoding};
use crate::ports::outbound::{IoExample, OutputPresenter, ProgressReporter, ReadBack};
use crate::shared::security::validate_write_target;
use crate::shared::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Byte-stream I/O: text is encoded up front and appended through a buffered
/// output stream; reading layers decoding and line buffering over a raw input stream.
pub struct ByteStreamExample {
    encoding: TextEncoding,
    text: &'static str,
}

impl ByteStreamExample {
    pub fn new(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            text: Payload::for_style(IoStyle::ByteStream)
                .as_text()
                .unwrap_or_default(),
        }
    }
}

impl IoExample for ByteStreamExample {
    fn style(&self) -> IoStyle {
        IoStyle::ByteStream
    }

    fn write(&self, path: &Path) -> Result<usize> {
        validate_write_target(path)?;
        let data = self.encoding.encode(self.text);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_error(path))?;
        let mut out = BufWriter::new(file);
        out.write_all(&data).map_err(write_error(path))?;
        out.flush().map_err(write_error(path))?;

        Ok(data.len())
    }

    fn read(
        &self,
        path: &Path,
        presenter: &dyn OutputPresenter,
        _progress: &dyn ProgressReporter,
    ) -> Result<ReadBack> {
        let input: Box<dyn Read> = Box::new(File::open(path).map_err(read_error(path))?);
        let reader = TextLines::new(BufReader::new(input), self.encoding);

        let mut lines = Vec::new();
        for line in reader {
            let line = line.map_err(read_error(path))?;
            presenter.line(&line)?;
            lines.push(line);
        }
        Ok(ReadBack::Lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingPresenter, RecordingReporter};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_second_write_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stream.txt");
        let example = ByteStreamExample::new(TextEncoding::Utf8);

        example.write(&path).unwrap();
        example.write(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{}{}", example.text, example.text)
        );
    }

    #[test]
    fn test_write_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stream.txt");

        let written = ByteStreamExample::new(TextEncoding::Utf8)
            .write(&path)
            .unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len() as usize, written);
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stream.txt");
        let example = ByteStreamExample::new(TextEncoding::Latin1);
        let presenter = RecordingPresenter::new();

        example.write(&path).unwrap();
        let read_back = example
            .read(&path, &presenter, &RecordingReporter::new())
            .unwrap();

        assert_eq!(read_back, ReadBack::Lines(vec![example.text.to_string()]));
        assert_eq!(presenter.lines.borrow().len(), 1);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("stream.txt");

        let result = ByteStreamExample::new(TextEncoding::Utf8).write(&path);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to write to file"));
    }
}
