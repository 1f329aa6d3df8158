use super::{read_error, write_error};
use crate::io_examples::domain::{IoStyle, Payload, TextEncoding};
use crate::io_examples::services::ChunkDecoder;
use crate::ports::outbound::{IoExample, OutputPresenter, ProgressReporter, ReadBack};
use crate::shared::error::IoExampleError;
use crate::shared::security::validate_write_target;
use crate::shared::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, Write};
use std::path::Path;

/// Bytes pulled from the channel per read
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Largest accepted chunk size (1 MiB)
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Fixed-capacity byte buffer filled by [`SeekableChannel::read`].
#[derive(Debug)]
pub struct ByteBuffer {
    data: Box<[u8]>,
    len: usize,
}

impl ByteBuffer {
    /// Empty buffer able to hold `capacity` bytes
    pub fn allocate(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Full buffer whose capacity is exactly `bytes.len()`
    pub fn wrap(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self {
            data: bytes.into_boxed_slice(),
            len,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The bytes currently held
    pub fn filled(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Forgets the content so the next read starts at the front
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

/// A file handle with a position cursor, read and written a buffer at a time.
///
/// Reads block until data is available; a local file only reports zero bytes
/// at end of file, which is what the chunked read loop relies on.
pub struct SeekableChannel {
    file: File,
}

impl SeekableChannel {
    pub fn open(path: &Path, options: &OpenOptions) -> io::Result<Self> {
        Ok(Self {
            file: options.open(path)?,
        })
    }

    /// Fills `buf` from the current position. Returns the number of bytes read;
    /// zero means end of file.
    pub fn read(&mut self, buf: &mut ByteBuffer) -> io::Result<usize> {
        buf.clear();
        let n = read_retrying(&mut self.file, &mut buf.data)?;
        buf.len = n;
        Ok(n)
    }

    /// Writes the whole content of `buf`.
    pub fn write(&mut self, buf: &ByteBuffer) -> io::Result<usize> {
        self.file.write_all(buf.filled())?;
        Ok(buf.filled().len())
    }

    pub fn position(&mut self) -> io::Result<u64> {
        self.file.stream_position()
    }

    pub fn size(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }
}

/// Single read that retries when interrupted by a signal
fn read_retrying<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}

/// Channel/buffer I/O: the payload is appended from a single buffer, then read
/// back in fixed-size chunks that are decoded and printed one by one.
pub struct ChannelExample {
    encoding: TextEncoding,
    chunk_size: usize,
    text: &'static str,
}

impl ChannelExample {
    /// # Errors
    /// Returns a validation error if `chunk_size` is zero or above [`MAX_CHUNK_SIZE`]
    pub fn new(encoding: TextEncoding, chunk_size: usize) -> Result<Self> {
        if !(1..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            return Err(IoExampleError::Validation {
                message: format!(
                    "chunk size must be between 1 and {} bytes, got {}",
                    MAX_CHUNK_SIZE, chunk_size
                ),
            }
            .into());
        }

        Ok(Self {
            encoding,
            chunk_size,
            text: Payload::for_style(IoStyle::Channel)
                .as_text()
                .unwrap_or_default(),
        })
    }
}

impl IoExample for ChannelExample {
    fn style(&self) -> IoStyle {
        IoStyle::Channel
    }

    fn write(&self, path: &Path) -> Result<usize> {
        validate_write_target(path)?;

        let mut options = OpenOptions::new();
        options.append(true).create(true);

        let buffer = ByteBuffer::wrap(self.encoding.encode(self.text));
        let mut channel = SeekableChannel::open(path, &options).map_err(write_error(path))?;
        channel.write(&buffer).map_err(write_error(path))
    }

    fn read(
        &self,
        path: &Path,
        presenter: &dyn OutputPresenter,
        progress: &dyn ProgressReporter,
    ) -> Result<ReadBack> {
        let mut options = OpenOptions::new();
        options.read(true);

        let mut channel = SeekableChannel::open(path, &options).map_err(read_error(path))?;
        let total = channel.size().map_err(read_error(path))?;
        let capacity = match usize::try_from(total) {
            Ok(total) => total.min(self.chunk_size),
            Err(_) => self.chunk_size,
        };
        let mut buffer = ByteBuffer::allocate(capacity);
        let mut decoder = ChunkDecoder::new(self.encoding);
        let mut chunks = Vec::new();

        while channel.read(&mut buffer).map_err(read_error(path))? > 0 {
            let piece = decoder.decode(buffer.filled());
            presenter.text(&piece)?;
            chunks.push(piece);

            let position = channel.position().map_err(read_error(path))?;
            progress.report_bytes(position, total, Some(path_label(path)));
            buffer.clear();
        }

        let tail = decoder.finish();
        if !tail.is_empty() {
            presenter.text(&tail)?;
            chunks.push(tail);
        }
        presenter.line("")?;
        progress.finish_bytes();

        Ok(ReadBack::Chunks(chunks))
    }
}

fn path_label(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("channel")
}
