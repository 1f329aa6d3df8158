/// Filesystem adapters: output directory bootstrap and the four I/O styles
mod buffered_text;
mod byte_stream;
mod channel;
mod directory;
mod raw_bytes;
mod text_lines;

pub use buffered_text::BufferedTextExample;
pub use byte_stream::ByteStreamExample;
pub use channel::{
    ByteBuffer, ChannelExample, SeekableChannel, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE,
};
pub use directory::FileSystemDirectory;
pub use raw_bytes::RawBytesExample;
pub use text_lines::TextLines;

use crate::shared::error::IoExampleError;
use std::io;
use std::path::Path;

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> anyhow::Error + '_ {
    move |e| {
        IoExampleError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    }
}

fn read_error(path: &Path) -> impl FnOnce(io::Error) -> anyhow::Error + '_ {
    move |e| {
        IoExampleError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    }
}
