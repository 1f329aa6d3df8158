use crate::io_examples::domain::{IoStyle, TextEncoding};

const RAW_BYTES: &[u8] = b"Hello! This message was stored one byte at a time :D";

const BUFFERED_TEXT: &str = "Buffered writers collect small writes before they reach the disk.\n\
Buffered readers hand the text back one line at a time.";

const STREAM_TEXT: &str =
    "This sentence was turned into bytes first and then appended through a byte stream.";

const CHANNEL_TEXT: &str = "Channels move whole buffers: señal, café, naïve.";

/// Fixed content each style writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Bytes(&'static [u8]),
    Text(&'static str),
}

impl Payload {
    pub fn for_style(style: IoStyle) -> Self {
        match style {
            IoStyle::RawBytes => Payload::Bytes(RAW_BYTES),
            IoStyle::BufferedText => Payload::Text(BUFFERED_TEXT),
            IoStyle::ByteStream => Payload::Text(STREAM_TEXT),
            IoStyle::Channel => Payload::Text(CHANNEL_TEXT),
        }
    }

    /// The bytes that end up on disk. Byte payloads ignore the encoding.
    pub fn to_bytes(&self, encoding: TextEncoding) -> Vec<u8> {
        match self {
            Payload::Bytes(bytes) => bytes.to_vec(),
            Payload::Text(text) => encoding.encode(text),
        }
    }

    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            Payload::Bytes(_) => None,
            Payload::Text(text) => Some(text),
        }
    }
}
