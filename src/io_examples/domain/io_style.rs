use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The four file I/O techniques demonstrated by the runner.
///
/// Declaration order is the order a full run executes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum IoStyle {
    /// Whole-file byte array write and read
    RawBytes,
    /// Buffered character writer and line reader
    BufferedText,
    /// Appending byte stream with a decoding line reader on top
    ByteStream,
    /// Seekable channel written from one buffer, read in fixed-size chunks
    Channel,
}

/// How a style's write step treats existing file content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Overwrite,
    Append,
}

impl IoStyle {
    pub const ALL: [IoStyle; 4] = [
        IoStyle::RawBytes,
        IoStyle::BufferedText,
        IoStyle::ByteStream,
        IoStyle::Channel,
    ];

    /// File name inside the output directory
    pub fn file_name(&self) -> &'static str {
        match self {
            IoStyle::RawBytes => "bytes.txt",
            IoStyle::BufferedText => "buffered.txt",
            IoStyle::ByteStream => "stream.txt",
            IoStyle::Channel => "channel.txt",
        }
    }

    /// Human readable name used in console banners
    pub fn label(&self) -> &'static str {
        match self {
            IoStyle::RawBytes => "raw bytes",
            IoStyle::BufferedText => "buffered text",
            IoStyle::ByteStream => "byte stream",
            IoStyle::Channel => "channel",
        }
    }

    pub fn write_mode(&self) -> WriteMode {
        match self {
            IoStyle::RawBytes | IoStyle::BufferedText => WriteMode::Overwrite,
            IoStyle::ByteStream | IoStyle::Channel => WriteMode::Append,
        }
    }

    fn cli_name(&self) -> &'static str {
        match self {
            IoStyle::RawBytes => "raw-bytes",
            IoStyle::BufferedText => "buffered-text",
            IoStyle::ByteStream => "byte-stream",
            IoStyle::Channel => "channel",
        }
    }
}

impl fmt::Display for IoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cli_name())
    }
}

impl FromStr for IoStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw-bytes" | "bytes" => Ok(IoStyle::RawBytes),
            "buffered-text" | "buffered" => Ok(IoStyle::BufferedText),
            "byte-stream" | "stream" => Ok(IoStyle::ByteStream),
            "channel" => Ok(IoStyle::Channel),
            _ => Err(format!(
                "Invalid style: {}. Please specify 'raw-bytes', 'buffered-text', 'byte-stream' or 'channel'",
                s
            )),
        }
    }
}

impl TryFrom<String> for IoStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
