use crate::adapters::outbound::filesystem::{
    BufferedTextExample, ByteStreamExample, ChannelExample, RawBytesExample,
};
use crate::io_examples::domain::{IoStyle, TextEncoding};
use crate::ports::outbound::IoExample;
use crate::shared::Result;

/// Factory for creating the example adapter behind each I/O style
///
/// Keeps the use case unaware of the concrete filesystem adapters.
pub struct ExampleFactory {
    encoding: TextEncoding,
    chunk_size: usize,
}

impl ExampleFactory {
    pub fn new(encoding: TextEncoding, chunk_size: usize) -> Self {
        Self {
            encoding,
            chunk_size,
        }
    }

    /// Creates the example for `style`
    ///
    /// # Examples
    /// ```
    /// use io_styles::application::factories::ExampleFactory;
    /// use io_styles::io_examples::domain::{IoStyle, TextEncoding};
    ///
    /// let factory = ExampleFactory::new(TextEncoding::Utf8, 10);
    /// let example = factory.create(IoStyle::Channel).unwrap();
    /// assert_eq!(example.style(), IoStyle::Channel);
    /// ```
    ///
    /// # Errors
    /// Returns a validation error for a zero chunk size when `style` is the channel
    pub fn create(&self, style: IoStyle) -> Result<Box<dyn IoExample>> {
        Ok(match style {
            IoStyle::RawBytes => Box::new(RawBytesExample::new()),
            IoStyle::BufferedText => Box::new(BufferedTextExample::new(self.encoding)),
            IoStyle::ByteStream => Box::new(ByteStreamExample::new(self.encoding)),
            IoStyle::Channel => Box::new(ChannelExample::new(self.encoding, self.chunk_size)?),
        })
    }
}
