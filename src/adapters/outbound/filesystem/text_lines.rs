use crate::io_examples::domain::TextEncoding;
use std::io::{self, BufRead};

/// Lazy line iterator over any buffered byte source.
///
/// Lines end at `\n` (a preceding `\r` is dropped too) and are decoded with the
/// given encoding. The iterator ends at end of input; the final line may lack
/// a terminator.
pub struct TextLines<R> {
    reader: R,
    encoding: TextEncoding,
    buf: Vec<u8>,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R, encoding: TextEncoding) -> Self {
        Self {
            reader,
            encoding,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(self.encoding.decode(&self.buf)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
