use crate::io_examples::domain::TextEncoding;

/// UTF-8 replacement character for undecodable input
const REPLACEMENT: char = '\u{FFFD}';

/// Incremental decoder for text that arrives in arbitrary byte chunks.
///
/// A UTF-8 sequence cut by a chunk boundary is held back and completed by the
/// next chunk, so the concatenated output equals decoding the whole input at once.
#[derive(Debug)]
pub struct ChunkDecoder {
    encoding: TextEncoding,
    pending: Vec<u8>,
}

impl ChunkDecoder {
    pub fn new(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            pending: Vec::new(),
        }
    }

    /// Decodes as much of `chunk` (plus any held-back bytes) as is complete.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        match self.encoding {
            TextEncoding::Latin1 => self.encoding.decode(chunk),
            TextEncoding::Utf8 => {
                self.pending.extend_from_slice(chunk);
                let mut out = String::with_capacity(self.pending.len());
                let mut rest: &[u8] = &self.pending;

                loop {
                    let error = match std::str::from_utf8(rest) {
                        Ok(valid) => {
                            out.push_str(valid);
                            rest = &[];
                            break;
                        }
                        Err(e) => e,
                    };
                    let (valid, after) = rest.split_at(error.valid_up_to());
                    if let Ok(valid) = std::str::from_utf8(valid) {
                        out.push_str(valid);
                    }
                    match error.error_len() {
                        Some(len) => {
                            out.push(REPLACEMENT);
                            rest = &after[len..];
                        }
                        // incomplete sequence at the end of the input
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }

                self.pending = rest.to_vec();
                out
            }
        }
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Flushes held-back bytes at end of input; a truncated sequence becomes U+FFFD.
    pub fn finish(self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.encoding.decode(&self.pending)
        }
    }
}
