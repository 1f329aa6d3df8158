mod byte_formatter;
mod chunk_decoder;

pub use byte_formatter::format_byte_values;
pub use chunk_decoder::ChunkDecoder;
