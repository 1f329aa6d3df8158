pub mod io_style;
pub mod payload;
pub mod text_encoding;

pub use io_style::{IoStyle, WriteMode};
pub use payload::Payload;
pub use text_encoding::TextEncoding;
