use clap::builder::RangedU64ValueParser;
use clap::Parser;
use io_styles::adapters::outbound::filesystem::MAX_CHUNK_SIZE;
use io_styles::io_examples::domain::{IoStyle, TextEncoding};
use std::path::PathBuf;

/// Write example files with four file I/O styles and read them back
#[derive(Parser, Debug)]
#[command(name = "io-styles")]
#[command(version)]
#[command(
    about = "Write example files with four file I/O styles and read them back",
    long_about = None
)]
pub struct Args {
    /// Directory for the example files [default: example-files]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Text encoding for the text styles: utf-8 or latin-1 [default: utf-8]
    #[arg(short, long)]
    pub encoding: Option<TextEncoding>,

    /// Buffer size in bytes for the chunked channel read, at most 1 MiB [default: 10]
    #[arg(
        long,
        value_name = "BYTES",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_CHUNK_SIZE as u64)
    )]
    pub chunk_size: Option<usize>,

    /// Run only this style (raw-bytes, buffered-text, byte-stream, channel)
    /// Can be specified multiple times: -s raw-bytes -s channel
    #[arg(short, long = "style", value_name = "STYLE")]
    pub styles: Vec<IoStyle>,

    /// Config file path (defaults to io-styles.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Delete the example files before running so appended files start empty
    #[arg(long)]
    pub fresh: bool,

    /// Only print example contents and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
