//! io-styles - four ways to write a file and read it back
//!
//! Each I/O style writes a fixed payload to its own file in an output
//! directory and reads it straight back, printing what it finds:
//!
//! - **raw bytes**: whole-file byte array write and read
//! - **buffered text**: buffered writer, lazy buffered line reader
//! - **byte stream**: appending buffered output stream, decoding line reader
//! - **channel**: one-buffer append through a seekable channel, chunked read
//!
//! # Architecture
//!
//! - **Domain Layer** (`io_examples`): styles, payloads, encodings, chunk decoding
//! - **Application Layer** (`application`): the run use case and its DTOs
//! - **Ports** (`ports`): interfaces for file system and console access
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types and filesystem guards
//!
//! # Example
//!
//! ```no_run
//! use io_styles::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = RunExamplesUseCase::new(
//!     FileSystemDirectory::new(),
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let report = use_case.execute(RunRequest::default())?;
//! println!("{} bytes written", report.total_bytes_written());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod io_examples;
pub mod ports;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::{
        BufferedTextExample, ByteStreamExample, ChannelExample, FileSystemDirectory,
        RawBytesExample,
    };
    pub use crate::application::dto::{RunReport, RunRequest, StyleOutcome};
    pub use crate::application::factories::ExampleFactory;
    pub use crate::application::use_cases::RunExamplesUseCase;
    pub use crate::io_examples::domain::{IoStyle, Payload, TextEncoding, WriteMode};
    pub use crate::ports::outbound::{
        DirectoryProvisioner, DirectoryStatus, IoExample, OutputPresenter, ProgressReporter,
        ReadBack,
    };
    pub use crate::shared::error::{ExitCode, IoExampleError};
    pub use crate::shared::Result;
}
