/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod directory_provisioner;
pub mod io_example;
pub mod output_presenter;
pub mod progress_reporter;

pub use directory_provisioner::{DirectoryProvisioner, DirectoryStatus};
pub use io_example::{IoExample, ReadBack};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
