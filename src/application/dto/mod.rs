/// Data Transfer Objects for application layer
///
/// DTOs carry the resolved run settings in and the per-style results out.
mod run_report;
mod run_request;

pub use run_report::{RunReport, StyleOutcome};
pub use run_request::RunRequest;
