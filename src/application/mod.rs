/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the example adapters through ports and
/// exposes the run as a single use case.
pub mod dto;
pub mod factories;
pub mod use_cases;
