/// Use cases module containing application orchestration
mod run_examples;

pub use run_examples::RunExamplesUseCase;
