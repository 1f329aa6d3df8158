mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, resolve_request};
use io_styles::prelude::*;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    let exit_code = match run(&args) {
        Ok(()) => ExitCode::Success,
        Err(e) if is_informational(&e) => {
            eprintln!("\n⚠️  {}", e);
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let request = resolve_request(args, config.as_ref());

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = RunExamplesUseCase::new(
        FileSystemDirectory::new(),
        StdoutPresenter::new(),
        progress_reporter,
    );

    use_case.execute(request)?;
    Ok(())
}

/// The directory-already-exists case stops the run but is not a failure.
fn is_informational(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<IoExampleError>()
        .is_some_and(IoExampleError::is_informational)
}
