use crate::application::dto::{RunReport, RunRequest, StyleOutcome};
use crate::application::factories::ExampleFactory;
use crate::io_examples::domain::WriteMode;
use crate::ports::outbound::{
    DirectoryProvisioner, DirectoryStatus, IoExample, OutputPresenter, ProgressReporter,
};
use crate::shared::Result;

/// RunExamplesUseCase - writes and reads back every requested example
///
/// The output directory is prepared first; then each style's write/read pair
/// runs in request order. The first failure stops the run and files written
/// before it are left in place.
///
/// # Type Parameters
/// * `DP` - DirectoryProvisioner implementation
/// * `OP` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct RunExamplesUseCase<DP, OP, PR> {
    directory: DP,
    presenter: OP,
    progress_reporter: PR,
}

impl<DP, OP, PR> RunExamplesUseCase<DP, OP, PR>
where
    DP: DirectoryProvisioner,
    OP: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new RunExamplesUseCase with injected dependencies
    pub fn new(directory: DP, presenter: OP, progress_reporter: PR) -> Self {
        Self {
            directory,
            presenter,
            progress_reporter,
        }
    }

    /// Executes the run
    ///
    /// # Errors
    /// Returns the first error raised by the bootstrap, the cleanup or an example.
    /// `IoExampleError::DirectoryAlreadyExists` is reachable through `downcast_ref`.
    pub fn execute(&self, request: RunRequest) -> Result<RunReport> {
        // Build every example up front so bad settings fail before touching the disk
        let factory = ExampleFactory::new(request.encoding, request.chunk_size);
        let examples = request
            .styles
            .iter()
            .map(|style| factory.create(*style))
            .collect::<Result<Vec<_>>>()?;

        let directory = self.prepare_directory(&request)?;
        let removed_files = if request.fresh {
            self.remove_example_files(&request)?
        } else {
            0
        };

        let mut outcomes = Vec::with_capacity(examples.len());
        for example in &examples {
            let label = example.style().label();
            let outcome = match self.run_example(example.as_ref(), &request) {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ The {} example failed, skipping the remaining examples",
                        label
                    ));
                    return Err(e.context(format!("The {} example failed", label)));
                }
            };
            outcomes.push(outcome);
        }

        let report = RunReport {
            directory,
            removed_files,
            outcomes,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ {} example(s) written and read back ({} bytes written) in {}",
            report.outcomes.len(),
            report.total_bytes_written(),
            request.output_dir.display()
        ));

        Ok(report)
    }

    fn prepare_directory(&self, request: &RunRequest) -> Result<DirectoryStatus> {
        self.progress_reporter.report(&format!(
            "📁 Preparing output directory: {}",
            request.output_dir.display()
        ));

        let status = self.directory.ensure_directory(&request.output_dir)?;
        match status {
            DirectoryStatus::Created => self.progress_reporter.report("✅ Directory created"),
            DirectoryStatus::AlreadyPresent => self
                .progress_reporter
                .report("ℹ️  Directory already present, skipping creation"),
        }
        Ok(status)
    }

    fn remove_example_files(&self, request: &RunRequest) -> Result<usize> {
        let mut removed = 0;
        for style in &request.styles {
            if self
                .directory
                .remove_file_if_present(&request.file_path(*style))?
            {
                removed += 1;
            }
        }

        if removed > 0 {
            self.progress_reporter
                .report(&format!("🧹 Removed {} existing example file(s)", removed));
        }
        Ok(removed)
    }

    fn run_example(&self, example: &dyn IoExample, request: &RunRequest) -> Result<StyleOutcome> {
        let style = example.style();
        let path = request.file_path(style);

        let bytes_written = example.write(&path)?;
        let mode = match style.write_mode() {
            WriteMode::Overwrite => "overwritten",
            WriteMode::Append => "appended",
        };
        self.presenter.banner(&format!(
            "== {} file {}: {} ({} bytes) ==",
            style.label(),
            mode,
            path.display(),
            bytes_written
        ))?;

        self.presenter
            .banner(&format!("-- reading {} --", style.label()))?;
        let read_back = example.read(&path, &self.presenter, &self.progress_reporter)?;
        self.presenter
            .banner(&format!("-- end of {} --", style.label()))?;

        Ok(StyleOutcome {
            style,
            path,
            bytes_written,
            read_back,
        })
    }
}
