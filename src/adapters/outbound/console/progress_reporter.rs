use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;
use std::io::{self, IsTerminal};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Status lines are printed with `eprintln!`; chunked transfers get an
/// indicatif byte bar that is cleared once the transfer ends.
///
/// The bar is not drawn when stdout is a terminal: chunk text is printed
/// without line breaks, and redrawing the bar on the shared screen line
/// would erase it.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
    byte_bar: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::with_options(false, draws_byte_bar(io::stdout().is_terminal()))
    }

    /// Reporter that only prints errors
    pub fn quiet() -> Self {
        Self::with_options(true, false)
    }

    fn with_options(quiet: bool, byte_bar: bool) -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet,
            byte_bar,
        }
    }

    fn get_or_create_progress_bar(&self, total: u64) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.clone()
        } else {
            let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
            if let Ok(style) = ProgressStyle::default_bar()
                .template("   {spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} - {msg}")
            {
                pb.set_style(style.progress_chars("=>-"));
            }
            *pb_option = Some(pb.clone());
            pb
        }
    }
}

/// Whether the byte bar may share the screen with the example output
fn draws_byte_bar(stdout_is_terminal: bool) -> bool {
    !stdout_is_terminal
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_bytes(&self, done: u64, total: u64, message: Option<&str>) {
        if self.quiet || !self.byte_bar {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(done);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn finish_bytes(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_bytes();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_bytes();
        if !self.quiet {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::with_options(false, true);
        reporter.report("Test message");
        reporter.report_bytes(5, 10, Some("channel.txt"));
        assert!(reporter.progress_bar.borrow().is_some());
        reporter.finish_bytes();
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_new_bar_per_transfer() {
        let reporter = StderrProgressReporter::with_options(false, true);
        reporter.report_bytes(10, 20, None);
        reporter.finish_bytes();
        reporter.report_bytes(3, 7, None);
        let length = reporter
            .progress_bar
            .borrow()
            .as_ref()
            .and_then(|pb| pb.length());
        assert_eq!(length, Some(7));
    }

    #[test]
    fn test_quiet_reporter_draws_no_bar() {
        let reporter = StderrProgressReporter::quiet();
        reporter.report_bytes(5, 10, Some("channel.txt"));
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_byte_bar_only_when_stdout_is_not_a_terminal() {
        assert!(draws_byte_bar(false));
        assert!(!draws_byte_bar(true));
    }

    #[test]
    fn test_no_bar_while_stdout_shares_the_terminal() {
        let reporter = StderrProgressReporter::with_options(false, false);
        reporter.report_bytes(10, 51, Some("channel.txt"));
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.finish_bytes();
    }
}
