//! Test-only console doubles for exercising adapters and use cases.

use crate::ports::outbound::{OutputPresenter, ProgressReporter};
use crate::shared::Result;
use std::cell::RefCell;

/// Presenter that records everything it is asked to present.
#[derive(Default)]
pub struct RecordingPresenter {
    pub banners: RefCell<Vec<String>>,
    pub lines: RefCell<Vec<String>>,
    pub texts: RefCell<Vec<String>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputPresenter for RecordingPresenter {
    fn banner(&self, message: &str) -> Result<()> {
        self.banners.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn line(&self, text: &str) -> Result<()> {
        self.lines.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn text(&self, text: &str) -> Result<()> {
        self.texts.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Reporter that records byte progress and drops everything else.
#[derive(Default)]
pub struct RecordingReporter {
    pub progress: RefCell<Vec<(u64, u64)>>,
    pub messages: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_bytes(&self, done: u64, total: u64, _message: Option<&str>) {
        self.progress.borrow_mut().push((done, total));
    }

    fn finish_bytes(&self) {}

    fn report_error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}
