use io_styles::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that captures the console transcript
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub transcript: Arc<Mutex<String>>,
    pub banners: Arc<Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> String {
        self.transcript.lock().unwrap().clone()
    }

    pub fn banners(&self) -> Vec<String> {
        self.banners.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn banner(&self, message: &str) -> Result<()> {
        self.banners.lock().unwrap().push(message.to_string());
        self.transcript
            .lock()
            .unwrap()
            .push_str(&format!("\n{}\n", message));
        Ok(())
    }

    fn line(&self, text: &str) -> Result<()> {
        self.transcript
            .lock()
            .unwrap()
            .push_str(&format!("{}\n", text));
        Ok(())
    }

    fn text(&self, text: &str) -> Result<()> {
        self.transcript.lock().unwrap().push_str(text);
        Ok(())
    }
}
