use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

/// StdoutPresenter adapter for writing example contents to stdout
///
/// Banners are bold cyan when stdout is a terminal and plain otherwise.
pub struct StdoutPresenter {
    colored: bool,
}

impl StdoutPresenter {
    pub fn new() -> Self {
        Self {
            colored: io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn banner(&self, message: &str) -> Result<()> {
        if self.colored {
            self.write(&format!("\n{}\n", message.bold().cyan()))
        } else {
            self.write(&format!("\n{}\n", message))
        }
    }

    fn line(&self, text: &str) -> Result<()> {
        self.write(&format!("{}\n", text))
    }

    fn text(&self, text: &str) -> Result<()> {
        self.write(text)
    }
}
