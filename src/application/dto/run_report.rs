use crate::io_examples::domain::IoStyle;
use crate::ports::outbound::{DirectoryStatus, ReadBack};
use std::path::PathBuf;

/// Result of one write/read pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOutcome {
    pub style: IoStyle,
    pub path: PathBuf,
    pub bytes_written: usize,
    pub read_back: ReadBack,
}

/// RunReport - everything a completed run did, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub directory: DirectoryStatus,
    /// Example files deleted before the run (`--fresh`)
    pub removed_files: usize,
    pub outcomes: Vec<StyleOutcome>,
}

impl RunReport {
    pub fn outcome(&self, style: IoStyle) -> Option<&StyleOutcome> {
        self.outcomes.iter().find(|o| o.style == style)
    }

    pub fn total_bytes_written(&self) -> usize {
        self.outcomes.iter().map(|o| o.bytes_written).sum()
    }
}
