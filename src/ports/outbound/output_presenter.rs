use crate::shared::Result;

/// OutputPresenter port for the console output of a run
///
/// Example contents and banners go through this port; status and progress
/// messages use [`super::ProgressReporter`] instead.
pub trait OutputPresenter {
    /// Presents a section banner on its own line
    fn banner(&self, message: &str) -> Result<()>;

    /// Presents one line of content followed by a line break
    fn line(&self, text: &str) -> Result<()>;

    /// Presents a piece of content without adding a line break
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn text(&self, text: &str) -> Result<()>;
}
