/// ProgressReporter port for status output while examples run
///
/// Implementations write to stderr (or capture in tests) so that status
/// messages never mix with the example contents on stdout.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports how many bytes of a transfer are done
    ///
    /// # Arguments
    /// * `done` - Bytes processed so far
    /// * `total` - Bytes expected in total (file size)
    /// * `message` - Optional label for the transfer
    fn report_bytes(&self, done: u64, total: u64, message: Option<&str>);

    /// Ends the current byte transfer display, if any
    fn finish_bytes(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
