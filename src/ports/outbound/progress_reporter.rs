/// ProgressReporter port for reporting progress during a resolution
///
/// All diagnostics go through this port (to stderr in the CLI) so that
/// stdout carries nothing but the report.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress towards a total
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total known so far (may grow between calls)
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
