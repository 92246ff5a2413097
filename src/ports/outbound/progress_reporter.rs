/// ProgressReporter port for reporting pipeline progress
///
/// Implementations must never write to stdout; stdout may carry the
/// refined document.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through the pipeline stages
    ///
    /// # Arguments
    /// * `current` - Stages completed so far
    /// * `total` - Total number of stages
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
