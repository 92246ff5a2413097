use crate::shared::Result;

/// OutputPresenter port for presenting the refined document
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the serialized SBOM is written.
pub trait OutputPresenter {
    /// Presents the serialized SBOM content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link
    /// - The parent directory does not exist
    fn present(&self, content: &str) -> Result<()>;
}
