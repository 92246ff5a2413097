use crate::refinement::domain::BomDocument;
use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading a merged SBOM document
///
/// This port abstracts where the merged CycloneDX JSON comes from, so the
/// use case can be driven from the file system or from in-memory fixtures.
pub trait BomReader {
    /// Reads and validates the document at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document does not exist or cannot be read
    /// - The document fails the security checks (symlink, size)
    /// - The document is not valid JSON or has a malformed component list
    fn read_document(&self, path: &Path) -> Result<BomDocument>;
}
