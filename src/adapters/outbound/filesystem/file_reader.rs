use crate::ports::outbound::BomReader;
use crate::refinement::domain::BomDocument;
use crate::shared::error::SbomError;
use crate::shared::security::validate_input_document;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading merged SBOM documents
///
/// This adapter implements the BomReader port. The file is checked before it
/// is opened: symbolic links, non-regular files and oversize files are
/// rejected.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_input_document(path)?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BomReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<BomDocument> {
        if !path.exists() && fs::symlink_metadata(path).is_err() {
            return Err(SbomError::DocumentNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No file at \"{}\".\n   \
                     Pass the merged CycloneDX JSON produced by the image build as the first argument.",
                    path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;
        BomDocument::from_json_str(&content)
    }
}
