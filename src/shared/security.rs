use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum SBOM document size (100 MB).
/// Merged Yocto images stay well below this even with file records included.
pub const MAX_DOCUMENT_SIZE: u64 = 100 * 1024 * 1024;

/// Validates an input document path before it is read.
///
/// Rejects symbolic links, non-regular files, and files larger than
/// [`MAX_DOCUMENT_SIZE`]. Returns the file size on success.
pub fn validate_input_document(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input document is a symbolic link".to_string(),
            hint: "Pass the resolved path of the merged SBOM instead".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SbomError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_document_size(metadata.len(), path, MAX_DOCUMENT_SIZE)?;
    Ok(metadata.len())
}

/// Rejects an output target that already exists as a symbolic link.
/// A missing target is fine; it will be created.
pub fn validate_output_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Writing through symbolic links is not allowed; choose a regular file path"
                .to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Validates file size is within acceptable limits
pub fn validate_document_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Document is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the input set before merging".to_string(),
        }
        .into());
    }
    Ok(())
}
