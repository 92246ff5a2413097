use crate::refinement::domain::RefineOptions;
use std::path::PathBuf;

/// RefineRequest - Internal request DTO for the refine use case
#[derive(Debug, Clone)]
pub struct RefineRequest {
    /// Path to the merged CycloneDX JSON document
    pub input_path: PathBuf,
    /// Pipeline toggles, already merged from CLI flags and config file
    pub options: RefineOptions,
    /// Run the pipeline and report counts without producing output
    pub dry_run: bool,
}

impl RefineRequest {
    pub fn new(input_path: impl Into<PathBuf>, options: RefineOptions, dry_run: bool) -> Self {
        Self {
            input_path: input_path.into(),
            options,
            dry_run,
        }
    }
}
