use crate::refinement::domain::{BomDocument, StageReport};

/// RefineResponse - Internal response DTO from the refine use case
///
/// Carries the refined document (envelope untouched, component list
/// replaced) together with the per-stage counts.
#[derive(Debug, Clone)]
pub struct RefineResponse {
    pub document: BomDocument,
    /// One report per stage, in execution order
    pub reports: Vec<StageReport>,
    pub input_count: usize,
    pub output_count: usize,
    /// True when the caller asked for a dry run; the document must not be written
    pub dry_run: bool,
}

impl RefineResponse {
    pub fn new(
        document: BomDocument,
        reports: Vec<StageReport>,
        input_count: usize,
        dry_run: bool,
    ) -> Self {
        let output_count = document.components().len();
        Self {
            document,
            reports,
            input_count,
            output_count,
            dry_run,
        }
    }
}
