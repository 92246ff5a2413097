mod category_filter;
mod deduplicator;
mod identifier_generator;
mod merge_artifact_filter;
mod refinement_pipeline;
mod structural_sanitizer;

pub use category_filter::{Category, CategoryFilter};
pub use deduplicator::IdentityDeduplicator;
pub use identifier_generator::{Assignment, IdentifierGenerator};
pub use merge_artifact_filter::MergeArtifactFilter;
pub use refinement_pipeline::{PipelineOutcome, RefinementPipeline};
pub use structural_sanitizer::{fix_url, StructuralSanitizer};
