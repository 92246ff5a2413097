use super::{
    CategoryFilter, IdentifierGenerator, IdentityDeduplicator, MergeArtifactFilter,
    StructuralSanitizer,
};
use crate::refinement::domain::{Component, RefineOptions, Stage, StageReport};

/// Refined components plus one report per stage, in execution order
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub components: Vec<Component>,
    pub reports: Vec<StageReport>,
}

impl PipelineOutcome {
    /// Report for a given stage, if it ran
    pub fn report(&self, stage: Stage) -> Option<&StageReport> {
        self.reports.iter().find(|report| report.stage == stage)
    }

    /// Total number of records removed by all stages
    pub fn total_removed(&self) -> usize {
        self.reports.iter().map(|report| report.removed).sum()
    }
}

/// RefinementPipeline - composes the stages in their fixed order:
///
/// 1. structural sanitizer
/// 2. category filter (native, file, source)
/// 3. merge-artifact filter
/// 4. name+version dedup
/// 5. identifier generator
/// 6. CPE dedup (unless duplicate CPEs are included)
///
/// CPE dedup only makes sense once identifiers exist, and the cheap
/// name+version pass shrinks the generator's input, so the two dedup passes
/// stay separate around the generator.
pub struct RefinementPipeline;

impl RefinementPipeline {
    pub fn run(components: Vec<Component>, options: &RefineOptions) -> PipelineOutcome {
        let mut reports = Vec::with_capacity(8);

        let (components, report) = StructuralSanitizer::apply(components);
        reports.push(report);

        let (components, category_reports) = CategoryFilter::apply(components, options);
        reports.extend(category_reports);

        let (components, report) = MergeArtifactFilter::apply(components);
        reports.push(report);

        let (components, report) = IdentityDeduplicator::dedupe_by_name_version(components);
        reports.push(report);

        let (components, report) = IdentifierGenerator::apply(components);
        reports.push(report);

        let components = if options.include_duplicate_cpes {
            reports.push(StageReport::disabled(Stage::CpeDedup));
            components
        } else {
            let (components, report) = IdentityDeduplicator::dedupe_by_cpe(components);
            reports.push(report);
            components
        };

        PipelineOutcome {
            components,
            reports,
        }
    }
}
