use crate::application::dto::{RefineRequest, RefineResponse};
use crate::ports::outbound::{BomReader, ProgressReporter};
use crate::refinement::domain::{BomDocument, Stage, StageReport};
use crate::refinement::services::{PipelineOutcome, RefinementPipeline};
use crate::shared::Result;

/// RefineBomUseCase - Core use case for SBOM refinement
///
/// Reads the merged document, runs the refinement pipeline over its
/// component list and reports the per-stage counts. Writing the result is
/// left to the caller's OutputPresenter.
///
/// # Type Parameters
/// * `R` - BomReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RefineBomUseCase<R, PR> {
    bom_reader: R,
    progress_reporter: PR,
}

impl<R, PR> RefineBomUseCase<R, PR>
where
    R: BomReader,
    PR: ProgressReporter,
{
    /// Creates a new RefineBomUseCase with injected dependencies
    pub fn new(bom_reader: R, progress_reporter: PR) -> Self {
        Self {
            bom_reader,
            progress_reporter,
        }
    }

    /// Executes the refinement use case
    ///
    /// # Errors
    /// Fails only when the document cannot be read or is malformed; every
    /// pipeline stage is infallible once the input has been validated.
    pub fn execute(&self, request: RefineRequest) -> Result<RefineResponse> {
        // Step 1: Read and validate the merged document
        let document = self.read_and_report_document(&request)?;

        // Step 2: Run the pipeline
        let (components, shell) = document.into_parts();
        let input_count = components.len();
        let outcome = RefinementPipeline::run(components, &request.options);

        // Step 3: Report stage counts and warnings
        self.report_stages(&outcome.reports);
        self.report_warnings(&outcome);

        let PipelineOutcome {
            components,
            reports,
        } = outcome;
        let response = RefineResponse::new(
            shell.with_components(components),
            reports,
            input_count,
            request.dry_run,
        );

        self.report_summary(&response);
        Ok(response)
    }

    fn read_and_report_document(&self, request: &RefineRequest) -> Result<BomDocument> {
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM document from: {}",
            request.input_path.display()
        ));

        let document = self.bom_reader.read_document(&request.input_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s)",
            document.components().len()
        ));
        Ok(document)
    }

    fn report_stages(&self, reports: &[StageReport]) {
        let total = reports.len();
        for (index, report) in reports.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(report.stage.label()));
            self.progress_reporter
                .report(&format!("   - {}", report.summary()));
        }
    }

    /// Skipped identifier assignments are reported, never fatal
    fn report_warnings(&self, outcome: &PipelineOutcome) {
        if let Some(report) = outcome.report(Stage::IdentifierGeneration) {
            if report.skipped > 0 {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} component(s) left without a PURL or CPE.",
                    report.skipped
                ));
            }
        }

        if outcome.components.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: No components remain after refinement. Check the include options.",
            );
        }
    }

    fn report_summary(&self, response: &RefineResponse) {
        if response.dry_run {
            self.progress_reporter.report_completion(&format!(
                "Success: Dry run complete ({} → {} component(s)). No output written.",
                response.input_count, response.output_count
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Refined {} → {} component(s)",
                response.input_count, response.output_count
            ));
        }
    }
}
