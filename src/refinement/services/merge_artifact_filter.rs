use crate::refinement::domain::{Component, Stage, StageReport};
use regex::Regex;
use std::sync::LazyLock;

static BATCH_ARTIFACT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-batch-\d+$").expect("static regex"));

/// MergeArtifactFilter - drops the synthetic `<name>-batch-<n>` records a
/// batched merge leaves behind when the input set is split across calls.
///
/// Removal is unconditional; no option re-includes these records.
pub struct MergeArtifactFilter;

impl MergeArtifactFilter {
    pub fn apply(components: Vec<Component>) -> (Vec<Component>, StageReport) {
        let before = components.len();
        let kept: Vec<Component> = components
            .into_iter()
            .filter(|component| !Self::is_merge_artifact(&component.name))
            .collect();
        let removed = before - kept.len();
        (kept, StageReport::removed(Stage::MergeArtifactFilter, removed))
    }

    pub fn is_merge_artifact(name: &str) -> bool {
        BATCH_ARTIFACT_NAME.is_match(name)
    }
}
