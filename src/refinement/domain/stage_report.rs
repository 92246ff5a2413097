use std::fmt;

/// Pipeline stage identifiers, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Sanitize,
    NativeFilter,
    FileFilter,
    SourceFilter,
    MergeArtifactFilter,
    NameVersionDedup,
    IdentifierGeneration,
    CpeDedup,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Sanitize => "structural sanitizer",
            Stage::NativeFilter => "native filter",
            Stage::FileFilter => "file filter",
            Stage::SourceFilter => "source filter",
            Stage::MergeArtifactFilter => "merge-artifact filter",
            Stage::NameVersionDedup => "name+version dedup",
            Stage::IdentifierGeneration => "identifier generator",
            Stage::CpeDedup => "CPE dedup",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory counts emitted by one stage.
///
/// `removed` counts dropped records, `changed` counts records rewritten in
/// place, `skipped` counts records a stage declined to touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub removed: usize,
    pub changed: usize,
    pub skipped: usize,
    /// False when the stage was disabled by an include toggle
    pub applied: bool,
}

impl StageReport {
    pub fn removed(stage: Stage, removed: usize) -> Self {
        Self {
            stage,
            removed,
            changed: 0,
            skipped: 0,
            applied: true,
        }
    }

    pub fn changed(stage: Stage, changed: usize) -> Self {
        Self {
            stage,
            removed: 0,
            changed,
            skipped: 0,
            applied: true,
        }
    }

    pub fn disabled(stage: Stage) -> Self {
        Self {
            stage,
            removed: 0,
            changed: 0,
            skipped: 0,
            applied: false,
        }
    }

    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }

    /// One-line summary for progress output
    pub fn summary(&self) -> String {
        if !self.applied {
            return format!("{}: disabled", self.stage);
        }
        let mut parts = Vec::new();
        if self.removed > 0 || (self.changed == 0 && self.skipped == 0) {
            parts.push(format!("removed {}", self.removed));
        }
        if self.changed > 0 {
            parts.push(format!("changed {}", self.changed));
        }
        if self.skipped > 0 {
            parts.push(format!("skipped {}", self.skipped));
        }
        format!("{}: {}", self.stage, parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_removed() {
        let report = StageReport::removed(Stage::FileFilter, 12);
        assert_eq!(report.summary(), "file filter: removed 12");
    }

    #[test]
    fn test_summary_changed_and_skipped() {
        let report = StageReport::changed(Stage::IdentifierGeneration, 40).with_skipped(3);
        assert_eq!(
            report.summary(),
            "identifier generator: changed 40, skipped 3"
        );
    }

    #[test]
    fn test_summary_nothing_happened() {
        let report = StageReport::changed(Stage::Sanitize, 0);
        assert_eq!(report.summary(), "structural sanitizer: removed 0");
    }

    #[test]
    fn test_summary_disabled() {
        let report = StageReport::disabled(Stage::CpeDedup);
        assert!(!report.applied);
        assert_eq!(report.summary(), "CPE dedup: disabled");
    }
}
