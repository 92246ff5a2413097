/// Toggles consumed by the refinement pipeline.
///
/// Every toggle defaults to `false`, i.e. the strictest output: native,
/// file, and unversioned components are dropped and CPE duplicates merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefineOptions {
    /// Keep build-time `-native` components
    pub include_native: bool,
    /// Keep `type: file` records
    pub include_files: bool,
    /// Keep components without a version
    pub include_source: bool,
    /// Skip the CPE deduplication pass
    pub include_duplicate_cpes: bool,
}

impl RefineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_native(mut self, value: bool) -> Self {
        self.include_native = value;
        self
    }

    pub fn include_files(mut self, value: bool) -> Self {
        self.include_files = value;
        self
    }

    pub fn include_source(mut self, value: bool) -> Self {
        self.include_source = value;
        self
    }

    pub fn include_duplicate_cpes(mut self, value: bool) -> Self {
        self.include_duplicate_cpes = value;
        self
    }
}
