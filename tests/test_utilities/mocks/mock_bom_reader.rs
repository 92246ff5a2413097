use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use sbom_refine::prelude::*;

/// Mock BomReader for testing that serves a document from memory
pub struct MockBomReader {
    pub content: String,
    pub should_fail: bool,
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockBomReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl BomReader for MockBomReader {
    fn read_document(&self, path: &Path) -> Result<BomDocument> {
        self.requested_paths.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock document read failure");
        }
        BomDocument::from_json_str(&self.content)
    }
}
