//! Configuration file support for sbom-refine.
//!
//! Provides YAML-based configuration through `sbom-refine.config.yml` files,
//! including data structures, file loading, and merging with CLI flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::refinement::domain::RefineOptions;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-refine.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub include_native: Option<bool>,
    pub include_files: Option<bool>,
    pub include_source: Option<bool>,
    pub include_duplicate_cpes: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Folds the config values into `options`. A toggle set on either side
    /// stays set.
    pub fn merge_into(&self, options: RefineOptions) -> RefineOptions {
        options
            .include_native(options.include_native || self.include_native.unwrap_or(false))
            .include_files(options.include_files || self.include_files.unwrap_or(false))
            .include_source(options.include_source || self.include_source.unwrap_or(false))
            .include_duplicate_cpes(
                options.include_duplicate_cpes || self.include_duplicate_cpes.unwrap_or(false),
            )
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // an empty file deserializes to null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and the include_* keys are true or false.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
