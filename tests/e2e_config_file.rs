/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const INPUT_NAME: &str = "merged.cdx.json";

/// Copy the merged fixture into an isolated directory.
fn create_test_input(dir: &Path) -> PathBuf {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/merged-image.cdx.json");
    let input = dir.join(INPUT_NAME);
    fs::copy(fixture, &input).unwrap();
    input
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn run_and_collect_names(input: &Path, extra_args: &[&str]) -> Vec<String> {
    let output = cargo_bin_cmd!("sbom-refine")
        .arg(input)
        .args(extra_args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let document: Value = serde_json::from_slice(&output.stdout).unwrap();
    document["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_include_native() {
        let dir = TempDir::new().unwrap();
        let input = create_test_input(dir.path());
        write_config(
            &dir.path().join("sbom-refine.config.yml"),
            "include_native: true\n",
        );

        let names = run_and_collect_names(&input, &[]);
        assert!(names.contains(&"quilt-native".to_string()));
    }

    #[test]
    fn test_without_config_native_is_dropped() {
        let dir = TempDir::new().unwrap();
        let input = create_test_input(dir.path());

        let names = run_and_collect_names(&input, &[]);
        assert!(!names.contains(&"quilt-native".to_string()));
    }

    #[test]
    fn test_auto_discovery_or_combines_with_flags() {
        let dir = TempDir::new().unwrap();
        let input = create_test_input(dir.path());
        write_config(
            &dir.path().join("sbom-refine.config.yml"),
            "include_duplicate_cpes: true\ninclude_files: false\n",
        );

        let names = run_and_collect_names(&input, &["--include-files"]);
        // flag wins over a false config value
        assert!(names.contains(&"/etc/hostname".to_string()));
        // config enables what the flags left off
        assert!(names.contains(&"openssl-conf".to_string()));
    }

    #[test]
    fn test_auto_discovery_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let input = create_test_input(dir.path());
        write_config(
            &dir.path().join("sbom-refine.config.yml"),
            "include_native: [[[broken",
        );

        cargo_bin_cmd!("sbom-refine")
            .arg(&input)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        let input = create_test_input(dir.path());
        write_config(
            &dir.path().join("sbom-refine.config.yml"),
            "include_source: true\nformat: markdown\n",
        );

        cargo_bin_cmd!("sbom-refine")
            .arg(&input)
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'format' will be ignored",
            ));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let input_dir = TempDir::new().unwrap();
        let config_dir = TempDir::new().unwrap();
        let input = create_test_input(input_dir.path());
        let config_path = config_dir.path().join("ci.yml");
        write_config(&config_path, "include_source: true\n");

        let config_arg = config_path.to_string_lossy().to_string();
        let names = run_and_collect_names(&input, &["--config", config_arg.as_str()]);
        assert!(names.contains(&"busybox-src".to_string()));
    }

    #[test]
    fn test_explicit_config_overrides_discovery() {
        let dir = TempDir::new().unwrap();
        let input = create_test_input(dir.path());
        write_config(
            &dir.path().join("sbom-refine.config.yml"),
            "include_native: true\n",
        );
        let explicit = dir.path().join("strict.yml");
        write_config(&explicit, "include_native: false\n");

        let explicit_arg = explicit.to_string_lossy().to_string();
        let names = run_and_collect_names(&input, &["--config", explicit_arg.as_str()]);
        assert!(!names.contains(&"quilt-native".to_string()));
    }

    #[test]
    fn test_explicit_config_missing_fails() {
        let dir = TempDir::new().unwrap();
        let input = create_test_input(dir.path());

        cargo_bin_cmd!("sbom-refine")
            .arg(&input)
            .args(["--config", "/nonexistent/sbom-refine.config.yml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}
