use clap::Parser;
use std::path::PathBuf;

use sbom_refine::refinement::domain::RefineOptions;

/// Refine a merged CycloneDX SBOM into a de-duplicated, scan-ready component list
#[derive(Parser, Debug)]
#[command(name = "sbom-refine")]
#[command(version)]
#[command(
    about = "Refine a merged CycloneDX SBOM into a de-duplicated, scan-ready component list",
    long_about = None
)]
pub struct Args {
    /// Path to the merged CycloneDX JSON document
    pub input: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to sbom-refine.config.yml next to the input)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep build-host `-native` components
    #[arg(long)]
    pub include_native: bool,

    /// Keep `type: file` records
    #[arg(long)]
    pub include_files: bool,

    /// Keep components without a version (source archives)
    #[arg(long)]
    pub include_source: bool,

    /// Skip merging components that share a CPE
    #[arg(long)]
    pub include_duplicate_cpes: bool,

    /// Run the pipeline and print stage counts without writing output
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Pipeline toggles requested on the command line
    pub fn refine_options(&self) -> RefineOptions {
        RefineOptions::new()
            .include_native(self.include_native)
            .include_files(self.include_files)
            .include_source(self.include_source)
            .include_duplicate_cpes(self.include_duplicate_cpes)
    }
}
