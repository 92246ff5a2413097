//! sbom-refine - identity resolution and normalization for merged SBOMs
//!
//! This library turns a merged CycloneDX JSON document (for example the
//! per-recipe SBOMs of a Yocto image build, merged into one) into a
//! de-duplicated, vulnerability-scan-ready component list, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`refinement`): Component model, identifier rules and
//!   the pipeline stages
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_refine::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = RefineBomUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let options = RefineOptions::new().include_duplicate_cpes(true);
//! let request = RefineRequest::new("merged.cdx.json", options, false);
//! let response = use_case.execute(request)?;
//!
//! println!("{}", response.document.to_json_string()?);
//! # Ok(())
//! # }
//! ```
//!
//! The pipeline can also be run directly on a component list:
//!
//! ```
//! use sbom_refine::prelude::*;
//!
//! let components = vec![
//!     Component::new("openssl-bin", Some("3.0.9")),
//!     Component::new("openssl-conf", Some("3.0.9")),
//! ];
//! let outcome = RefinementPipeline::run(components, &RefineOptions::default());
//! assert_eq!(outcome.components[0].name, "openssl-bin (openssl-conf)");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod refinement;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{RefineRequest, RefineResponse};
    pub use crate::application::use_cases::RefineBomUseCase;
    pub use crate::ports::outbound::{BomReader, OutputPresenter, ProgressReporter};
    pub use crate::refinement::domain::{
        BomDocument, Component, ComponentType, CpePart, Ecosystem, ExternalReference, Identifier,
        RefineOptions, Stage, StageReport,
    };
    pub use crate::refinement::policies::IdentifierRules;
    pub use crate::refinement::services::{
        CategoryFilter, IdentifierGenerator, IdentityDeduplicator, MergeArtifactFilter,
        PipelineOutcome, RefinementPipeline, StructuralSanitizer,
    };
    pub use crate::shared::error::SbomError;
    pub use crate::shared::Result;
}
