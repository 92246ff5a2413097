pub mod bom_document;
pub mod component;
pub mod identifier;
pub mod refine_options;
pub mod stage_report;

pub use bom_document::{validate_document, BomDocument};
pub use component::{Component, ComponentType, Contact, ExternalReference, OrganizationalEntity};
pub use identifier::{CpePart, Ecosystem, Identifier};
pub use refine_options::RefineOptions;
pub use stage_report::{Stage, StageReport};
