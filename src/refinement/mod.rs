//! Refinement domain: component records, identifier policies, and the
//! pure stage services that turn a merged component list into a
//! scan-ready one.
pub mod domain;
pub mod policies;
pub mod services;
