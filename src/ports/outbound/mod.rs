/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod bom_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use bom_reader::BomReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
