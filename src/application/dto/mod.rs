/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the refinement core isolated.
mod refine_request;
mod refine_response;

pub use refine_request::RefineRequest;
pub use refine_response::RefineResponse;
