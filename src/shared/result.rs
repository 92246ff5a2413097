/// Result alias used across the crate.
/// Errors are carried as anyhow::Error so adapters can attach context with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
