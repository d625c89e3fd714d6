use thiserror::Error;

/// Persistence failures surfaced by the record store. Every variant maps to
/// a server-side failure for the caller; validation never reaches here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database not initialized")]
    Unavailable,
    #[error("database error: {0}")]
    Backend(String),
}
