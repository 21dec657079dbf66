//! Error types for capy-sessions

/// Catalog query errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("session index {index} out of range (catalog holds {len} sessions)")]
    OutOfRange { index: usize, len: usize },
}
