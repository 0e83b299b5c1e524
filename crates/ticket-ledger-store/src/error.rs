//! Error types for ticket-ledger storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by storage operations.
///
/// Expected conditions never land here: a missing record is `None`/`false`,
/// a rejected import payload is `Ok(false)`, and a corrupt persisted blob
/// degrades to an empty collection. Only genuine failures of the storage
/// medium itself are errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Encoding the collection for persistence failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
