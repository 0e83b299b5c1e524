//! The persistence seam: one durable key-value slot.

use async_trait::async_trait;

use crate::error::Result;

/// The fixed key the whole collection is persisted under.
///
/// There are no per-record slots: every mutation rewrites the full
/// collection beneath this single key.
pub const COLLECTION_KEY: &str = "tickets";

/// A durable slot holding at most one blob.
///
/// This is the persistence handle injected into
/// [`TicketStore`](crate::TicketStore). The trait is async so a genuinely
/// asynchronous backend (a remote store, say) can be substituted later; the
/// implementations shipped here complete immediately.
///
/// The slot stores opaque bytes; encoding and decoding of the collection is
/// the store's concern.
#[async_trait]
pub trait StorageSlot: Send + Sync {
    /// Read the stored blob, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    async fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the stored blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    async fn write(&self, blob: &[u8]) -> Result<()>;
}
