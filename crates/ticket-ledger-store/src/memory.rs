//! In-memory slot implementation.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::slot::StorageSlot;

/// An in-memory [`StorageSlot`].
///
/// The fake used by tests, and a real choice for ephemeral, non-durable
/// operation.
#[derive(Debug, Default)]
pub struct MemorySlot {
    blob: Mutex<Option<Vec<u8>>>,
}

impl MemorySlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a blob, as if it had been written
    /// earlier.
    #[must_use]
    pub fn seeded(blob: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }
}

#[async_trait]
impl StorageSlot for MemorySlot {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        let guard = self
            .blob
            .lock()
            .map_err(|_| StoreError::Backend("slot mutex poisoned".to_owned()))?;
        Ok(guard.clone())
    }

    async fn write(&self, blob: &[u8]) -> Result<()> {
        let mut guard = self
            .blob
            .lock()
            .map_err(|_| StoreError::Backend("slot mutex poisoned".to_owned()))?;
        *guard = Some(blob.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty_and_holds_the_last_write() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read().await.unwrap(), None);

        slot.write(b"first").await.unwrap();
        slot.write(b"second").await.unwrap();
        assert_eq!(slot.read().await.unwrap().as_deref(), Some(&b"second"[..]));
    }

    #[tokio::test]
    async fn seeded_slot_reads_back_its_seed() {
        let slot = MemorySlot::seeded("[]");
        assert_eq!(slot.read().await.unwrap().as_deref(), Some(&b"[]"[..]));
    }
}
