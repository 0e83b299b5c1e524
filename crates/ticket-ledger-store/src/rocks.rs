//! RocksDB-backed slot implementation.

use std::path::Path;

use async_trait::async_trait;
use rocksdb::{Options, DB};

use crate::error::{Result, StoreError};
use crate::slot::{StorageSlot, COLLECTION_KEY};

/// A RocksDB-backed [`StorageSlot`].
///
/// The collection blob lives under [`COLLECTION_KEY`] in the default column
/// family; the database holds nothing else.
pub struct RocksSlot {
    db: DB,
}

impl RocksSlot {
    /// Open or create the database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(Self { db })
    }
}

#[async_trait]
impl StorageSlot for RocksSlot {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        self.db
            .get(COLLECTION_KEY)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn write(&self, blob: &[u8]) -> Result<()> {
        self.db
            .put(COLLECTION_KEY, blob)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}
