//! Bulk transfer: export, import, and the canned dataset reset.

use tracing::{debug, warn};

use ticket_ledger_core::{RawRecord, Ticket};

use crate::error::{Result, StoreError};
use crate::samples;
use crate::slot::StorageSlot;
use crate::store::TicketStore;

impl<S: StorageSlot> TicketStore<S> {
    /// Serialize the full collection as pretty-printed JSON.
    ///
    /// The payload round-trips losslessly through [`Self::import_data`]. A
    /// suggested download name is `tickets-<ISO-date>.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub async fn export_data(&self) -> Result<String> {
        let records = self.get_all().await?;
        serde_json::to_string_pretty(&records)
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Replace the entire collection with a user-supplied JSON array.
    ///
    /// Each element may be canonical or legacy-shaped; legacy elements are
    /// normalized on the way in. Returns `Ok(false)`, with storage left
    /// exactly as it was, when the payload is not a JSON array or any
    /// element fails classification. There is no partial import.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend cannot be written.
    pub async fn import_data(&self, text: &str) -> Result<bool> {
        let Ok(serde_json::Value::Array(elements)) = serde_json::from_str(text) else {
            return Ok(false);
        };
        let mut records = Vec::with_capacity(elements.len());
        for element in elements {
            match RawRecord::classify(element) {
                Ok(raw) => records.push(raw.into_ticket()),
                Err(error) => {
                    warn!(%error, "rejecting import payload");
                    return Ok(false);
                }
            }
        }
        self.persist(&records).await?;
        debug!(count = records.len(), "imported collection");
        Ok(true)
    }

    /// Unconditionally replace the collection with the fixed demonstration
    /// dataset and return it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend cannot be written.
    pub async fn load_sample_data(&self) -> Result<Vec<Ticket>> {
        let records = samples::sample_tickets();
        self.persist(&records).await?;
        debug!(count = records.len(), "loaded sample data");
        Ok(records)
    }
}
