//! Durable CRUD over the ticket collection.

use chrono::Utc;
use tracing::{debug, warn};

use ticket_ledger_core::query::{self, ListOptions};
use ticket_ledger_core::{Ticket, TicketDraft, TicketId, TicketPatch};

use crate::error::{Result, StoreError};
use crate::slot::StorageSlot;

/// Outcome of reading the persisted collection.
///
/// Distinguishes a slot that was never written from one whose blob failed to
/// decode. Both flatten to an empty collection (a corrupted store degrades
/// to "no data" rather than blocking the application), but callers and tests
/// can tell the paths apart.
#[derive(Debug)]
pub enum Loaded {
    /// No blob has ever been persisted.
    Empty,
    /// The blob decoded into records.
    Records(Vec<Ticket>),
    /// A blob exists but could not be decoded; treated as empty.
    Corrupt {
        /// The decoder's message, for diagnostics.
        reason: String,
    },
}

impl Loaded {
    /// Flatten to the record list, degrading both empty cases to no records.
    #[must_use]
    pub fn into_records(self) -> Vec<Ticket> {
        match self {
            Self::Records(records) => records,
            Self::Empty | Self::Corrupt { .. } => Vec::new(),
        }
    }
}

/// The durable store for the full ticket collection.
///
/// Wraps an injected [`StorageSlot`] and owns id generation, timestamping,
/// and the encode/decode of the collection blob. Every mutation is a full
/// read-modify-write; see the crate docs for the (accepted)
/// last-writer-wins consequence.
pub struct TicketStore<S> {
    slot: S,
}

impl<S: StorageSlot> TicketStore<S> {
    /// Wrap a persistence slot.
    #[must_use]
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Read and decode the persisted collection.
    ///
    /// # Errors
    ///
    /// Only backend failures. A corrupt blob is reported as
    /// [`Loaded::Corrupt`], not an error.
    pub async fn load(&self) -> Result<Loaded> {
        match self.slot.read().await? {
            None => Ok(Loaded::Empty),
            Some(blob) => match serde_json::from_slice::<Vec<Ticket>>(&blob) {
                Ok(records) => Ok(Loaded::Records(records)),
                Err(error) => {
                    warn!(%error, "persisted collection is unreadable, treating as empty");
                    Ok(Loaded::Corrupt {
                        reason: error.to_string(),
                    })
                }
            },
        }
    }

    /// Every persisted record, in no guaranteed order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend cannot be read.
    pub async fn get_all(&self) -> Result<Vec<Ticket>> {
        Ok(self.load().await?.into_records())
    }

    /// Look up one record by id. Absent is a normal, non-error outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend cannot be read.
    pub async fn get_by_id(&self, id: &TicketId) -> Result<Option<Ticket>> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|ticket| &ticket.id == id))
    }

    /// The filtered, sorted view over the full snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend cannot be read.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<Ticket>> {
        Ok(query::select(&self.get_all().await?, options))
    }

    /// Create a record from a draft: fresh id, both timestamps set to now.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written.
    pub async fn create(&self, draft: TicketDraft) -> Result<Ticket> {
        let mut records = self.get_all().await?;
        let ticket = Ticket::new(draft);
        records.push(ticket.clone());
        self.persist(&records).await?;
        debug!(id = %ticket.id, "created ticket");
        Ok(ticket)
    }

    /// Shallow-merge a partial update over an existing record.
    ///
    /// Supplied fields overwrite, omitted fields keep their stored value,
    /// `updatedAt` is refreshed; `id` and `createdAt` are never altered.
    /// Returns `None`, leaving storage untouched, when no record has the
    /// id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written.
    pub async fn update(&self, id: &TicketId, patch: TicketPatch) -> Result<Option<Ticket>> {
        let mut records = self.get_all().await?;
        let Some(ticket) = records.iter_mut().find(|ticket| &ticket.id == id) else {
            return Ok(None);
        };
        patch.apply(ticket);
        ticket.updated_at = Utc::now();
        let updated = ticket.clone();
        self.persist(&records).await?;
        debug!(id = %updated.id, "updated ticket");
        Ok(Some(updated))
    }

    /// Remove a record by id; `false` when no record had the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written.
    pub async fn delete(&self, id: &TicketId) -> Result<bool> {
        let mut records = self.get_all().await?;
        let before = records.len();
        records.retain(|ticket| &ticket.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.persist(&records).await?;
        debug!(%id, "deleted ticket");
        Ok(true)
    }

    /// Serialize the whole collection and write it to the slot.
    pub(crate) async fn persist(&self, records: &[Ticket]) -> Result<()> {
        let blob =
            serde_json::to_vec(records).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.slot.write(&blob).await
    }
}
