//! Durable storage for the ticket-ledger collection.
//!
//! This crate persists the whole record collection as one JSON array blob
//! under one fixed key in a [`StorageSlot`], the injected persistence
//! handle. Two slots ship here: [`RocksSlot`] (durable, RocksDB-backed) and
//! [`MemorySlot`] (the in-memory fake used by tests and ephemeral runs).
//!
//! [`TicketStore`] owns the operation surface the UI consumes: CRUD, the
//! filtered/sorted list view, export/import (with legacy-shape
//! normalization), and the canned sample dataset.
//!
//! Every mutating operation performs a full read-modify-write of the
//! collection; there is no locking, so two writers racing on one slot
//! degrade to last-writer-wins at whole-collection granularity. Single-user,
//! single-context usage is assumed.
//!
//! # Example
//!
//! ```no_run
//! use ticket_ledger_core::TicketDraft;
//! use ticket_ledger_store::{RocksSlot, TicketStore};
//!
//! # async fn demo() -> ticket_ledger_store::Result<()> {
//! let store = TicketStore::new(RocksSlot::open("/tmp/ticket-ledger-db")?);
//!
//! let ticket = store
//!     .create(TicketDraft::new("LIVE TOUR 2026", "2026-04-12", "Osaka-jo Hall"))
//!     .await?;
//! assert!(store.get_by_id(&ticket.id).await?.is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;
pub mod rocks;
pub mod samples;
pub mod slot;
pub mod store;
mod transfer;

pub use error::{Result, StoreError};
pub use memory::MemorySlot;
pub use rocks::RocksSlot;
pub use slot::{StorageSlot, COLLECTION_KEY};
pub use store::{Loaded, TicketStore};
