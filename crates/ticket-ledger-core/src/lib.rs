//! Core types and pure logic for ticket-ledger.
//!
//! This crate holds everything about the ticket-transaction domain that does
//! not touch storage:
//!
//! - **Identifiers**: [`TicketId`], [`PaymentId`]
//! - **Records**: [`Ticket`] and its enumerated field domains
//!   ([`Status`], [`TradeMethod`], [`Platform`], [`PaymentTiming`],
//!   [`PaymentMethod`])
//! - **Inputs**: [`TicketDraft`] (create) and [`TicketPatch`] (partial update)
//! - **Queries**: pure filtering and sorting over a collection snapshot
//! - **Normalization**: [`RawRecord`], the import-boundary classifier for
//!   legacy-shaped serialized records
//!
//! Persistence lives in the companion `ticket-ledger-store` crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ids;
pub mod legacy;
pub mod query;
pub mod ticket;

pub use ids::{PaymentId, TicketId};
pub use legacy::{RawRecord, ShapeError};
pub use query::{ListOptions, SortKey, SortOrder, StatusFilter};
pub use ticket::{
    ExchangeEvent, Payment, PaymentMethod, PaymentTiming, Platform, SlotInfo, Status, Ticket,
    TicketDraft, TicketPatch, TradeMethod,
};
