//! Canonical ticket-transaction record types.
//!
//! This module defines the record shape the store persists and the
//! enumerated field domains. Serialized field names are camelCase and enum
//! values use their fixed wire spellings, matching the canonical persisted
//! layout. The store trusts its callers for enum membership; boundary
//! validation happens once, at import time, in [`crate::legacy`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PaymentId, TicketId};

// ============================================================================
// Enumerated domains
// ============================================================================

/// Lifecycle status of a ticket transaction.
///
/// Declaration order is the domain's total order
/// (`unpaid < pending < recruiting < confirmed < paid < received < completed`),
/// used both for sorting and for advancing a transaction to its next stage.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Money not received yet.
    Unpaid,
    /// Parked; the owner has not decided what to do.
    Pending,
    /// Looking for a counterpart.
    #[default]
    Recruiting,
    /// Counterpart agreed.
    Confirmed,
    /// Money settled.
    Paid,
    /// Ticket handed over.
    Received,
    /// Transaction closed.
    Completed,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Unpaid,
        Self::Pending,
        Self::Recruiting,
        Self::Confirmed,
        Self::Paid,
        Self::Received,
        Self::Completed,
    ];

    /// The next status in the lifecycle, or `None` once completed.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Unpaid => Some(Self::Pending),
            Self::Pending => Some(Self::Recruiting),
            Self::Recruiting => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::Paid),
            Self::Paid => Some(Self::Received),
            Self::Received => Some(Self::Completed),
            Self::Completed => None,
        }
    }
}

/// How the ticket changes hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TradeMethod {
    /// The QR code itself is transferred.
    Qr,
    /// The buyer enters as the seller's companion.
    Accompany,
    /// One slot out of a multi-name booking.
    Slot,
    /// Seat assigned at random.
    Random,
    /// Ticket-for-ticket exchange.
    Exchange,
    /// Transfer via payment number.
    PaymentNumber,
    /// Handover to a friend.
    Friend,
    /// Anything else.
    #[default]
    Other,
}

/// Where the counterpart was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Ticket Jam.
    Ticketjam,
    /// Ticket Ryutsu Center.
    TicketRyutsu,
    /// Ticket Circle.
    TicketCircle,
    /// Azukari escrow.
    Azukari,
    /// Twitter/X.
    Twitter,
    /// Arranged in person.
    InPerson,
    /// Anything else; detail goes in `platformDetail`.
    Other,
}

/// When the money moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTiming {
    /// Paid up front.
    Prepaid,
    /// Partially paid up front; remainder later.
    PartiallyPrepaid,
    /// Settled through the platform.
    Platform,
    /// Partially settled through the platform.
    PartiallyPlatform,
    /// Paid afterwards.
    Postpaid,
    /// Cash on the day, at handover.
    CashOnDelivery,
    /// Settled per occasion.
    Each,
    /// Through a payment app.
    App,
    /// No payment involved.
    None,
}

impl PaymentTiming {
    /// Whether this timing splits the amount; `partialAmount` is only
    /// meaningful when this is true.
    #[must_use]
    pub const fn is_partial(self) -> bool {
        matches!(self, Self::PartiallyPrepaid | Self::PartiallyPlatform)
    }
}

/// How the money moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// PayPay.
    Paypay,
    /// Bank transfer.
    Bank,
    /// Cash.
    Cash,
    /// LINE Pay.
    Linepay,
    /// Merpay.
    Merpay,
    /// Credit card.
    Creditcard,
    /// In-app payment.
    App,
    /// Anything else.
    Other,
}

// ============================================================================
// Substructures
// ============================================================================

/// Slot position within a multi-name booking.
///
/// Present only for [`TradeMethod::Slot`] records. `my_slot` should not
/// exceed `total_slots`, but the store preserves whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotInfo {
    /// Number of names on the booking.
    pub total_slots: u32,
    /// The holder's position among them.
    pub my_slot: u32,
}

/// The counterpart performance in a ticket-for-ticket exchange.
///
/// Present only for [`TradeMethod::Exchange`] records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeEvent {
    /// Tour the counterpart ticket belongs to.
    pub tour_name: String,
    /// Counterpart performance date (`YYYY-MM-DD`).
    pub event_date: String,
    /// Counterpart curtain time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Counterpart venue.
    pub venue: String,
}

/// One entry in a record's payment history.
///
/// The history is purely additive; store operations never touch it except
/// through whole-record replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Identifier of this payment entry.
    pub id: PaymentId,
    /// Amount paid.
    pub amount: f64,
    /// When the payment was made.
    pub paid_at: DateTime<Utc>,
    /// How the payment was made.
    pub method: PaymentMethod,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

// ============================================================================
// The record
// ============================================================================

/// A ticket-transaction record, the one entity the store persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique identifier; assigned at creation, never reassigned.
    pub id: TicketId,
    /// Tour the ticket belongs to; the display grouping label.
    pub tour_name: String,
    /// Performer or group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer_name: Option<String>,
    /// Whose name the booking is under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_holder: Option<String>,
    /// Performance date (`YYYY-MM-DD`); compared lexically for range
    /// filtering and used as the default sort key.
    pub event_date: String,
    /// Curtain time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Venue name.
    pub venue: String,
    /// Seat details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_info: Option<String>,
    /// How the ticket changes hands.
    pub trade_method: TradeMethod,
    /// Slot position; meaningful only for [`TradeMethod::Slot`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_info: Option<SlotInfo>,
    /// Counterpart performance; meaningful only for [`TradeMethod::Exchange`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_event: Option<ExchangeEvent>,
    /// Counterpart's name or handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    /// Counterpart contact URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,
    /// Primary contact channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_contact: Option<String>,
    /// Backup contact channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_contact: Option<String>,
    /// Where the counterpart was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Free-form platform detail; meaningful only for [`Platform::Other`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_detail: Option<String>,
    /// Listing or thread URL for the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_url: Option<String>,
    /// Agreed amount; non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// When the money moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_timing: Option<PaymentTiming>,
    /// Up-front portion; meaningful only when the timing
    /// [`is_partial`](PaymentTiming::is_partial).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_amount: Option<f64>,
    /// How the money moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Additive payment history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<Payment>>,
    /// Lifecycle status.
    pub status: Status,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// When the record was created; set once, never changed.
    pub created_at: DateTime<Utc>,
    /// When the record was last written; refreshed on every create or update.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Assemble a record from a draft: fresh id, both timestamps set to now.
    #[must_use]
    pub fn new(draft: TicketDraft) -> Self {
        Self::with_identity(draft, TicketId::generate(), Utc::now())
    }

    /// Assemble a record from a draft with explicit identity, for canned
    /// datasets and tests. Both timestamps start at `at`.
    #[must_use]
    pub fn with_identity(draft: TicketDraft, id: TicketId, at: DateTime<Utc>) -> Self {
        Self {
            id,
            tour_name: draft.tour_name,
            performer_name: draft.performer_name,
            name_holder: draft.name_holder,
            event_date: draft.event_date,
            start_time: draft.start_time,
            venue: draft.venue,
            seat_info: draft.seat_info,
            trade_method: draft.trade_method,
            slot_info: draft.slot_info,
            exchange_event: draft.exchange_event,
            partner: draft.partner,
            contact_url: draft.contact_url,
            main_contact: draft.main_contact,
            sub_contact: draft.sub_contact,
            platform: draft.platform,
            platform_detail: draft.platform_detail,
            related_url: draft.related_url,
            price: draft.price,
            payment_timing: draft.payment_timing,
            partial_amount: draft.partial_amount,
            payment_method: draft.payment_method,
            payments: draft.payments,
            status: draft.status,
            memo: draft.memo,
            created_at: at,
            updated_at: at,
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Everything a [`Ticket`] holds except its identity
/// (`id`/`createdAt`/`updatedAt`), which the store assigns.
///
/// The defaults mirror a record's natural starting point: status
/// `recruiting`, trade method `other`, everything optional absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    /// See [`Ticket::tour_name`].
    pub tour_name: String,
    /// See [`Ticket::performer_name`].
    pub performer_name: Option<String>,
    /// See [`Ticket::name_holder`].
    pub name_holder: Option<String>,
    /// See [`Ticket::event_date`].
    pub event_date: String,
    /// See [`Ticket::start_time`].
    pub start_time: Option<String>,
    /// See [`Ticket::venue`].
    pub venue: String,
    /// See [`Ticket::seat_info`].
    pub seat_info: Option<String>,
    /// See [`Ticket::trade_method`].
    pub trade_method: TradeMethod,
    /// See [`Ticket::slot_info`].
    pub slot_info: Option<SlotInfo>,
    /// See [`Ticket::exchange_event`].
    pub exchange_event: Option<ExchangeEvent>,
    /// See [`Ticket::partner`].
    pub partner: Option<String>,
    /// See [`Ticket::contact_url`].
    pub contact_url: Option<String>,
    /// See [`Ticket::main_contact`].
    pub main_contact: Option<String>,
    /// See [`Ticket::sub_contact`].
    pub sub_contact: Option<String>,
    /// See [`Ticket::platform`].
    pub platform: Option<Platform>,
    /// See [`Ticket::platform_detail`].
    pub platform_detail: Option<String>,
    /// See [`Ticket::related_url`].
    pub related_url: Option<String>,
    /// See [`Ticket::price`].
    pub price: Option<f64>,
    /// See [`Ticket::payment_timing`].
    pub payment_timing: Option<PaymentTiming>,
    /// See [`Ticket::partial_amount`].
    pub partial_amount: Option<f64>,
    /// See [`Ticket::payment_method`].
    pub payment_method: Option<PaymentMethod>,
    /// See [`Ticket::payments`].
    pub payments: Option<Vec<Payment>>,
    /// See [`Ticket::status`].
    pub status: Status,
    /// See [`Ticket::memo`].
    pub memo: Option<String>,
}

impl TicketDraft {
    /// Start a draft from the three fields every record needs.
    #[must_use]
    pub fn new(
        tour_name: impl Into<String>,
        event_date: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            tour_name: tour_name.into(),
            event_date: event_date.into(),
            venue: venue.into(),
            ..Self::default()
        }
    }
}

/// A partial update: the shallow merge applied by the store's update
/// operation.
///
/// The outer `Option` on every field distinguishes "supplied" from
/// "omitted"; omitted fields keep their stored value. For fields that are
/// themselves optional on the record, the inner `Option` is the stored
/// value, so `Some(None)` clears the field.
///
/// `id` and `createdAt` are not representable here, so an update can never
/// alter them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPatch {
    /// Replace [`Ticket::tour_name`].
    pub tour_name: Option<String>,
    /// Replace [`Ticket::performer_name`].
    pub performer_name: Option<Option<String>>,
    /// Replace [`Ticket::name_holder`].
    pub name_holder: Option<Option<String>>,
    /// Replace [`Ticket::event_date`].
    pub event_date: Option<String>,
    /// Replace [`Ticket::start_time`].
    pub start_time: Option<Option<String>>,
    /// Replace [`Ticket::venue`].
    pub venue: Option<String>,
    /// Replace [`Ticket::seat_info`].
    pub seat_info: Option<Option<String>>,
    /// Replace [`Ticket::trade_method`].
    pub trade_method: Option<TradeMethod>,
    /// Replace [`Ticket::slot_info`].
    pub slot_info: Option<Option<SlotInfo>>,
    /// Replace [`Ticket::exchange_event`].
    pub exchange_event: Option<Option<ExchangeEvent>>,
    /// Replace [`Ticket::partner`].
    pub partner: Option<Option<String>>,
    /// Replace [`Ticket::contact_url`].
    pub contact_url: Option<Option<String>>,
    /// Replace [`Ticket::main_contact`].
    pub main_contact: Option<Option<String>>,
    /// Replace [`Ticket::sub_contact`].
    pub sub_contact: Option<Option<String>>,
    /// Replace [`Ticket::platform`].
    pub platform: Option<Option<Platform>>,
    /// Replace [`Ticket::platform_detail`].
    pub platform_detail: Option<Option<String>>,
    /// Replace [`Ticket::related_url`].
    pub related_url: Option<Option<String>>,
    /// Replace [`Ticket::price`].
    pub price: Option<Option<f64>>,
    /// Replace [`Ticket::payment_timing`].
    pub payment_timing: Option<Option<PaymentTiming>>,
    /// Replace [`Ticket::partial_amount`].
    pub partial_amount: Option<Option<f64>>,
    /// Replace [`Ticket::payment_method`].
    pub payment_method: Option<Option<PaymentMethod>>,
    /// Replace [`Ticket::payments`].
    pub payments: Option<Option<Vec<Payment>>>,
    /// Replace [`Ticket::status`].
    pub status: Option<Status>,
    /// Replace [`Ticket::memo`].
    pub memo: Option<Option<String>>,
}

impl TicketPatch {
    /// Shallow-merge this patch into a record. Supplied fields overwrite;
    /// omitted fields retain their prior value. Timestamps are the store's
    /// concern and are untouched here.
    pub fn apply(self, ticket: &mut Ticket) {
        if let Some(v) = self.tour_name {
            ticket.tour_name = v;
        }
        if let Some(v) = self.performer_name {
            ticket.performer_name = v;
        }
        if let Some(v) = self.name_holder {
            ticket.name_holder = v;
        }
        if let Some(v) = self.event_date {
            ticket.event_date = v;
        }
        if let Some(v) = self.start_time {
            ticket.start_time = v;
        }
        if let Some(v) = self.venue {
            ticket.venue = v;
        }
        if let Some(v) = self.seat_info {
            ticket.seat_info = v;
        }
        if let Some(v) = self.trade_method {
            ticket.trade_method = v;
        }
        if let Some(v) = self.slot_info {
            ticket.slot_info = v;
        }
        if let Some(v) = self.exchange_event {
            ticket.exchange_event = v;
        }
        if let Some(v) = self.partner {
            ticket.partner = v;
        }
        if let Some(v) = self.contact_url {
            ticket.contact_url = v;
        }
        if let Some(v) = self.main_contact {
            ticket.main_contact = v;
        }
        if let Some(v) = self.sub_contact {
            ticket.sub_contact = v;
        }
        if let Some(v) = self.platform {
            ticket.platform = v;
        }
        if let Some(v) = self.platform_detail {
            ticket.platform_detail = v;
        }
        if let Some(v) = self.related_url {
            ticket.related_url = v;
        }
        if let Some(v) = self.price {
            ticket.price = v;
        }
        if let Some(v) = self.payment_timing {
            ticket.payment_timing = v;
        }
        if let Some(v) = self.partial_amount {
            ticket.partial_amount = v;
        }
        if let Some(v) = self.payment_method {
            ticket.payment_method = v;
        }
        if let Some(v) = self.payments {
            ticket.payments = v;
        }
        if let Some(v) = self.status {
            ticket.status = v;
        }
        if let Some(v) = self.memo {
            ticket.memo = v;
        }
    }
}
