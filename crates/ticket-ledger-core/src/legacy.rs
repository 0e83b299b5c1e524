//! Import-time normalization of legacy serialized records.
//!
//! Early exports of the collection used localized (Japanese) field names and
//! label strings instead of the canonical camelCase shape. Import still
//! accepts both. An incoming element is classified exactly once, at the
//! import boundary: an object carrying the legacy tour-name key is
//! legacy-shaped and gets converted through the fixed lookup tables below;
//! anything else must already be canonical.
//!
//! Unknown legacy enum labels are never an error: trade method falls back to
//! `other`, status to `recruiting`, and the optional enums to absent. That
//! policy is what makes importing old exports robust.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::ids::TicketId;
use crate::ticket::{
    ExchangeEvent, PaymentMethod, PaymentTiming, Platform, SlotInfo, Status, Ticket, TradeMethod,
};

/// The discriminant: a legacy-shaped object always carries the localized
/// tour-name key.
const LEGACY_TOUR_NAME: &str = "ツアー名";

/// Why a raw import element could not be classified.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// The element is not a JSON object.
    #[error("import element is not a JSON object")]
    NotAnObject,
    /// The element looked canonical but did not fit the record model.
    #[error("canonical record rejected: {0}")]
    Canonical(#[from] serde_json::Error),
}

/// A raw import element, resolved to one of the two accepted shapes.
#[derive(Debug)]
pub enum RawRecord {
    /// Already in the canonical shape.
    Canonical(Box<Ticket>),
    /// Legacy localized shape, pending conversion.
    Legacy(Map<String, Value>),
}

impl RawRecord {
    /// Classify one deserialized element.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotAnObject`] for non-object elements and
    /// [`ShapeError::Canonical`] when a canonical-shaped element does not
    /// deserialize into the record model.
    pub fn classify(value: Value) -> Result<Self, ShapeError> {
        match value {
            Value::Object(object) if object.contains_key(LEGACY_TOUR_NAME) => {
                Ok(Self::Legacy(object))
            }
            value @ Value::Object(_) => Ok(Self::Canonical(Box::new(serde_json::from_value(
                value,
            )?))),
            _ => Err(ShapeError::NotAnObject),
        }
    }

    /// Resolve to a canonical record, converting the legacy shape if needed.
    #[must_use]
    pub fn into_ticket(self) -> Ticket {
        match self {
            Self::Canonical(ticket) => *ticket,
            Self::Legacy(object) => convert_legacy(&object),
        }
    }
}

/// Map one legacy object into a canonical record.
///
/// `id` and `作成日` are preserved when present; `updatedAt` is always set to
/// now, since normalization counts as a modification.
fn convert_legacy(object: &Map<String, Value>) -> Ticket {
    let now = Utc::now();

    let slot_info = object
        .get("番手情報")
        .and_then(Value::as_object)
        .map(|jp| SlotInfo {
            total_slots: slot_number(jp, "全体名義数"),
            my_slot: slot_number(jp, "自分の番手"),
        });

    let exchange_event = object
        .get("交換先公演")
        .and_then(Value::as_object)
        .map(|jp| ExchangeEvent {
            tour_name: text(jp, "ツアー名").unwrap_or_default(),
            event_date: text(jp, "日程").unwrap_or_default(),
            start_time: text(jp, "開演時間"),
            venue: text(jp, "会場").unwrap_or_default(),
        });

    Ticket {
        id: text(object, "id")
            .filter(|id| !id.is_empty())
            .map_or_else(TicketId::generate, TicketId::from),
        tour_name: text(object, LEGACY_TOUR_NAME).unwrap_or_default(),
        performer_name: None,
        name_holder: None,
        event_date: text(object, "日程").unwrap_or_default(),
        start_time: text(object, "開演時間"),
        venue: text(object, "会場").unwrap_or_default(),
        seat_info: text(object, "座席情報"),
        trade_method: trade_method(label(object, "取引方法")),
        slot_info,
        exchange_event,
        partner: text(object, "取引相手"),
        contact_url: text(object, "連絡先URL"),
        main_contact: None,
        sub_contact: None,
        platform: label(object, "プラットフォーム").and_then(platform),
        platform_detail: text(object, "プラットフォーム詳細"),
        related_url: text(object, "関連URL"),
        price: object.get("金額").and_then(Value::as_f64),
        payment_timing: label(object, "支払いタイミング").and_then(payment_timing),
        partial_amount: None,
        payment_method: label(object, "支払い方法").and_then(payment_method),
        payments: None,
        status: status(label(object, "ステータス")),
        memo: text(object, "メモ"),
        created_at: creation_time(object, now),
        updated_at: now,
    }
}

fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn label<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

fn slot_number(object: &Map<String, Value>, key: &str) -> u32 {
    object
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

fn creation_time(object: &Map<String, Value>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    let Some(raw) = label(object, "作成日") else {
        return fallback;
    };
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |error| {
            tracing::debug!(raw, %error, "unparseable legacy creation time, using import time");
            fallback
        },
        |parsed| parsed.with_timezone(&Utc),
    )
}

fn trade_method(raw: Option<&str>) -> TradeMethod {
    match raw {
        Some("QRごと") => TradeMethod::Qr,
        Some("同行") => TradeMethod::Accompany,
        Some("番手") => TradeMethod::Slot,
        Some("ランダム") => TradeMethod::Random,
        Some("交換") => TradeMethod::Exchange,
        Some("支払い番号譲渡") => TradeMethod::PaymentNumber,
        Some("友人譲渡") => TradeMethod::Friend,
        Some("その他") | None => TradeMethod::Other,
        Some(unknown) => {
            tracing::debug!(label = unknown, "unknown legacy trade method, defaulting");
            TradeMethod::Other
        }
    }
}

// The legacy format predates the `unpaid` status, so there is no spelling
// for it here.
fn status(raw: Option<&str>) -> Status {
    match raw {
        Some("保留") => Status::Pending,
        Some("募集中") => Status::Recruiting,
        Some("確定") => Status::Confirmed,
        Some("金銭処理済") => Status::Paid,
        Some("受渡済") => Status::Received,
        Some("完了") => Status::Completed,
        None => Status::Recruiting,
        Some(unknown) => {
            tracing::debug!(label = unknown, "unknown legacy status, defaulting");
            Status::Recruiting
        }
    }
}

fn platform(raw: &str) -> Option<Platform> {
    match raw {
        "チケジャム" => Some(Platform::Ticketjam),
        "チケット流通センター" => Some(Platform::TicketRyutsu),
        "チケットサークル" => Some(Platform::TicketCircle),
        "アズカリ" => Some(Platform::Azukari),
        "Twitter/X" => Some(Platform::Twitter),
        "対面" => Some(Platform::InPerson),
        "その他" => Some(Platform::Other),
        _ => None,
    }
}

fn payment_timing(raw: &str) -> Option<PaymentTiming> {
    match raw {
        "先払い" => Some(PaymentTiming::Prepaid),
        "都度清算" => Some(PaymentTiming::Each),
        "アプリ経由" => Some(PaymentTiming::App),
        "後払い" => Some(PaymentTiming::Postpaid),
        "なし" => Some(PaymentTiming::None),
        _ => None,
    }
}

fn payment_method(raw: &str) -> Option<PaymentMethod> {
    match raw {
        "PayPay" => Some(PaymentMethod::Paypay),
        "銀行振込" => Some(PaymentMethod::Bank),
        "現金" => Some(PaymentMethod::Cash),
        "LINE Pay" => Some(PaymentMethod::Linepay),
        "メルペイ" => Some(PaymentMethod::Merpay),
        "クレジットカード決済" => Some(PaymentMethod::Creditcard),
        "アプリ決済" => Some(PaymentMethod::App),
        "その他" => Some(PaymentMethod::Other),
        _ => None,
    }
}
