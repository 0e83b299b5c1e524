//! The fixed demonstration dataset.
//!
//! Loaded by [`TicketStore::load_sample_data`](crate::TicketStore); covers
//! the common transaction patterns (selling, buying, exchange, slot
//! transfer, payment history, completed) so every feature has something to
//! show.

use chrono::{DateTime, Utc};

use ticket_ledger_core::{
    ExchangeEvent, Payment, PaymentId, PaymentMethod, PaymentTiming, Platform, SlotInfo, Status,
    Ticket, TicketDraft, TicketId, TradeMethod,
};

/// Fixed timestamps in the dataset are RFC 3339 literals.
fn timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map_or_else(|_| DateTime::<Utc>::default(), |dt| dt.with_timezone(&Utc))
}

fn ticket(draft: TicketDraft, id: &str, created_at: &str, updated_at: &str) -> Ticket {
    let mut ticket = Ticket::with_identity(draft, TicketId::from(id), timestamp(created_at));
    ticket.updated_at = timestamp(updated_at);
    ticket
}

/// The demonstration records, ids `sample-1` through `sample-10`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        // Seller, undecided yet
        ticket(
            TicketDraft {
                performer_name: Some("Aぇ! group".into()),
                name_holder: Some("自分名義".into()),
                start_time: Some("17:00".into()),
                seat_info: Some("アリーナ Bブロック 5列".into()),
                trade_method: TradeMethod::Qr,
                status: Status::Pending,
                price: Some(9800.0),
                memo: Some("友達と被ったけど、まだどうするか決めてない。様子見。".into()),
                ..TicketDraft::new(
                    "Aぇ! group LIVE TOUR 2026 \"RUNWAY\"",
                    "2026-04-12",
                    "大阪城ホール",
                )
            },
            "sample-1",
            "2026-01-10T10:00:00Z",
            "2026-01-10T10:00:00Z",
        ),
        // Seller, recruiting on X with contact links
        ticket(
            TicketDraft {
                performer_name: Some("SixTONES".into()),
                name_holder: Some("自分名義".into()),
                start_time: Some("18:00".into()),
                seat_info: Some("スタンド 1塁側 20ゲート 5列".into()),
                trade_method: TradeMethod::Qr,
                status: Status::Recruiting,
                price: Some(12000.0),
                payment_timing: Some(PaymentTiming::CashOnDelivery),
                platform: Some(Platform::Twitter),
                main_contact: Some("https://x.com/example_user".into()),
                related_url: Some("https://x.com/example_user/status/1234567890".into()),
                memo: Some(
                    "Xで募集中。リプかDMでご連絡ください。当日手渡し希望。本人確認対応可。".into(),
                ),
                ..TicketDraft::new(
                    "SixTONES LIVE TOUR 2026 \"VVS\"",
                    "2026-03-22",
                    "東京ドーム",
                )
            },
            "sample-2",
            "2026-01-08T15:00:00Z",
            "2026-01-11T09:00:00Z",
        ),
        // Seller, listed on a resale platform
        ticket(
            TicketDraft {
                performer_name: Some("Snow Man".into()),
                name_holder: Some("友人A".into()),
                start_time: Some("17:00".into()),
                trade_method: TradeMethod::Accompany,
                status: Status::Recruiting,
                price: Some(13000.0),
                payment_timing: Some(PaymentTiming::Platform),
                platform: Some(Platform::Ticketjam),
                related_url: Some("https://ticketjam.jp/items/example123".into()),
                memo: Some("友人Aの名義分。同行者として入場。チケジャムに出品中。".into()),
                ..TicketDraft::new(
                    "Snow Man LIVE TOUR 2026 \"RAYS\"",
                    "2026-05-03",
                    "京セラドーム大阪",
                )
            },
            "sample-3",
            "2026-01-05T20:00:00Z",
            "2026-01-05T20:00:00Z",
        ),
        // Seller, buyer decided
        ticket(
            TicketDraft {
                performer_name: Some("Aぇ! group".into()),
                name_holder: Some("自分名義".into()),
                start_time: Some("13:00".into()),
                seat_info: Some("スタンド Iブロック 8列".into()),
                trade_method: TradeMethod::Qr,
                status: Status::Confirmed,
                partner: Some("田中さん".into()),
                price: Some(9800.0),
                payment_timing: Some(PaymentTiming::CashOnDelivery),
                platform: Some(Platform::Twitter),
                main_contact: Some("https://x.com/tanaka_example".into()),
                sub_contact: Some("LINE: tanaka123".into()),
                memo: Some("Xで見つけてくれた田中さんに譲渡予定。当日手渡しで精算。".into()),
                ..TicketDraft::new(
                    "Aぇ! group LIVE TOUR 2026 \"RUNWAY\"",
                    "2026-04-13",
                    "大阪城ホール",
                )
            },
            "sample-4",
            "2026-01-09T14:00:00Z",
            "2026-01-12T10:00:00Z",
        ),
        // Buyer, transfer agreed
        ticket(
            TicketDraft {
                performer_name: Some("なにわ男子".into()),
                start_time: Some("17:00".into()),
                trade_method: TradeMethod::Accompany,
                status: Status::Confirmed,
                partner: Some("山田さん".into()),
                price: Some(10500.0),
                payment_timing: Some(PaymentTiming::CashOnDelivery),
                platform: Some(Platform::Twitter),
                main_contact: Some("https://x.com/yamada_example".into()),
                related_url: Some("https://x.com/yamada_example/status/9876543210".into()),
                memo: Some(
                    "Xで見つけた山田さんから同行枠で譲っていただく。当日現地で手渡し。".into(),
                ),
                ..TicketDraft::new(
                    "なにわ男子 LIVE TOUR 2026 \"POPMALL 2\"",
                    "2026-06-15",
                    "横浜アリーナ",
                )
            },
            "sample-5",
            "2026-01-11T18:00:00Z",
            "2026-01-12T09:00:00Z",
        ),
        // Buyer, paid through the platform, waiting for the QR
        ticket(
            TicketDraft {
                performer_name: Some("Travis Japan".into()),
                start_time: Some("18:00".into()),
                seat_info: Some("アリーナ C3ブロック".into()),
                trade_method: TradeMethod::Qr,
                status: Status::Paid,
                partner: Some("高橋さん".into()),
                price: Some(11000.0),
                payment_timing: Some(PaymentTiming::Platform),
                platform: Some(Platform::TicketRyutsu),
                related_url: Some("https://www.ticket.co.jp/trade/example456".into()),
                memo: Some(
                    "チケット流通センター経由で購入済み。QRが届くのを待っている。".into(),
                ),
                ..TicketDraft::new(
                    "Travis Japan LIVE TOUR 2026 \"ELEVATION\"",
                    "2026-07-20",
                    "さいたまスーパーアリーナ",
                )
            },
            "sample-6",
            "2026-01-06T11:00:00Z",
            "2026-01-08T16:00:00Z",
        ),
        // Exchange, counterpart decided
        ticket(
            TicketDraft {
                performer_name: Some("SixTONES".into()),
                name_holder: Some("自分名義".into()),
                start_time: Some("17:00".into()),
                trade_method: TradeMethod::Exchange,
                status: Status::Confirmed,
                exchange_event: Some(ExchangeEvent {
                    tour_name: "SixTONES LIVE TOUR 2026 \"VVS\"".into(),
                    event_date: "2026-03-30".into(),
                    start_time: Some("17:00".into()),
                    venue: "京セラドーム大阪".into(),
                }),
                partner: Some("鈴木さん".into()),
                platform: Some(Platform::Twitter),
                main_contact: Some("https://x.com/suzuki_example".into()),
                memo: Some("鈴木さんと29日⇔30日で交換。公演前日にQR送り合い予定。".into()),
                ..TicketDraft::new(
                    "SixTONES LIVE TOUR 2026 \"VVS\"",
                    "2026-03-29",
                    "京セラドーム大阪",
                )
            },
            "sample-7",
            "2026-01-07T20:00:00Z",
            "2026-01-10T14:00:00Z",
        ),
        // Slot transfer out of a four-name booking
        ticket(
            TicketDraft {
                performer_name: Some("Snow Man".into()),
                name_holder: Some("自分名義".into()),
                start_time: Some("17:00".into()),
                trade_method: TradeMethod::Slot,
                status: Status::Confirmed,
                slot_info: Some(SlotInfo {
                    total_slots: 4,
                    my_slot: 2,
                }),
                partner: Some("佐藤さん".into()),
                price: Some(12500.0),
                payment_timing: Some(PaymentTiming::CashOnDelivery),
                main_contact: Some("https://x.com/sato_example".into()),
                sub_contact: Some("LINE ID: sato_line".into()),
                memo: Some("4名義中2番手。佐藤さんに譲渡。当日現地で精算予定。".into()),
                ..TicketDraft::new(
                    "Snow Man LIVE TOUR 2026 \"RAYS\"",
                    "2026-05-04",
                    "京セラドーム大阪",
                )
            },
            "sample-8",
            "2026-01-08T12:00:00Z",
            "2026-01-11T15:00:00Z",
        ),
        // Handed over, payment history recorded, waiting to close
        ticket(
            TicketDraft {
                performer_name: Some("Aぇ! group".into()),
                name_holder: Some("自分名義".into()),
                start_time: Some("17:00".into()),
                seat_info: Some("レベル2 セクション205".into()),
                trade_method: TradeMethod::Qr,
                status: Status::Received,
                partner: Some("中村さん".into()),
                price: Some(9800.0),
                payment_timing: Some(PaymentTiming::Prepaid),
                payment_method: Some(PaymentMethod::Bank),
                platform: Some(Platform::Twitter),
                main_contact: Some("https://x.com/nakamura_example".into()),
                payments: Some(vec![Payment {
                    id: PaymentId::from("payment-1"),
                    amount: 9800.0,
                    paid_at: timestamp("2026-02-01T10:00:00Z"),
                    method: PaymentMethod::Bank,
                    memo: Some("振込確認済み".into()),
                }]),
                memo: Some("中村さんにQRごと譲渡完了。公演終わったら完了にする。".into()),
                ..TicketDraft::new(
                    "Aぇ! group LIVE TOUR 2026 \"RUNWAY\"",
                    "2026-02-11",
                    "Kアリーナ横浜",
                )
            },
            "sample-9",
            "2026-01-05T09:00:00Z",
            "2026-02-10T18:00:00Z",
        ),
        // All done
        ticket(
            TicketDraft {
                performer_name: Some("SixTONES".into()),
                name_holder: Some("自分名義".into()),
                start_time: Some("17:00".into()),
                seat_info: Some("アリーナ A5ブロック 3列".into()),
                trade_method: TradeMethod::Accompany,
                status: Status::Completed,
                partner: Some("友人B".into()),
                price: Some(11500.0),
                payment_timing: Some(PaymentTiming::CashOnDelivery),
                memo: Some("友人Bと参戦。最高のライブだった！".into()),
                ..TicketDraft::new(
                    "SixTONES LIVE TOUR 2025 \"GOLD\"",
                    "2025-12-28",
                    "東京ドーム",
                )
            },
            "sample-10",
            "2025-10-15T14:00:00Z",
            "2025-12-29T12:00:00Z",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_ids_are_distinct_and_timestamps_ordered() {
        let tickets = sample_tickets();
        assert_eq!(tickets.len(), 10);
        for ticket in &tickets {
            assert!(ticket.created_at <= ticket.updated_at, "{}", ticket.id);
        }
        let mut ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tickets.len());
    }

    #[test]
    fn dataset_covers_the_trade_patterns() {
        let tickets = sample_tickets();
        assert!(tickets
            .iter()
            .any(|t| t.trade_method == TradeMethod::Exchange && t.exchange_event.is_some()));
        assert!(tickets
            .iter()
            .any(|t| t.trade_method == TradeMethod::Slot && t.slot_info.is_some()));
        assert!(tickets
            .iter()
            .any(|t| t.payments.as_ref().is_some_and(|p| !p.is_empty())));
        assert!(tickets.iter().any(|t| t.status == Status::Completed));
    }
}
