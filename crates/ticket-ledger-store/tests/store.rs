//! Store integration tests over the in-memory slot.

use std::collections::HashSet;

use ticket_ledger_core::query::{ListOptions, SortKey, SortOrder, StatusFilter};
use ticket_ledger_core::{Status, TicketDraft, TicketId, TicketPatch};
use ticket_ledger_store::{Loaded, MemorySlot, TicketStore};

fn store() -> TicketStore<MemorySlot> {
    TicketStore::new(MemorySlot::new())
}

fn draft(tour: &str, date: &str) -> TicketDraft {
    TicketDraft::new(tour, date, "Dome")
}

#[tokio::test]
async fn create_assigns_pairwise_distinct_ids() {
    let store = store();
    let mut ids = HashSet::new();
    for i in 0..50 {
        let ticket = store.create(draft(&format!("Tour {i}"), "2026-01-01")).await.unwrap();
        assert!(ids.insert(ticket.id.clone()), "duplicate id {}", ticket.id);
    }
    assert_eq!(store.get_all().await.unwrap().len(), 50);
}

#[tokio::test]
async fn create_sets_both_timestamps_to_the_same_instant() {
    let store = store();
    let ticket = store.create(draft("Tour", "2026-01-01")).await.unwrap();
    assert_eq!(ticket.created_at, ticket.updated_at);

    let persisted = store.get_by_id(&ticket.id).await.unwrap().unwrap();
    assert_eq!(persisted, ticket);
}

#[tokio::test]
async fn get_by_id_absent_is_none() {
    let store = store();
    store.create(draft("Tour", "2026-01-01")).await.unwrap();
    let missing = store.get_by_id(&TicketId::from("no-such-id")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn update_merges_and_preserves_identity() {
    let store = store();
    let ticket = store
        .create(TicketDraft {
            partner: Some("Tanaka".into()),
            ..draft("Tour", "2026-01-01")
        })
        .await
        .unwrap();

    let updated = store
        .update(
            &ticket.id,
            TicketPatch {
                status: Some(Status::Confirmed),
                price: Some(Some(9800.0)),
                ..TicketPatch::default()
            },
        )
        .await
        .unwrap()
        .expect("record exists");

    assert_eq!(updated.id, ticket.id);
    assert_eq!(updated.created_at, ticket.created_at);
    assert!(updated.updated_at >= ticket.updated_at);
    assert_eq!(updated.status, Status::Confirmed);
    assert_eq!(updated.price, Some(9800.0));
    // omitted fields keep their stored value
    assert_eq!(updated.partner.as_deref(), Some("Tanaka"));

    // and the merge is persisted, not just returned
    let persisted = store.get_by_id(&ticket.id).await.unwrap().unwrap();
    assert_eq!(persisted, updated);
}

#[tokio::test]
async fn update_can_clear_an_optional_field() {
    let store = store();
    let ticket = store
        .create(TicketDraft {
            seat_info: Some("Arena B5".into()),
            ..draft("Tour", "2026-01-01")
        })
        .await
        .unwrap();

    let updated = store
        .update(
            &ticket.id,
            TicketPatch {
                seat_info: Some(None),
                ..TicketPatch::default()
            },
        )
        .await
        .unwrap()
        .expect("record exists");
    assert_eq!(updated.seat_info, None);
}

#[tokio::test]
async fn update_of_missing_id_is_none_and_leaves_storage_untouched() {
    let store = store();
    store.create(draft("Tour", "2026-01-01")).await.unwrap();
    let before = store.export_data().await.unwrap();

    let result = store
        .update(
            &TicketId::from("no-such-id"),
            TicketPatch {
                status: Some(Status::Completed),
                ..TicketPatch::default()
            },
        )
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(store.export_data().await.unwrap(), before);
}

#[tokio::test]
async fn delete_removes_exactly_the_requested_record() {
    let store = store();
    let keep = store.create(draft("Keep", "2026-01-01")).await.unwrap();
    let gone = store.create(draft("Gone", "2026-01-02")).await.unwrap();

    assert!(store.delete(&gone.id).await.unwrap());
    let remaining = store.get_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    // second delete of the same id reports false
    assert!(!store.delete(&gone.id).await.unwrap());
}

#[tokio::test]
async fn delete_of_missing_id_is_false_and_leaves_storage_untouched() {
    let store = store();
    store.create(draft("Tour", "2026-01-01")).await.unwrap();
    let before = store.export_data().await.unwrap();

    assert!(!store.delete(&TicketId::from("no-such-id")).await.unwrap());
    assert_eq!(store.export_data().await.unwrap(), before);
}

#[tokio::test]
async fn absent_blob_and_corrupt_blob_both_flatten_to_empty() {
    let empty = TicketStore::new(MemorySlot::new());
    assert!(matches!(empty.load().await.unwrap(), Loaded::Empty));
    assert!(empty.get_all().await.unwrap().is_empty());

    let corrupt = TicketStore::new(MemorySlot::seeded("not json at all"));
    assert!(matches!(
        corrupt.load().await.unwrap(),
        Loaded::Corrupt { .. }
    ));
    assert!(corrupt.get_all().await.unwrap().is_empty());

    // a well-formed blob whose records are out of domain is corrupt too
    let bad_record = TicketStore::new(MemorySlot::seeded(r#"[{"id":"x","status":"bogus"}]"#));
    assert!(matches!(
        bad_record.load().await.unwrap(),
        Loaded::Corrupt { .. }
    ));
}

#[tokio::test]
async fn list_composes_filter_and_sort_over_the_snapshot() {
    let store = store();
    store
        .create(TicketDraft {
            status: Status::Completed,
            ..draft("Done", "2026-01-05")
        })
        .await
        .unwrap();
    store
        .create(TicketDraft {
            status: Status::Recruiting,
            ..draft("Late", "2026-06-01")
        })
        .await
        .unwrap();
    store
        .create(TicketDraft {
            status: Status::Recruiting,
            ..draft("Early", "2026-02-01")
        })
        .await
        .unwrap();

    let view = store
        .list(&ListOptions {
            status: StatusFilter::Only(Status::Recruiting),
            sort_by: SortKey::EventDate,
            sort_order: SortOrder::Asc,
            ..ListOptions::default()
        })
        .await
        .unwrap();
    let tours: Vec<&str> = view.iter().map(|t| t.tour_name.as_str()).collect();
    assert_eq!(tours, vec!["Early", "Late"]);
}
