//! RocksDB slot integration tests.

use ticket_ledger_core::TicketDraft;
use ticket_ledger_store::{RocksSlot, TicketStore};

#[tokio::test]
async fn collection_survives_a_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let store = TicketStore::new(RocksSlot::open(dir.path()).unwrap());
        store
            .create(TicketDraft::new("Tour", "2026-04-12", "Osaka-jo Hall"))
            .await
            .unwrap()
        // store (and the database handle) drops here, releasing the lock
    };

    let reopened = TicketStore::new(RocksSlot::open(dir.path()).unwrap());
    let records = reopened.get_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], created);
}

#[tokio::test]
async fn fresh_database_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = TicketStore::new(RocksSlot::open(dir.path()).unwrap());
    assert!(store.get_all().await.unwrap().is_empty());
}
