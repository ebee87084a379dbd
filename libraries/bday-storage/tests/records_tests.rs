//! Integration tests for the records vertical slice
//!
//! Covers creation with generated IDs, listing, deletion, and the
//! silent no-op behavior of deleting unknown IDs.

mod test_helpers;

use bday_core::types::RecordId;
use test_helpers::TestDb;

#[tokio::test]
async fn test_create_returns_record_with_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let record = bday_storage::records::create(pool, "Ada", "1990-03-05", "ada@x.com")
        .await
        .expect("Failed to create record");

    assert_eq!(record.name, "Ada");
    assert_eq!(record.date_of_birth, "1990-03-05");
    assert_eq!(record.email, "ada@x.com");
    assert!(!record.id.as_str().is_empty());
}

#[tokio::test]
async fn test_created_records_appear_in_listing() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let ada = bday_storage::records::create(pool, "Ada", "1990-03-05", "ada@x.com")
        .await
        .expect("Failed to create record");
    let bob = bday_storage::records::create(pool, "Bob", "1985-07-12", "bob@x.com")
        .await
        .expect("Failed to create record");

    let all = bday_storage::records::get_all(pool)
        .await
        .expect("Failed to list records");

    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|r| r.id == ada.id && r.name == "Ada"));
    assert!(all.iter().any(|r| r.id == bob.id && r.name == "Bob"));
}

#[tokio::test]
async fn test_ids_are_unique_across_identical_inputs() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = bday_storage::records::create(pool, "Ada", "1990-03-05", "ada@x.com")
        .await
        .expect("Failed to create record");
    let second = bday_storage::records::create(pool, "Ada", "1990-03-05", "ada@x.com")
        .await
        .expect("Failed to create record");

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_get_by_id_round_trips_fields() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = bday_storage::records::create(pool, "Ada", "1990-03-05", "ada@x.com")
        .await
        .expect("Failed to create record");

    let fetched = bday_storage::records::get_by_id(pool, &created.id)
        .await
        .expect("Failed to fetch record")
        .expect("Record should exist");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.date_of_birth, created.date_of_birth);
    assert_eq!(fetched.email, created.email);
    // Timestamps are persisted at second precision
    assert_eq!(fetched.created_at.timestamp(), created.created_at.timestamp());
}

#[tokio::test]
async fn test_delete_removes_record_from_listing() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let record = bday_storage::records::create(pool, "Ada", "1990-03-05", "ada@x.com")
        .await
        .expect("Failed to create record");

    let deleted = bday_storage::records::delete_by_id(pool, &record.id)
        .await
        .expect("Failed to delete record");
    assert!(deleted);

    let all = bday_storage::records::get_all(pool)
        .await
        .expect("Failed to list records");
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_id_is_a_silent_noop() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let record = bday_storage::records::create(pool, "Ada", "1990-03-05", "ada@x.com")
        .await
        .expect("Failed to create record");

    let deleted = bday_storage::records::delete_by_id(pool, &RecordId::new("no-such-id"))
        .await
        .expect("Delete of unknown id should not error");
    assert!(!deleted);

    let all = bday_storage::records::get_all(pool)
        .await
        .expect("Failed to list records");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, record.id);
}

#[tokio::test]
async fn test_store_handle_delegates_to_slice() {
    let test_db = TestDb::new().await;
    let store = bday_storage::RecordStore::new(test_db.pool().clone());

    let record = store
        .create("Ada", "1990-03-05", "ada@x.com")
        .await
        .expect("Failed to create record");

    let all = store.get_all().await.expect("Failed to list records");
    assert_eq!(all.len(), 1);

    assert!(store
        .delete_by_id(&record.id)
        .await
        .expect("Failed to delete record"));
    assert!(store.get_all().await.unwrap().is_empty());
}
