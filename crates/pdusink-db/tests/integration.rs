//! Integration tests for the `pdusink-db` data layer.
//!
//! Most tests run against a private in-memory database. The open-or-create
//! tests use a scratch directory so the on-disk path is exercised too.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::indexing_slicing
)]

use pdusink_db::{DbError, PduStore, SqliteConfig, SqlitePool};
use pdusink_types::PduId;

async fn setup_memory() -> SqlitePool {
    SqlitePool::initialize(&SqliteConfig::in_memory())
        .await
        .expect("Failed to open in-memory store")
}

// =============================================================================
// Storage initializer
// =============================================================================

#[tokio::test]
async fn initialize_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdus.db");
    assert!(!path.exists());

    let url = format!("sqlite:{}", path.display());
    let pool = SqlitePool::initialize(&SqliteConfig::new(&url))
        .await
        .expect("Failed to create store");

    assert!(path.exists());
    assert_eq!(PduStore::new(&pool).count().await.unwrap(), 0);
    pool.close().await;
}

#[tokio::test]
async fn file_store_syncs_every_commit() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("pdus.db").display());
    let pool = SqlitePool::initialize(&SqliteConfig::new(&url))
        .await
        .unwrap();

    // 2 = FULL: the WAL is fsynced before a commit returns.
    let (synchronous,): (i64,) = sqlx::query_as("PRAGMA synchronous")
        .fetch_one(pool.pool())
        .await
        .unwrap();
    assert_eq!(synchronous, 2);

    let (journal_mode,): (String,) = sqlx::query_as("PRAGMA journal_mode")
        .fetch_one(pool.pool())
        .await
        .unwrap();
    assert_eq!(journal_mode, "wal");

    pool.close().await;
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let pool = setup_memory().await;
    pool.run_migrations()
        .await
        .expect("Second migration run should be a no-op");

    let store = PduStore::new(&pool);
    store.insert("after-rerun").await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn reopening_file_store_keeps_records_and_ids_grow() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("pdus.db").display());
    let config = SqliteConfig::new(&url);

    let first = {
        let pool = SqlitePool::initialize(&config).await.unwrap();
        let record = PduStore::new(&pool).insert("before-restart").await.unwrap();
        pool.close().await;
        record
    };

    let pool = SqlitePool::initialize(&config).await.unwrap();
    let store = PduStore::new(&pool);
    let second = store.insert("after-restart").await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(
        store.get(first.id).await.unwrap().map(|r| r.raw_pdu).as_deref(),
        Some("before-restart")
    );
    pool.close().await;
}

#[tokio::test]
async fn initialize_fails_for_unreachable_location() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite:{}",
        dir.path().join("missing-dir").join("pdus.db").display()
    );
    let result = SqlitePool::initialize(&SqliteConfig::new(&url)).await;
    assert!(matches!(result, Err(DbError::Sqlite(_))));
}

// =============================================================================
// PduStore
// =============================================================================

#[tokio::test]
async fn first_insert_gets_id_one() {
    let pool = setup_memory().await;
    let record = PduStore::new(&pool).insert("0A001122").await.unwrap();
    assert_eq!(record.id, PduId(1));
    assert_eq!(record.raw_pdu, "0A001122");
}

#[tokio::test]
async fn ids_strictly_increase_and_duplicates_are_separate_records() {
    let pool = setup_memory().await;
    let store = PduStore::new(&pool);

    let a = store.insert("same").await.unwrap();
    let b = store.insert("same").await.unwrap();
    let c = store.insert("other").await.unwrap();

    assert!(a.id < b.id);
    assert!(b.id < c.id);
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn created_at_is_assigned_and_non_decreasing() {
    let pool = setup_memory().await;
    let store = PduStore::new(&pool);

    let before = chrono::Utc::now() - chrono::Duration::seconds(5);
    let a = store.insert("a").await.unwrap();
    let b = store.insert("b").await.unwrap();
    let after = chrono::Utc::now() + chrono::Duration::seconds(5);

    assert!(a.created_at >= before);
    assert!(b.created_at <= after);
    assert!(b.created_at >= a.created_at);
}

#[tokio::test]
async fn payload_round_trips_exactly() {
    let pool = setup_memory().await;
    let store = PduStore::new(&pool);

    let payloads = [
        "",
        "  padded with spaces  ",
        "line one\nline two\r\n",
        "\u{1F4E1} ünïcödé",
        "'; DROP TABLE pdus; --",
    ];

    for payload in payloads {
        let inserted = store.insert(payload).await.unwrap();
        let fetched = store.get(inserted.id).await.unwrap().expect("record exists");
        assert_eq!(fetched.raw_pdu, payload);
        assert_eq!(fetched, inserted);
    }

    let all = store.list().await.unwrap();
    assert_eq!(all.len(), payloads.len());
    assert_eq!(all[0].raw_pdu, "");
}

#[tokio::test]
async fn get_unknown_id_returns_none() {
    let pool = setup_memory().await;
    let missing = PduStore::new(&pool).get(PduId(999)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn insert_after_close_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("pdus.db").display());
    let config = SqliteConfig::new(&url);

    let pool = SqlitePool::initialize(&config).await.unwrap();
    pool.close().await;
    let result = PduStore::new(&pool).insert("lost").await;
    assert!(matches!(result, Err(DbError::Sqlite(_))));

    let reopened = SqlitePool::initialize(&config).await.unwrap();
    assert_eq!(PduStore::new(&reopened).count().await.unwrap(), 0);
    reopened.close().await;
}

#[tokio::test]
async fn concurrent_inserts_get_unique_ids() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("pdus.db").display());
    let pool = SqlitePool::initialize(&SqliteConfig::new(&url))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            PduStore::new(&pool)
                .insert(&format!("pdu-{i}"))
                .await
                .map(|r| r.id)
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
    assert_eq!(PduStore::new(&pool).count().await.unwrap(), 16);
    pool.close().await;
}
