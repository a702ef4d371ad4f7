use blaster_core::model::{HighScoreEntry, HighScoreLedger};
use storage::high_scores::{decode_ledger, encode_ledger};
use storage::repository::{KeyValueStore, Storage, StorageError};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrips_and_overwrites_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("missing").await.unwrap(), None);

    repo.put("greeting", "hello").await.unwrap();
    repo.put("greeting", "hi").await.unwrap();
    assert_eq!(repo.get("greeting").await.unwrap().as_deref(), Some("hi"));

    repo.remove("greeting").await.unwrap();
    assert_eq!(repo.get("greeting").await.unwrap(), None);
    assert!(matches!(
        repo.remove("greeting").await,
        Err(StorageError::NotFound)
    ));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.put("k", "v").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn sqlite_storage_persists_encoded_ledger() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_ledger?mode=memory&cache=shared")
        .await
        .expect("storage");

    let ledger = HighScoreLedger::from_entries(vec![
        HighScoreEntry::new(90, "1/1/2025"),
        HighScoreEntry::new(85, "1/2/2025"),
        HighScoreEntry::new(80, "1/3/2025"),
    ]);
    storage
        .kv
        .put("binaryBlasterHighScores", &encode_ledger(&ledger).unwrap())
        .await
        .unwrap();

    let raw = storage
        .kv
        .get("binaryBlasterHighScores")
        .await
        .unwrap()
        .expect("ledger stored");
    assert_eq!(decode_ledger(&raw).unwrap(), ledger);
}
