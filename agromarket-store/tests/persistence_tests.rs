use agromarket_model::ProductDraft;
use agromarket_store::{CatalogPersistence, CatalogStore, JsonFilePersistence, StoreConfig, StoreError};
use agromarket_types::{Category, Priority};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn file_path_uses_storage_key() {
    let dir = TempDir::new().unwrap();
    let persistence = JsonFilePersistence::in_dir(dir.path(), &StoreConfig::default());
    assert_eq!(persistence.path(), dir.path().join("agroMarketItems.json").as_path());
}

#[test]
fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let persistence = JsonFilePersistence::new(dir.path().join("absent.json"));
    assert!(persistence.load().unwrap().is_empty());
}

#[test]
fn blank_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "  \n").unwrap();
    assert!(JsonFilePersistence::new(path).load().unwrap().is_empty());
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{not json").unwrap();
    let err = JsonFilePersistence::new(path).load().unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[test]
fn store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::default();

    let created = {
        let mut store =
            CatalogStore::open(JsonFilePersistence::in_dir(dir.path(), &config), config.clone()).unwrap();
        let record = store
            .create(
                ProductDraft::new("Papa criolla")
                    .with_category(Category::Tuber)
                    .with_priority(Priority::High)
                    .with_price(4.0)
                    .with_stock(30.0),
            )
            .unwrap();
        store.toggle_availability(record.id()).unwrap()
    };

    let reopened = CatalogStore::open(JsonFilePersistence::in_dir(dir.path(), &config), config).unwrap();
    assert_eq!(reopened.records(), std::slice::from_ref(&created));
}

#[test]
fn save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data").join("catalog.json");
    let mut persistence = JsonFilePersistence::new(&path);
    persistence.save(&[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn hand_edited_file_is_normalized_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[{
            "id": "01900000-0000-7000-8000-000000000001",
            "name": "Cuajada",
            "category": "cheese",
            "price": "-5",
            "stock": "12",
            "createdAt": "2026-03-01T08:00:00Z"
        }]"#,
    )
    .unwrap();
    let records = JsonFilePersistence::new(path).load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category(), Category::Fruit);
    assert_eq!(records[0].price(), 0.0);
    assert_eq!(records[0].stock(), 12.0);
}

#[test]
fn repeated_ids_keep_first_record_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[
            {"id": "01900000-0000-7000-8000-0000000000aa", "name": "A", "createdAt": "2026-01-15T10:00:00Z"},
            {"id": "01900000-0000-7000-8000-0000000000bb", "name": "Other", "createdAt": "2026-01-15T10:00:00Z"},
            {"id": "01900000-0000-7000-8000-0000000000aa", "name": "B", "createdAt": "2026-01-15T10:00:00Z"}
        ]"#,
    )
    .unwrap();

    let mut store = CatalogStore::open(JsonFilePersistence::new(&path), StoreConfig::default()).unwrap();
    assert_eq!(store.len(), 2);

    let id = "01900000-0000-7000-8000-0000000000aa".parse().unwrap();
    assert_eq!(store.find(id).map(|r| r.name()), Some("A"));

    store.delete(id).unwrap();
    assert!(store.find(id).is_none());
    assert_eq!(store.len(), 1);

    let saved = JsonFilePersistence::new(&path).load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name(), "Other");
}
