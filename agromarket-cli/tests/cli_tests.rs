use agromarket_cli::{execute, load_config, Args, Command};
use agromarket_store::{CatalogStore, JsonFilePersistence, MemoryPersistence, StoreConfig};
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("agromarket").chain(argv.iter().copied())).unwrap()
}

fn memory_store() -> CatalogStore<MemoryPersistence> {
    CatalogStore::open(MemoryPersistence::new(), StoreConfig::default()).unwrap()
}

fn run(store: &mut CatalogStore<MemoryPersistence>, argv: &[&str]) -> Value {
    execute(parse(argv).command, store).unwrap()
}

// ── Argument parsing ─────────────────────────────────────────────

#[test]
fn global_flags_parse() {
    let args = parse(&["--data-dir", "/tmp/agro", "--max-items", "5", "-v", "stats"]);
    assert_eq!(args.data_dir.to_str(), Some("/tmp/agro"));
    assert_eq!(args.max_items, Some(5));
    assert!(args.verbose);
    assert!(matches!(args.command, Command::Stats));
}

#[test]
fn invalid_product_id_is_rejected_by_parser() {
    let result = Args::try_parse_from(["agromarket", "toggle", "1718000000000"]);
    assert!(result.is_err());
}

// ── Commands ─────────────────────────────────────────────────────

#[test]
fn add_accepts_form_text() {
    let mut store = memory_store();
    let out = run(
        &mut store,
        &["add", "Tomate", "--category", "vegetable", "--price", "2", "--stock", "10"],
    );
    assert_eq!(out["name"], "Tomate");
    assert_eq!(out["category"], "vegetable");
    assert_eq!(out["price"], 2.0);
    assert_eq!(out["unit"], "kg");
    assert_eq!(store.len(), 1);
}

#[test]
fn add_rejects_blank_name() {
    let mut store = memory_store();
    let result = execute(parse(&["add", "  "]).command, &mut store);
    assert!(result.is_err());
}

#[test]
fn list_filters_and_reports_stats() {
    let mut store = memory_store();
    run(&mut store, &["add", "Tomate", "--category", "vegetable", "--price", "2", "--stock", "10"]);
    let mango = run(&mut store, &["add", "Mango", "--price", "3", "--stock", "5"]);
    let mango_id = mango["id"].as_str().unwrap().to_string();
    run(&mut store, &["toggle", &mango_id]);

    let out = run(&mut store, &["list", "--status", "active"]);
    let items = out["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Tomate");
    assert_eq!(out["stats"]["total"], 2);
    assert_eq!(out["stats"]["totalValue"], 35.0);

    let out = run(&mut store, &["list", "--search", "MAN"]);
    assert_eq!(out["items"][0]["name"], "Mango");
}

#[test]
fn update_applies_json_patch() {
    let mut store = memory_store();
    let added = run(&mut store, &["add", "Queso", "--category", "dairy"]);
    let id = added["id"].as_str().unwrap().to_string();
    let out = run(&mut store, &["update", &id, r#"{"price": "7.5", "priority": "high"}"#]);
    assert_eq!(out["price"], 7.5);
    assert_eq!(out["priority"], "high");
    assert!(out["updatedAt"].is_string());
}

#[test]
fn show_and_remove() {
    let mut store = memory_store();
    let added = run(&mut store, &["add", "Arroz", "--location", "Meta"]);
    let id = added["id"].as_str().unwrap().to_string();

    let info = run(&mut store, &["show", &id]);
    assert_eq!(info["kind"], "unclassified");
    assert_eq!(info["location"], "Meta");

    run(&mut store, &["remove", &id]);
    assert!(execute(parse(&["show", &id]).command, &mut store).is_err());
}

#[test]
fn clear_unavailable_reports_count() {
    let mut store = memory_store();
    let added = run(&mut store, &["add", "Yuca"]);
    let id = added["id"].as_str().unwrap().to_string();
    run(&mut store, &["toggle", &id]);
    let out = run(&mut store, &["clear-unavailable"]);
    assert_eq!(out["removed"], 1);
    assert!(store.is_empty());
}

// ── Configuration & files ────────────────────────────────────────

#[test]
fn config_file_with_flag_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("agromarket.json");
    fs::write(&path, r#"{"storage_key": "finca"}"#).unwrap();

    let config = load_config(Some(path.as_path()), Some(3)).unwrap();
    assert_eq!(config.storage_key, "finca");
    assert_eq!(config.max_items, 3);

    let defaults = load_config(None, None).unwrap();
    assert_eq!(defaults, StoreConfig::default());
}

#[test]
fn commands_persist_to_data_dir() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::default();
    let mut store =
        CatalogStore::open(JsonFilePersistence::in_dir(dir.path(), &config), config.clone()).unwrap();
    execute(parse(&["add", "Lechuga", "--category", "vegetable"]).command, &mut store).unwrap();

    let saved = fs::read_to_string(dir.path().join("agroMarketItems.json")).unwrap();
    let parsed: Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(parsed[0]["name"], "Lechuga");
}
