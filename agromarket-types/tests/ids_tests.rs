use agromarket_types::{ProductId, UserId};
use std::collections::HashSet;
use std::str::FromStr;

// ── ProductId ─────────────────────────────────────────────────────

#[test]
fn product_id_new_is_unique() {
    let ids: HashSet<ProductId> = (0..64).map(|_| ProductId::new()).collect();
    assert_eq!(ids.len(), 64);
}

#[test]
fn product_id_display_parses_back() {
    let id = ProductId::new();
    assert_eq!(id.to_string().parse::<ProductId>().unwrap(), id);
}

#[test]
fn product_id_parse_tolerates_surrounding_whitespace() {
    let id = ProductId::new();
    assert_eq!(ProductId::from_str(&format!("  {id}\n")).unwrap(), id);
}

#[test]
fn product_id_rejects_legacy_numeric_ids() {
    assert!("not-a-uuid".parse::<ProductId>().is_err());
    assert!("1718000000000".parse::<ProductId>().is_err());
}

#[test]
fn product_ids_are_time_ordered() {
    let first = ProductId::new();
    let second = ProductId::new();
    assert!(first < second);
}

#[test]
fn product_id_serializes_as_bare_string() {
    let id = ProductId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let parsed: ProductId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

// ── UserId ────────────────────────────────────────────────────────

#[test]
fn user_id_default_is_fresh() {
    assert_ne!(UserId::default(), UserId::default());
}

#[test]
fn user_id_from_str() {
    let id = UserId::new();
    assert_eq!(UserId::from_str(&id.to_string()).unwrap(), id);
    assert!(UserId::from_str("garbage").is_err());
}

#[test]
fn user_id_debug_contains_type_name() {
    let debug = format!("{:?}", UserId::new());
    assert!(debug.contains("UserId"));
}
