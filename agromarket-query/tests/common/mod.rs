#![allow(dead_code)]

use agromarket_model::{ProductDraft, ProductRecord};
use agromarket_types::{Category, Priority, ProductId};
use chrono::{TimeZone, Utc};

/// Builds a normalized record; `active: false` is applied after creation.
pub fn record(
    name: &str,
    description: &str,
    category: Category,
    priority: Priority,
    active: bool,
    price: f64,
    stock: f64,
) -> ProductRecord {
    let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let draft = ProductDraft::new(name)
        .with_description(description)
        .with_category(category)
        .with_priority(priority)
        .with_price(price)
        .with_stock(stock);
    let mut record = ProductRecord::from_draft(draft, ProductId::new(), now).unwrap();
    record.set_active(active, now);
    record
}

/// The two-record catalog used across the scenario tests.
pub fn tomate_and_mango() -> Vec<ProductRecord> {
    vec![
        record("Tomate", "Tomate chonto de invernadero", Category::Vegetable, Priority::High, true, 2.0, 10.0),
        record("Mango", "Mango de azúcar", Category::Fruit, Priority::Medium, false, 3.0, 5.0),
    ]
}

pub fn names(records: &[&ProductRecord]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}
