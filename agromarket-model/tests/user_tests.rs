use agromarket_model::{ModelError, Order, Person, Role, User};
use agromarket_types::ProductId;
use serde_json::json;

// ── Person ───────────────────────────────────────────────────────

#[test]
fn person_accepts_valid_email() {
    let p = Person::new("Carlos Ramírez", "carlos@finca.com").unwrap();
    assert_eq!(p.name(), "Carlos Ramírez");
    assert_eq!(p.email(), "carlos@finca.com");
}

#[test]
fn person_rejects_malformed_email() {
    for bad in ["carlos", "carlos@finca", "@finca.com", "carlos @finca.com", ""] {
        let err = Person::new("Carlos", bad).unwrap_err();
        assert_eq!(err, ModelError::InvalidEmail(bad.to_string()));
    }
}

#[test]
fn person_rejects_blank_name() {
    assert_eq!(Person::new("  ", "a@b.co").unwrap_err(), ModelError::EmptyName);
}

#[test]
fn set_email_keeps_old_value_on_error() {
    let mut p = Person::new("María", "maria@campo.com").unwrap();
    assert!(p.set_email("not-an-email").is_err());
    assert_eq!(p.email(), "maria@campo.com");
    p.set_email("maria@esperanza.co").unwrap();
    assert_eq!(p.email(), "maria@esperanza.co");
}

// ── Roles ────────────────────────────────────────────────────────

#[test]
fn farmer_publishes_products_once() {
    let mut farmer = User::farmer("Carlos", "carlos@finca.com", "Finca El Progreso").unwrap();
    let pid = ProductId::new();
    farmer.publish_product(pid).unwrap();
    farmer.publish_product(pid).unwrap();
    match &farmer.role {
        Role::Farmer {
            farm_name,
            products_published,
        } => {
            assert_eq!(farm_name, "Finca El Progreso");
            assert_eq!(products_published, &vec![pid]);
        }
        Role::Buyer { .. } => panic!("expected farmer"),
    }
}

#[test]
fn buyer_cannot_publish() {
    let mut buyer = User::buyer("Juan", "juan@gmail.com", "Bogotá").unwrap();
    let err = buyer.publish_product(ProductId::new()).unwrap_err();
    assert_eq!(err, ModelError::RoleMismatch { expected: "farmer" });
}

#[test]
fn buyer_records_orders() {
    let mut buyer = User::buyer("Laura", "laura@gmail.com", "Medellín").unwrap();
    buyer.add_order(Order::new(ProductId::new(), 3.0)).unwrap();
    match &buyer.role {
        Role::Buyer { orders, .. } => assert_eq!(orders.len(), 1),
        Role::Farmer { .. } => panic!("expected buyer"),
    }
}

#[test]
fn farmer_cannot_order() {
    let mut farmer = User::farmer("María", "maria@campo.com", "La Esperanza").unwrap();
    let err = farmer.add_order(Order::new(ProductId::new(), 1.0)).unwrap_err();
    assert_eq!(err, ModelError::RoleMismatch { expected: "buyer" });
}

#[test]
fn order_quantity_is_clamped() {
    assert_eq!(Order::new(ProductId::new(), -2.0).quantity, 0.0);
}

#[test]
fn role_serializes_with_tag() {
    let farmer = User::farmer("Carlos", "carlos@finca.com", "El Progreso").unwrap();
    let value = serde_json::to_value(&farmer.role).unwrap();
    assert_eq!(value, json!({"role": "farmer", "farmName": "El Progreso", "productsPublished": []}));
    assert_eq!(farmer.role.as_str(), "farmer");
}
