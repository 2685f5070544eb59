//! Cart, checkout, contact, and persistence-format scenarios.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use hearthside_core::OrderStatus;
use hearthside_storefront::error::AppError;
use hearthside_storefront::form::ContactForm;

use hearthside_integration_tests::storefront_in;

#[tokio::test]
async fn test_cart_checkout_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut front = storefront_in(dir.path(), 1.0);

    assert!(front.add_to_cart("bundle").is_some());
    assert!(front.add_to_cart("bundle").is_some());
    assert!(front.add_to_cart("driftwood").is_none());

    let view = front.cart_view();
    assert_eq!(view.item_count, 2);
    assert_eq!(view.subtotal, "$19.98");

    let receipt = front.checkout().await.unwrap();
    assert_eq!(receipt.order.status, OrderStatus::Pending);
    assert_eq!(receipt.order.total, Decimal::new(1998, 2));
    assert_eq!(front.cart_view().item_count, 0);

    // Orders persist; the cart does not
    let reopened = storefront_in(dir.path(), 1.0);
    assert_eq!(reopened.records().orders().len(), 1);
    assert_eq!(reopened.cart_view().item_count, 0);
}

#[tokio::test]
async fn test_contact_message_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut front = storefront_in(dir.path(), 1.0);

    front
        .submit_contact(ContactForm {
            name: "Ann".to_owned(),
            email: "ann@example.com".to_owned(),
            phone: String::new(),
            message: "Do you deliver on weekends?".to_owned(),
        })
        .unwrap();

    let reopened = storefront_in(dir.path(), 1.0);
    let contacts = reopened.records().contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts.first().unwrap().name, "Ann");
}

#[tokio::test]
async fn test_portal_unknown_customer() {
    let dir = tempfile::tempdir().unwrap();
    let front = storefront_in(dir.path(), 1.0);
    assert!(matches!(
        front.load_portal("ghost@example.com"),
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_storage_layout_uses_literal_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut front = storefront_in(dir.path(), 1.0);
    front
        .submit_contact(ContactForm {
            name: "Ann".to_owned(),
            email: "ann@example.com".to_owned(),
            phone: String::new(),
            message: "hi there".to_owned(),
        })
        .unwrap();

    // One JSON array file per collection key
    for key in ["customers", "subscriptions", "orders", "contacts"] {
        let path = dir.path().join(format!("{key}.json"));
        assert!(path.is_file(), "missing {key}.json");
        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array(), "{key}.json is not a JSON array");
    }

    // Records serialize camelCase with no schema envelope
    let contacts: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("contacts.json")).unwrap())
            .unwrap();
    let first = contacts.get(0).unwrap();
    assert_eq!(first["email"], "ann@example.com");
    assert!(first.get("submittedAt").is_some());
}
