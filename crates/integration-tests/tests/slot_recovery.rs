//! Recovery behavior of the durable slot.
//!
//! A cart slot can hold garbage (interrupted write, another tab's bug) or
//! nothing at all; the store must start empty, never error, and never write
//! before hydration has resolved.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use mall_cart::{CartAction, CartStorage, CartStore, JsonFileStorage};
use mall_core::LineId;
use mall_integration_tests::{catalog_item, init_test_tracing};

#[tokio::test]
async fn corrupt_slot_recovers_to_empty_cart() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path(), "mall-cart");
    tokio::fs::write(storage.path(), b"<<<definitely not json>>>")
        .await
        .unwrap();

    let store = CartStore::new(storage.clone());
    store.hydrate().await;
    assert!(store.state().is_empty(), "malformed payload reads as no cart");

    // the next mutation replaces the garbage with a valid payload
    store
        .dispatch(CartAction::AddItem(catalog_item("p1", 1, 25_000)))
        .await;
    let recovered = storage.load().await.unwrap().unwrap();
    assert_eq!(recovered.len(), 1);
    assert_eq!(recovered[0].id, LineId::new("p1"));
}

#[tokio::test]
async fn boot_state_never_clobbers_the_slot() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path(), "mall-cart");
    storage.save(&[catalog_item("saved", 2, 90_000)]).await.unwrap();

    let store = CartStore::new(storage.clone());

    // a mutation that races ahead of hydration must not reach the slot
    store
        .dispatch(CartAction::AddItem(catalog_item("early", 1, 10_000)))
        .await;
    let slot = storage.load().await.unwrap().unwrap();
    assert_eq!(slot[0].id, LineId::new("saved"), "slot untouched before hydration");

    // hydration then wins over the provisional state
    store.hydrate().await;
    assert_eq!(store.state().items[0].id, LineId::new("saved"));
    assert_eq!(store.state().items.len(), 1);
}

#[tokio::test]
async fn web_client_payload_hydrates() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path(), "mall-cart");

    // payload as the storefront web client writes it
    let payload = serde_json::json!([
        {
            "id": "v-901",
            "productId": "p-17",
            "variantId": "v-901",
            "name": "پیراهن آبی",
            "unitPrice": "250000",
            "quantity": 2,
            "maxQuantity": 5,
            "attributes": { "size": "L" }
        }
    ]);
    tokio::fs::write(storage.path(), serde_json::to_vec(&payload).unwrap())
        .await
        .unwrap();

    let store = CartStore::new(storage);
    store.hydrate().await;

    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, LineId::new("v-901"));
    assert_eq!(state.items[0].effective_max(), 5);
    assert_eq!(state.item_count, 2);
    assert_eq!(state.total_amount, mall_core::Amount::from(500_000));
}

#[tokio::test]
async fn missing_directory_is_created_on_first_write() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("profile/carts"), "mall-cart");

    let store = CartStore::new(storage.clone());
    store.hydrate().await;
    store
        .dispatch(CartAction::AddItem(catalog_item("p1", 1, 5_000)))
        .await;

    assert_eq!(storage.load().await.unwrap().unwrap().len(), 1);
}
