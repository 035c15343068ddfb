//! Integration tests for the Mall cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mall-integration-tests
//! ```
//!
//! Unlike unit tests, these drive a real [`mall_cart::CartStore`] over
//! file-backed storage in a scratch directory, simulating the cart's life
//! across browser sessions: each "session" is a fresh store hydrated from
//! the same slot.
//!
//! # Test Categories
//!
//! - `cart_sessions` - cross-session persistence and hydration
//! - `slot_recovery` - corrupt or unavailable slots, write gating

use mall_core::{Amount, CartItem, ProductId};

/// Build a plain catalog item for tests.
#[must_use]
pub fn catalog_item(id: &str, quantity: u32, unit_price: i64) -> CartItem {
    CartItem::new(
        ProductId::new(id),
        None,
        format!("کالا {id}"),
        Amount::from(unit_price),
        quantity,
    )
}

/// Install a compact tracing subscriber for a test, if none is set.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mall_cart=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
