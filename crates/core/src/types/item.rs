//! Cart line items.
//!
//! Serde uses camelCase field names so the durable payload round-trips with
//! carts saved by the web client (`unitPrice`, `maxQuantity`, `imageUrl`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::amount::Amount;
use crate::types::id::{LineId, ProductId, VariantId};

/// Default quantity ceiling when the catalog supplies no stock cap.
pub const DEFAULT_MAX_QUANTITY: u32 = 999;

/// One line in the cart.
///
/// The `id` is the merge key: adding an item whose `id` matches an existing
/// line merges quantities instead of appending a duplicate. Display fields
/// (`name`, `image_url`, `attributes`) are carried verbatim and never affect
/// merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Merge key: variant identifier if present, else product identifier.
    pub id: LineId,
    /// Product this line refers to (not owned by the cart).
    pub product_id: ProductId,
    /// Variant this line refers to, if the product has variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
    /// Display name.
    pub name: String,
    /// Unit price as an opaque non-negative amount.
    pub unit_price: Amount,
    /// Units of this line, kept within `1..=effective_max()` while present.
    pub quantity: u32,
    /// Stock cap supplied by the caller at add time. The cart never
    /// discovers or revises this on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,
    /// Display-only image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Display-only attributes, e.g. size → "L".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl CartItem {
    /// Build a line for a product, deriving the merge key from the variant.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        variant_id: Option<VariantId>,
        name: impl Into<String>,
        unit_price: Amount,
        quantity: u32,
    ) -> Self {
        let id = LineId::for_variant(&product_id, variant_id.as_ref());
        Self {
            id,
            product_id,
            variant_id,
            name: name.into(),
            unit_price: unit_price.clamp_non_negative(),
            quantity,
            max_quantity: None,
            image_url: None,
            attributes: None,
        }
    }

    /// Set the stock cap for this line.
    #[must_use]
    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        self.max_quantity = Some(max_quantity);
        self
    }

    /// Set the display image.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the display attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Quantity ceiling for this line. Never below 1.
    #[must_use]
    pub fn effective_max(&self) -> u32 {
        self.max_quantity.unwrap_or(DEFAULT_MAX_QUANTITY).max(1)
    }

    /// Total price for this line.
    #[must_use]
    pub fn line_total(&self) -> Amount {
        self.unit_price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_max_defaults_to_999() {
        let item = CartItem::new(ProductId::new("p1"), None, "Shirt", Amount::from(100), 1);
        assert_eq!(item.effective_max(), DEFAULT_MAX_QUANTITY);
        assert_eq!(item.with_max_quantity(5).effective_max(), 5);
    }

    #[test]
    fn test_effective_max_floor_is_one() {
        let item = CartItem::new(ProductId::new("p1"), None, "Shirt", Amount::from(100), 1)
            .with_max_quantity(0);
        assert_eq!(item.effective_max(), 1);
    }

    #[test]
    fn test_line_total() {
        let item = CartItem::new(ProductId::new("p1"), None, "Shirt", Amount::from(150_000), 3);
        assert_eq!(item.line_total(), Amount::from(450_000));
    }

    #[test]
    fn test_merge_key_from_variant() {
        let with_variant = CartItem::new(
            ProductId::new("p1"),
            Some(VariantId::new("v9")),
            "Shirt (L)",
            Amount::from(100),
            1,
        );
        assert_eq!(with_variant.id.as_str(), "v9");

        let without_variant =
            CartItem::new(ProductId::new("p1"), None, "Shirt", Amount::from(100), 1);
        assert_eq!(without_variant.id.as_str(), "p1");
    }

    #[test]
    fn test_negative_price_clamped_at_construction() {
        let item = CartItem::new(ProductId::new("p1"), None, "Shirt", Amount::from(-10), 1);
        assert_eq!(item.unit_price, Amount::ZERO);
    }

    #[test]
    fn test_serde_camel_case_round_trip() {
        let item = CartItem::new(
            ProductId::new("p1"),
            Some(VariantId::new("v1")),
            "پیراهن",
            Amount::from(250_000),
            2,
        )
        .with_max_quantity(10)
        .with_attributes(BTreeMap::from([("size".to_owned(), "L".to_owned())]));

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"unitPrice\""));
        assert!(json.contains("\"maxQuantity\""));
        assert!(json.contains("\"productId\""));
        // absent optional fields are omitted entirely
        assert!(!json.contains("imageUrl"));

        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
