//! The cart state aggregate.

use mall_core::{Amount, CartItem, LineId};
use serde::{Deserialize, Serialize};

/// The cart aggregate.
///
/// `item_count` and `total_amount` are derived: they are recomputed by full
/// summation whenever `items` changes and are never settable on their own.
/// `is_open` and the transient request-status fields are orthogonal to item
/// mutations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Cart lines in insertion order, unique by id.
    pub items: Vec<CartItem>,
    /// Sum of quantities over `items`.
    pub item_count: u32,
    /// Sum of line totals over `items`.
    pub total_amount: Amount,
    /// Cart drawer visibility.
    pub is_open: bool,
    /// Transient flag set by callers around unrelated async work.
    pub is_loading: bool,
    /// Transient error message from unrelated async operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CartState {
    /// The session-start state: an empty, closed cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a line by id.
    #[must_use]
    pub fn line(&self, id: &LineId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recompute the derived totals from `items`.
    ///
    /// Full summation on every mutation; carts hold tens of lines, and the
    /// O(n) pass cannot drift the way incremental accounting can.
    pub(crate) fn recompute_totals(&mut self) {
        self.item_count = self.items.iter().map(|item| item.quantity).sum();
        self.total_amount = self.items.iter().map(CartItem::line_total).sum();
    }
}
