//! Actions dispatched against the cart store.

use mall_core::{CartItem, LineId};

/// A cart mutation.
///
/// Actions are applied through [`crate::reducer::apply`], which is pure and
/// total: every action yields a valid state, unknown line ids are no-ops,
/// and out-of-range arguments are normalized instead of rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add an item, merging quantities with an existing line of the same id.
    AddItem(CartItem),
    /// Remove the line with this id, if present.
    RemoveItem(LineId),
    /// Set a line's quantity. A requested quantity of zero or less removes
    /// the line; positive values are clamped to the line's ceiling.
    SetQuantity {
        /// Line to update.
        id: LineId,
        /// Requested quantity, as the caller sent it.
        quantity: i64,
    },
    /// Empty the cart.
    ClearCart,
    /// Flip the cart drawer's visibility flag.
    ToggleOpen,
    /// Set the cart drawer's visibility flag.
    SetOpen(bool),
    /// Replace the item list wholesale. Used by hydration.
    LoadItems(Vec<CartItem>),
    /// Set the transient request-status flag. Items are untouched.
    SetLoading(bool),
    /// Set or clear the transient error message. Items are untouched.
    SetError(Option<String>),
}
