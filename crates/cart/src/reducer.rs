//! Pure cart transition function.
//!
//! [`apply`] is total: it never fails, never panics, and normalizes hostile
//! input instead of rejecting it. All merge and clamping policy lives here;
//! the store in [`crate::store`] only publishes and persists what `apply`
//! returns.

use mall_core::{CartItem, LineId};

use crate::action::CartAction;
use crate::state::CartState;

/// Apply one action to the cart, producing the next state.
///
/// Derived totals are recomputed after every action that touches `items`.
#[must_use]
pub fn apply(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem(item) => {
            add_item(&mut state.items, item);
            state.recompute_totals();
        }
        CartAction::RemoveItem(id) => {
            state.items.retain(|line| line.id != id);
            state.recompute_totals();
        }
        CartAction::SetQuantity { id, quantity } => {
            set_quantity(&mut state.items, &id, quantity);
            state.recompute_totals();
        }
        CartAction::ClearCart => {
            state.items.clear();
            state.recompute_totals();
        }
        CartAction::ToggleOpen => state.is_open = !state.is_open,
        CartAction::SetOpen(open) => state.is_open = open,
        CartAction::LoadItems(items) => {
            state.items = normalize_items(items);
            state.recompute_totals();
        }
        CartAction::SetLoading(loading) => state.is_loading = loading,
        CartAction::SetError(error) => state.error = error,
    }
    state
}

/// Merge an incoming item into the line list.
///
/// An existing line with the same id is replaced in place: the incoming
/// item's display fields and stock cap are authoritative (the caller fetched
/// them from the catalog at add time), and the quantities combine under the
/// ceiling. A new line lands at the end with its quantity capped; an item
/// whose capped quantity resolves to zero is never stored.
fn add_item(items: &mut Vec<CartItem>, incoming: CartItem) {
    let mut line = incoming;
    line.unit_price = line.unit_price.clamp_non_negative();
    let ceiling = line.effective_max();

    if let Some(existing) = items.iter_mut().find(|l| l.id == line.id) {
        line.quantity = existing.quantity.saturating_add(line.quantity).min(ceiling);
        *existing = line;
    } else {
        line.quantity = line.quantity.min(ceiling);
        if line.quantity > 0 {
            items.push(line);
        }
    }
}

/// Set a line's quantity, removing the line on a non-positive request.
fn set_quantity(items: &mut Vec<CartItem>, id: &LineId, requested: i64) {
    if requested <= 0 {
        items.retain(|line| &line.id != id);
        return;
    }
    if let Some(line) = items.iter_mut().find(|l| &l.id == id) {
        let requested = u32::try_from(requested).unwrap_or(u32::MAX);
        line.quantity = requested.min(line.effective_max());
    }
}

/// Normalize a wholesale replacement list so every reachable state upholds
/// the cart invariants: duplicate ids merge under the add rule, quantities
/// stay within `1..=effective_max`, zero-quantity lines drop, and negative
/// prices clamp. A well-formed list passes through untouched, order
/// preserved.
fn normalize_items(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut normalized: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items {
        add_item(&mut normalized, item);
    }
    normalized
}
