//! The cart store: state ownership, subscriptions, persistence.
//!
//! The store wraps the pure reducer with the cart's two side effects:
//! publishing state to subscribers and mirroring the item list to durable
//! storage. Persistence is gated on hydration so a fresh session can never
//! clobber the saved cart with its empty boot state - the one ordering
//! constraint this subsystem has.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::action::CartAction;
use crate::reducer;
use crate::state::CartState;
use crate::storage::CartStorage;

/// Owns a [`CartState`] and a durable mirror of its item list.
///
/// The store is designed to be driven from one UI event loop: callers
/// serialize their dispatches, and the reducer itself is synchronous. Only
/// the two storage operations (the one-time hydration read, the
/// post-mutation write) are async.
pub struct CartStore<S> {
    state_tx: watch::Sender<CartState>,
    storage: S,
    hydrated: AtomicBool,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store with an empty cart.
    ///
    /// Call [`hydrate`](Self::hydrate) next; until it resolves, dispatched
    /// actions mutate the in-memory state but nothing is persisted.
    #[must_use]
    pub fn new(storage: S) -> Self {
        let (state_tx, _) = watch::channel(CartState::empty());
        Self {
            state_tx,
            storage,
            hydrated: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> CartState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver observes every published state, starting from the
    /// current one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state_tx.subscribe()
    }

    /// One-time load of the saved cart from durable storage.
    ///
    /// Runs at session start. Whatever the outcome - a saved cart, nothing
    /// saved, an unreadable slot - hydration resolves exactly once and
    /// unlocks persistence. It is never retried; a failed read means the
    /// session starts empty. Mutations dispatched before this resolves
    /// operate on the empty state and are overwritten by the wholesale
    /// replacement (last writer wins).
    pub async fn hydrate(&self) {
        if self.hydrated.load(Ordering::Acquire) {
            tracing::debug!("cart already hydrated, ignoring repeat call");
            return;
        }
        match self.storage.load().await {
            Ok(Some(items)) => {
                tracing::debug!(lines = items.len(), "hydrating cart from storage");
                self.commit(CartAction::LoadItems(items));
            }
            Ok(None) => {
                tracing::debug!("no saved cart, starting empty");
            }
            Err(err) => {
                tracing::warn!("failed to load saved cart, starting empty: {err}");
            }
        }
        self.hydrated.store(true, Ordering::Release);
    }

    /// Apply an action and publish the resulting state.
    ///
    /// If the item list changed and hydration has completed, the new list
    /// is mirrored to durable storage. Write failures are logged and
    /// swallowed: the in-memory state is authoritative for the session, and
    /// the write is not retried.
    pub async fn dispatch(&self, action: CartAction) {
        let items_changed = self.commit(action);
        if items_changed && self.hydrated.load(Ordering::Acquire) {
            let items = self.state_tx.borrow().items.clone();
            if let Err(err) = self.storage.save(&items).await {
                tracing::warn!("failed to persist cart: {err}");
            }
        }
    }

    /// Run the reducer and publish. Returns whether `items` changed.
    fn commit(&self, action: CartAction) -> bool {
        let current = self.state_tx.borrow().clone();
        let previous_items = current.items.clone();
        let next = reducer::apply(current, action);
        let items_changed = next.items != previous_items;
        self.state_tx.send_replace(next);
        items_changed
    }
}
