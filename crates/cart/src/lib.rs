//! Mall Cart - client-side cart state machine with durable mirroring.
//!
//! The cart is the one place in Mall's web surface with real invariants:
//! quantity bounds, idempotent merges, derived totals, and storage
//! round-tripping. Everything else (pages, charts, checkout) lives behind
//! the remote API and is out of scope here.
//!
//! # Architecture
//!
//! - [`reducer::apply`] - pure, total transition function over
//!   [`CartState`]; all clamping and merge policy lives there
//! - [`CartStore`] - owns the state, publishes changes to subscribers over
//!   a watch channel, and mirrors the item list to durable storage after
//!   every items-changing action
//! - [`CartStorage`] - the injected persistence adapter;
//!   [`JsonFileStorage`] is the durable slot, [`MemoryStorage`] the
//!   in-memory stand-in for tests and ephemeral sessions
//!
//! # Concurrency
//!
//! The store is designed to be driven from one UI event loop: dispatches
//! are serialized by the caller and the reducer is synchronous. Only the
//! two storage operations (the one-time hydration read and the
//! post-mutation write) are async I/O. Persistence is best-effort - the
//! in-memory state is authoritative for the session.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod config;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod store;

pub use action::CartAction;
pub use config::{CartConfig, ConfigError};
pub use state::CartState;
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
