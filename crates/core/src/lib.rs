//! Mall Core - Shared types library.
//!
//! This crate provides the domain types shared across Mall components:
//! - `cart` - Cart state machine and durable mirroring
//! - storefront and admin surfaces (out of tree) consume the same types
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! network clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and amounts, the cart
//!   line item, and stock-level classification

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
