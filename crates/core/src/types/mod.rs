//! Core types for Mall.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amount;
pub mod id;
pub mod item;
pub mod stock;

pub use amount::Amount;
pub use id::*;
pub use item::{CartItem, DEFAULT_MAX_QUANTITY};
pub use stock::{LowStockPolicy, StockLevel};
