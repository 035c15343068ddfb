//! Stock-level classification for product display.

use serde::{Deserialize, Serialize};

/// Display-level stock classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

/// Policy for flagging low stock on product and cart pages.
///
/// Classification is display-only: the cart clamps quantities against each
/// line's own ceiling, never against this policy. The boundary is inclusive,
/// so `threshold` units on hand still count as low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockPolicy {
    /// Inclusive upper bound of the "low" band.
    pub threshold: u32,
}

impl Default for LowStockPolicy {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl LowStockPolicy {
    /// Default inclusive low-stock boundary.
    pub const DEFAULT_THRESHOLD: u32 = 3;

    /// Create a policy with a custom threshold.
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Classify an available quantity.
    #[must_use]
    pub const fn classify(&self, available: u32) -> StockLevel {
        if available == 0 {
            StockLevel::OutOfStock
        } else if available <= self.threshold {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    /// True when the quantity falls in the low band (but is not zero).
    #[must_use]
    pub const fn is_low(&self, available: u32) -> bool {
        matches!(self.classify(available), StockLevel::Low)
    }
}
