//! # Gating Rule
//!
//! The pure admissibility check consulted by order intake *before* an order
//! is handed to the ledger. Creation and gating are deliberately separate
//! concerns: the ledger validates order shape, this rule validates business
//! admissibility, and the two are tested independently.

use crate::model::{Product, StockStatus};

/// Whether a new order line for `product_id` is admissible given the
/// catalog snapshot: `false` iff the product is unknown or out of stock.
/// `LowStock` admits orders; it is an advisory signal only.
pub fn can_order(product_id: &str, catalog: &[Product]) -> bool {
    catalog
        .iter()
        .find(|p| p.id == product_id)
        .map(|p| p.status != StockStatus::OutOfStock)
        .unwrap_or(false)
}
