//! Product records and stock signaling.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stock availability signal for a catalog item.
///
/// `OutOfStock` is the only status with engine semantics: the gating rule
/// rejects new order lines for such items. `LowStock` is advisory only and
/// admits orders exactly like `InStock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StockStatus::InStock => "in stock",
            StockStatus::LowStock => "low stock",
            StockStatus::OutOfStock => "out of stock",
        };
        write!(f, "{label}")
    }
}

/// A catalog item. Created at catalog load, never deleted in-session;
/// only `status` changes afterwards, and only through the Catalog Store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub status: StockStatus,
}

/// Payload for loading a product into the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub status: StockStatus,
}

/// Stock-signal update. Unconditional: any status is reachable from any
/// other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub status: StockStatus,
}
