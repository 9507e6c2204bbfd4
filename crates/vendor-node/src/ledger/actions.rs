//! Ledger-specific actions beyond the uniform operations.

use crate::model::OrderStatus;

/// Domain operations on a single order that can be refused by the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Move the order to `new_status`, subject to the legal transition
    /// table. Returns the committed status.
    SetStatus(OrderStatus),
}
