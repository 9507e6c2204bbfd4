//! Error types for the Order Ledger.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during ledger operations. Every failure is local
/// to the call that produced it; the ledger itself stays usable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order payload is malformed; nothing was inserted.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// An order with this id is already recorded.
    #[error("Order already recorded: {0}")]
    AlreadyExists(String),

    /// The requested status edge is not in the legal transition table;
    /// the order is unchanged.
    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for LedgerError {
    fn from(msg: String) -> Self {
        LedgerError::ActorCommunication(msg)
    }
}
