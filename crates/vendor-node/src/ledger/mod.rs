//! # Order Ledger
//!
//! Sole owner of the order collection. Orders arrive from the intake feed
//! already in `Pending`, are validated on insertion, and afterwards change
//! only through the guarded status transition and the rider-message update.
//! Terminal orders stay in the ledger for history and metrics.
//!
//! Side effects ride on the entity hooks: a completion publishes a
//! notification, and every committed mutation pushes a fresh snapshot to
//! the insight trigger.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::OrderAction;
pub use error::LedgerError;

use crate::insight::InsightHandle;
use crate::model::Order;
use crate::notifier::NotifierHandle;
use actor_framework::{ResourceActor, ResourceClient};

/// Dependencies injected into the ledger actor at startup.
pub struct LedgerContext {
    pub notifier: NotifierHandle,
    pub insight: InsightHandle,
}

/// Creates a new ledger actor and its generic client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
