//! # Catalog Store
//!
//! Sole owner of the product collection and the only writer of stock
//! statuses. Products enter at catalog load and are never deleted
//! in-session; the one mutation is the unconditional stock-status update,
//! which announces a block when an item goes out of stock.
//!
//! The admissibility rule that *reads* these statuses lives in
//! [`crate::gating`].

pub mod entity;
pub mod error;

pub use error::CatalogError;

use crate::insight::InsightHandle;
use crate::model::Product;
use crate::notifier::NotifierHandle;
use actor_framework::{ResourceActor, ResourceClient};

/// Dependencies injected into the catalog actor at startup.
pub struct CatalogContext {
    pub notifier: NotifierHandle,
    pub insight: InsightHandle,
}

/// Creates a new catalog actor and its generic client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
