//! Error types for the Catalog Store.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product payload is malformed; nothing was loaded.
    #[error("Product validation error: {0}")]
    Validation(String),

    /// A product with this id is already in the catalog.
    #[error("Product already in catalog: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunication(msg)
    }
}
