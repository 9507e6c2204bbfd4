//! # Framework Errors
//!
//! Common error types used throughout the actor framework. Entity-specific
//! failures cross the channel boundary boxed inside
//! [`FrameworkError::EntityError`] and are mapped back into the component's
//! own error enum at the client.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
