//! # ActorEntity Trait
//!
//! The contract a domain type must satisfy to be managed by a
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the
//! creation payload, update payload, custom actions, runtime context, and
//! error type, so a request for one entity kind can never be sent to an actor
//! managing another.
//!
//! Identifiers are owned by the domain: entities arrive with their id already
//! assigned (an order reference from the intake feed, a catalog SKU), the
//! framework never generates one. [`ActorEntity::id`] exposes it for storage
//! and duplicate detection.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_commit`] have default
//! no-op implementations; override them only when the entity needs side
//! effects at those points.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// [`ResourceActor`](crate::ResourceActor).
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other actors. The
/// `Context` type carries those dependencies and is injected into every hook;
/// it is supplied to [`ResourceActor::run`](crate::ResourceActor::run) rather
/// than at construction, which keeps mutually-referencing actors easy to wire.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Supplied by the caller inside
    /// the `Create` payload and immutable afterwards.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance, id included.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of resource-specific operations beyond plain updates
    /// (e.g. a guarded status transition).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per actor: the union of
    /// everything its operations can report.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct and validate the full entity from the creation payload.
    /// Rejecting here guarantees the store is untouched on failure.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// The entity's identifier, used as the store key.
    fn id(&self) -> &Self::Id;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is inserted.
    /// Use for side effects that need the context.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called after every successful mutation with the whole collection in
    /// insertion order. Entities that feed downstream observers push the
    /// snapshot from here; the default does nothing.
    async fn on_commit(_snapshot: &[Self], _ctx: &Self::Context) {}
}
