//! # Actor Framework
//!
//! Building blocks for type-safe, single-owner state management on top of the
//! Actor Model. Each stateful collection (a catalog of products, a ledger of
//! orders, ...) is owned by exactly one [`ResourceActor`] running in its own
//! Tokio task; all reads and writes travel through a cloneable
//! [`ResourceClient`] over an mpsc channel. Because every message for a
//! collection is processed sequentially by one task, no locks are needed and
//! mutations are atomic with respect to each other.
//!
//! ## Layers
//!
//! 1. **Entity layer** ([`ActorEntity`]): your domain type, its creation
//!    validation, update/action handlers, and error type.
//! 2. **Runtime layer** ([`ResourceActor`]): the event loop, with its ordered store,
//!    request dispatch, commit notifications.
//! 3. **Interface layer** ([`ResourceClient`], [`ActorClient`]): typed async
//!    access from anywhere in the program.
//!
//! ## A minimal entity
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     id: String,
//!     value: u32,
//! }
//!
//! #[derive(Debug)]
//! struct CounterCreate {
//!     id: String,
//! }
//! #[derive(Debug)]
//! struct CounterUpdate {
//!     value: u32,
//! }
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = String;
//!     type Create = CounterCreate;
//!     type Update = CounterUpdate;
//!     type Action = CounterAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(params: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id: params.id, value: 0 })
//!     }
//!
//!     fn id(&self) -> &String {
//!         &self.id
//!     }
//!
//!     async fn on_update(&mut self, update: CounterUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.value = update.value;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(
//!         &mut self,
//!         action: CounterAction,
//!         _ctx: &(),
//!     ) -> Result<u32, Self::Error> {
//!         match action {
//!             CounterAction::Increment => {
//!                 self.value += 1;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate { id: "c1".into() }).await.unwrap();
//!     let value = client.perform_action(id, CounterAction::Increment).await.unwrap();
//!     assert_eq!(value, 1);
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies are injected at runtime via [`ResourceActor::run`], not at
//! construction time. Actors that react to each other's state (for example a
//! ledger that publishes notifications after a mutation) receive the handles
//! they need as their `Context`, wired together by the orchestrator after all
//! actors exist:
//!
//! ```rust,ignore
//! let (ledger_actor, ledger_client) = ResourceActor::<Order>::new(32);
//! tokio::spawn(ledger_actor.run(LedgerContext { notifier, insight }));
//! ```
//!
//! ## Commit notifications
//!
//! After every successful mutation (create, update, action) the actor calls
//! [`ActorEntity::on_commit`] with a snapshot of the whole collection in
//! insertion order. Entities that feed downstream observers push the snapshot
//! from there; entities without observers inherit the no-op default.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) that speaks
//! the same channel protocol as a real actor, letting client-level logic be
//! unit tested without spawning anything. See the module docs for patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
