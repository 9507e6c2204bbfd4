//! # Generic Actor Server
//!
//! The `ResourceActor` owns a collection of entities and processes requests
//! for it sequentially. It is the "server" half of the actor pair: it holds
//! the receiver end of the channel and the store, so no other task can touch
//! the state. One actor per collection gives mutual exclusion without locks.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The store is keyed by [`ActorEntity::Id`] and remembers insertion order:
/// `List` always returns entities in the order they were created, and no
/// mutation reorders them. Entities are never evicted by the framework;
/// whether removal exists at all is a property of the domain, and the
/// collections managed here keep their history.
///
/// # Commit notifications
/// After a successful `Create`, `Update`, or `Action` the actor invokes
/// [`ActorEntity::on_commit`] with a snapshot of the whole collection, which
/// is how downstream observers learn about committed state without sharing
/// the store. Failed operations leave the store untouched and emit nothing.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the mpsc channel. If the channel is
    ///   full, calls on the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// The collection in insertion order.
    fn snapshot(&self) -> Vec<T> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (all clients dropped).
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook, so
    /// dependencies created after the actor was instantiated can still be
    /// wired in before the loop starts.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g. "Order" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match T::from_create_params(params) {
                        Ok(mut item) => {
                            let id = item.id().clone();
                            if self.store.contains_key(&id) {
                                warn!(entity_type, %id, "Duplicate id");
                                let _ = respond_to
                                    .send(Err(FrameworkError::AlreadyExists(id.to_string())));
                                continue;
                            }
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            self.insertion_order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                            T::on_commit(&self.snapshot(), &context).await;
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                        T::on_commit(&self.snapshot(), &context).await;
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        match item.handle_action(action, &context).await {
                            Ok(result) => {
                                info!(entity_type, %id, "Action ok");
                                let _ = respond_to.send(Ok(result));
                                T::on_commit(&self.snapshot(), &context).await;
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "Action failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            }
                        }
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
