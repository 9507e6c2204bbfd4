//! # Insight Trigger
//!
//! Observes committed ledger/catalog snapshots and keeps a derived,
//! operator-facing text summary fresh, but only while the insights surface
//! is active. The actual text comes from an external
//! [`InsightGenerator`]; this module owns *when* it runs and *which* result
//! is allowed to land.
//!
//! Refreshes race: a newer refresh can start before an older one resolves,
//! and results may arrive out of order. Every in-flight request is tagged
//! with a generation counter; a completion whose tag no longer matches the
//! current counter is discarded. Last *request* wins, not last resolution.
//!
//! Collaborator failure is non-fatal: the trigger surfaces
//! [`INSIGHT_UNAVAILABLE`], clears the loading flag, and does not retry on
//! its own.

pub mod generator;

pub use generator::{CollaboratorError, HeuristicInsights, InsightGenerator, INSIGHT_UNAVAILABLE};

use crate::model::{Order, Product};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// What the presentation layer reads from the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightView {
    pub text: String,
    pub is_refreshing: bool,
}

#[derive(Debug)]
enum InsightMessage {
    SetViewActive {
        active: bool,
    },
    OrdersChanged {
        orders: Vec<Order>,
    },
    InventoryChanged {
        inventory: Vec<Product>,
    },
    Resolved {
        generation: u64,
        outcome: Result<String, CollaboratorError>,
    },
    Snapshot {
        respond_to: oneshot::Sender<InsightView>,
    },
}

/// Cloneable handle to the trigger.
#[derive(Clone)]
pub struct InsightHandle {
    sender: mpsc::Sender<InsightMessage>,
}

impl InsightHandle {
    /// The insights surface became active (`true`) or was left (`false`).
    /// Activation starts a refresh.
    pub async fn set_view_active(&self, active: bool) {
        let _ = self
            .sender
            .send(InsightMessage::SetViewActive { active })
            .await;
    }

    /// A committed ledger snapshot, pushed by the ledger's commit hook.
    pub async fn orders_changed(&self, orders: Vec<Order>) {
        let _ = self
            .sender
            .send(InsightMessage::OrdersChanged { orders })
            .await;
    }

    /// A committed catalog snapshot, pushed by the catalog's commit hook.
    pub async fn inventory_changed(&self, inventory: Vec<Product>) {
        let _ = self
            .sender
            .send(InsightMessage::InventoryChanged { inventory })
            .await;
    }

    /// Current text and loading flag.
    pub async fn snapshot(&self) -> InsightView {
        let (respond_to, response) = oneshot::channel();
        if self
            .sender
            .send(InsightMessage::Snapshot { respond_to })
            .await
            .is_err()
        {
            return InsightView {
                text: String::new(),
                is_refreshing: false,
            };
        }
        response.await.unwrap_or(InsightView {
            text: String::new(),
            is_refreshing: false,
        })
    }
}

/// The trigger actor. Owns the latest observed snapshots, the cached text,
/// and the generation counter that arbitrates racing completions.
pub struct InsightTrigger {
    receiver: mpsc::Receiver<InsightMessage>,
    // Weak: in-flight generator tasks hold strong senders; the trigger
    // itself must not keep its own mailbox open past the last handle.
    self_sender: mpsc::WeakSender<InsightMessage>,
    generator: Arc<dyn InsightGenerator>,
    view_active: bool,
    orders: Vec<Order>,
    inventory: Vec<Product>,
    revision: u64,
    last_snapshot_key: Option<u64>,
    generation: u64,
    cached_text: String,
    is_refreshing: bool,
}

impl InsightTrigger {
    /// Creates the trigger and its handle.
    pub fn new(generator: Arc<dyn InsightGenerator>, buffer_size: usize) -> (Self, InsightHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let trigger = Self {
            receiver,
            self_sender: sender.downgrade(),
            generator,
            view_active: false,
            orders: Vec::new(),
            inventory: Vec::new(),
            revision: 0,
            last_snapshot_key: None,
            generation: 0,
            cached_text: String::new(),
            is_refreshing: false,
        };
        (trigger, InsightHandle { sender })
    }

    /// Runs the trigger loop until all handles are dropped.
    pub async fn run(mut self) {
        info!("Insight trigger started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InsightMessage::SetViewActive { active } => {
                    let was_active = self.view_active;
                    self.view_active = active;
                    debug!(active, "View state");
                    if active && !was_active {
                        self.start_refresh();
                    }
                }
                InsightMessage::OrdersChanged { orders } => {
                    self.orders = orders;
                    self.data_changed();
                }
                InsightMessage::InventoryChanged { inventory } => {
                    self.inventory = inventory;
                    self.data_changed();
                }
                InsightMessage::Resolved {
                    generation,
                    outcome,
                } => {
                    if generation != self.generation {
                        debug!(generation, current = self.generation, "Stale result discarded");
                        continue;
                    }
                    self.is_refreshing = false;
                    self.cached_text = match outcome {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(error = %e, "Collaborator failed");
                            INSIGHT_UNAVAILABLE.to_string()
                        }
                    };
                }
                InsightMessage::Snapshot { respond_to } => {
                    let _ = respond_to.send(InsightView {
                        text: self.cached_text.clone(),
                        is_refreshing: self.is_refreshing,
                    });
                }
            }
        }

        info!("Insight trigger shutdown");
    }

    fn data_changed(&mut self) {
        self.revision += 1;
        if self.view_active && self.last_snapshot_key != Some(self.revision) {
            self.start_refresh();
        }
    }

    fn start_refresh(&mut self) {
        let Some(sender) = self.self_sender.upgrade() else {
            return;
        };
        self.generation += 1;
        self.is_refreshing = true;
        self.last_snapshot_key = Some(self.revision);

        let generation = self.generation;
        let generator = self.generator.clone();
        let orders = self.orders.clone();
        let inventory = self.inventory.clone();
        debug!(generation, "Refreshing insights");

        tokio::spawn(async move {
            let outcome = generator.generate_insights(&orders, &inventory).await;
            let _ = sender
                .send(InsightMessage::Resolved {
                    generation,
                    outcome,
                })
                .await;
        });
    }
}
