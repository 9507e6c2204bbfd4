//! # System Lifecycle & Orchestration
//!
//! Starting, wiring, and shutting down the node's actors. Individual actors
//! are simple; the coordination lives here:
//!
//! 1. Create every actor and its handle (no dependencies yet).
//! 2. Start each actor with its dependencies injected via `run(context)`:
//!    late binding, so mutually-referencing components wire up cleanly.
//! 3. On shutdown, drop all handles; each actor drains its mailbox and
//!    exits when its channel closes, and we await every task.
//!
//! Observability comes from `actor_framework::tracing::setup_tracing()`
//! (re-exported here), driven by `RUST_LOG`.

pub use actor_framework::tracing::setup_tracing;

use crate::catalog::{self, CatalogContext};
use crate::clients::{CatalogClient, LedgerClient};
use crate::config::NodeConfig;
use crate::insight::{InsightGenerator, InsightHandle, InsightTrigger};
use crate::ledger::{self, LedgerContext};
use crate::notifier::{Notifier, NotifierHandle};
use std::sync::Arc;
use tracing::{error, info};

/// The running console: every actor spawned and wired, exposed through its
/// typed handle. The presentation layer talks to these handles and nothing
/// else.
pub struct ConsoleSystem {
    /// Client for the Order Ledger actor.
    pub ledger: LedgerClient,

    /// Client for the Catalog Store actor.
    pub catalog: CatalogClient,

    /// Handle for the Notification Emitter.
    pub notifier: NotifierHandle,

    /// Handle for the Insight Trigger.
    pub insight: InsightHandle,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ConsoleSystem {
    /// Creates and starts the whole system.
    ///
    /// The notifier and insight trigger start first because the ledger and
    /// catalog contexts carry their handles; the ledger and catalog then
    /// publish into them on every committed mutation.
    pub fn start(config: NodeConfig, generator: Arc<dyn InsightGenerator>) -> Self {
        info!(store = %config.store_name, "Starting console");

        let (notifier_actor, notifier) =
            Notifier::new(config.mailbox_capacity, config.notification_ttl);
        let notifier_task = tokio::spawn(notifier_actor.run());

        let (insight_actor, insight) = InsightTrigger::new(generator, config.mailbox_capacity);
        let insight_task = tokio::spawn(insight_actor.run());

        let (catalog_actor, catalog_resource_client) = catalog::new(config.mailbox_capacity);
        let catalog = CatalogClient::new(catalog_resource_client);
        let catalog_task = tokio::spawn(catalog_actor.run(CatalogContext {
            notifier: notifier.clone(),
            insight: insight.clone(),
        }));

        let (ledger_actor, ledger_resource_client) = ledger::new(config.mailbox_capacity);
        let ledger = LedgerClient::new(ledger_resource_client);
        let ledger_task = tokio::spawn(ledger_actor.run(LedgerContext {
            notifier: notifier.clone(),
            insight: insight.clone(),
        }));

        Self {
            ledger,
            catalog,
            notifier,
            insight,
            handles: vec![ledger_task, catalog_task, notifier_task, insight_task],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the handles closes every mailbox. The ledger and catalog
    /// exit first and release the notifier/insight handles held in their
    /// contexts, after which those two drain and exit as well.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down console...");

        drop(self.ledger);
        drop(self.catalog);
        drop(self.notifier);
        drop(self.insight);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Console shutdown complete.");
        Ok(())
    }
}
