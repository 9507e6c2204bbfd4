//! # Ledger Client
//!
//! High-level API for the Order Ledger actor. Wraps a
//! `ResourceClient<Order>` and maps framework errors back into
//! [`LedgerError`], so callers see the ledger's own taxonomy rather than
//! transport details.

use crate::ledger::{LedgerError, OrderAction};
use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order Ledger actor.
#[derive(Clone)]
pub struct LedgerClient {
    inner: ResourceClient<Order>,
}

impl LedgerClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Records a new order from the intake feed. Shape validation happens
    /// in the ledger; a rejected order leaves the ledger untouched.
    #[instrument(skip(self, params), fields(order_id = %params.id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<String, LedgerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Moves an order along the fulfillment lifecycle. Returns the
    /// committed status.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        order_id: String,
        new_status: OrderStatus,
    ) -> Result<OrderStatus, LedgerError> {
        debug!("Sending request");
        self.inner
            .perform_action(order_id, OrderAction::SetStatus(new_status))
            .await
            .map_err(Self::map_error)
    }

    /// Sets the free-text note to the rider; an empty string clears it.
    /// Returns the updated order.
    #[instrument(skip(self, message))]
    pub async fn set_rider_message(
        &self,
        order_id: String,
        message: impl Into<String>,
    ) -> Result<Order, LedgerError> {
        debug!("Sending request");
        self.inner
            .update(
                order_id,
                OrderUpdate {
                    rider_message: message.into(),
                },
            )
            .await
            .map_err(Self::map_error)
    }

    /// Orders still in flight, in ledger insertion order.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Order>, LedgerError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|o| !o.status.is_terminal())
            .collect())
    }

    /// Orders completed this session. Callers tracking history from before
    /// the session add their own offset.
    #[instrument(skip(self))]
    pub async fn count_completed(&self) -> Result<usize, LedgerError> {
        Ok(self
            .list()
            .await?
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count())
    }
}

#[async_trait]
impl ActorClient<Order> for LedgerClient {
    type Error = LedgerError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> LedgerError {
        match e {
            FrameworkError::NotFound(id) => LedgerError::NotFound(id),
            FrameworkError::AlreadyExists(id) => LedgerError::AlreadyExists(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<LedgerError>() {
                Ok(err) => *err,
                Err(other) => LedgerError::ActorCommunication(other.to_string()),
            },
            other => LedgerError::ActorCommunication(other.to_string()),
        }
    }
}
