//! [`ActorEntity`] implementation for [`Product`].

use crate::catalog::{CatalogContext, CatalogError};
use crate::model::{Product, ProductCreate, ProductUpdate, StockStatus};
use crate::notifier::NotificationEvent;
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Catalog items have no per-item actions; the stock signal is a plain
/// update.
#[derive(Debug)]
pub enum CatalogAction {}

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = CatalogAction;
    type ActionResult = ();
    type Context = CatalogContext;
    type Error = CatalogError;

    fn from_create_params(params: ProductCreate) -> Result<Self, CatalogError> {
        if params.price < 0.0 {
            return Err(CatalogError::Validation(format!(
                "negative price for product {}",
                params.id
            )));
        }
        Ok(Product {
            id: params.id,
            name: params.name,
            category: params.category,
            price: params.price,
            status: params.status,
        })
    }

    fn id(&self) -> &String {
        &self.id
    }

    /// Stock signal: unconditional, any status from any other. Going out of
    /// stock announces the block to the operator.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        ctx: &CatalogContext,
    ) -> Result<(), CatalogError> {
        self.status = update.status;
        if update.status == StockStatus::OutOfStock {
            ctx.notifier.publish(NotificationEvent::StockBlocked).await;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &CatalogContext,
    ) -> Result<(), CatalogError> {
        match action {}
    }

    async fn on_commit(snapshot: &[Product], ctx: &CatalogContext) {
        ctx.insight.inventory_changed(snapshot.to_vec()).await;
    }
}
