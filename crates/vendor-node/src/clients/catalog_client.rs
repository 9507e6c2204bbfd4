//! # Catalog Client
//!
//! High-level API for the Catalog Store actor: loading products, stock
//! signaling, and the admissibility convenience built on the pure gating
//! rule.

use crate::catalog::CatalogError;
use crate::gating;
use crate::model::{Product, ProductCreate, ProductUpdate, StockStatus};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog Store actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Loads a product into the catalog.
    #[instrument(skip(self, params), fields(product_id = %params.id))]
    pub async fn load_product(&self, params: ProductCreate) -> Result<String, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Signals a stock status. Unconditional: any status is reachable from
    /// any other. Returns the updated product.
    #[instrument(skip(self))]
    pub async fn set_stock_status(
        &self,
        product_id: String,
        status: StockStatus,
    ) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(product_id, ProductUpdate { status })
            .await
            .map_err(Self::map_error)
    }

    /// Whether intake may accept a new order line for `product_id` right
    /// now. Snapshots the catalog and applies [`gating::can_order`].
    #[instrument(skip(self))]
    pub async fn can_order(&self, product_id: &str) -> Result<bool, CatalogError> {
        let catalog = self.list().await?;
        Ok(gating::can_order(product_id, &catalog))
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CatalogError {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::AlreadyExists(id) => CatalogError::AlreadyExists(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::ActorCommunication(other.to_string()),
            },
            other => CatalogError::ActorCommunication(other.to_string()),
        }
    }
}
