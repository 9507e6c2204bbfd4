//! Demo session for the vendor operations console.
//!
//! Boots the full system, loads the seed feed, and walks one realistic
//! operator session: intake with gating, the fulfillment lifecycle, a rider
//! signal, a stock block, and an insight refresh.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Instrument};
use vendor_node::config::NodeConfig;
use vendor_node::feed;
use vendor_node::insight::HeuristicInsights;
use vendor_node::lifecycle::{setup_tracing, ConsoleSystem};
use vendor_node::model::{OrderStatus, StockStatus};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = NodeConfig::from_env();
    info!(store = %config.store_name, "Starting vendor node console");

    let system = ConsoleSystem::start(config, Arc::new(HeuristicInsights));

    // Load the catalog
    for product in feed::seed_catalog() {
        system
            .catalog
            .load_product(product)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Intake: gate each order on stock status before recording it
    let span = tracing::info_span!("order_intake");
    async {
        for order in feed::seed_orders() {
            let mut admissible = true;
            for item in &order.items {
                if !system
                    .catalog
                    .can_order(&item.product_id)
                    .await
                    .map_err(|e| e.to_string())?
                {
                    warn!(order_id = %order.id, product_id = %item.product_id, "Order refused: item blocked");
                    admissible = false;
                    break;
                }
            }
            if !admissible {
                continue;
            }
            let id = system
                .ledger
                .create_order(order)
                .await
                .map_err(|e| e.to_string())?;
            info!(order_id = %id, "Order recorded");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Walk the first order through the fulfillment lifecycle
    let span = tracing::info_span!("fulfillment");
    async {
        for status in [
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
        ] {
            system
                .ledger
                .set_status("ORD-1042".to_string(), status)
                .await
                .map_err(|e| e.to_string())?;
        }
        if let Some(message) = system.notifier.active().await {
            info!(%message, "Operator notification");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Rider signal on an in-flight order
    system
        .ledger
        .set_rider_message("ORD-1043".to_string(), "5 min delay")
        .await
        .map_err(|e| e.to_string())?;

    // Operator blocks an item; new intake for it would now be refused
    system
        .catalog
        .set_stock_status("prod-002".to_string(), StockStatus::OutOfStock)
        .await
        .map_err(|e| e.to_string())?;
    let admissible = system
        .catalog
        .can_order("prod-002")
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = "prod-002", admissible, "Gating after stock block");

    // Operator opens the insights surface
    system.insight.set_view_active(true).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    let view = system.insight.snapshot().await;
    info!(refreshing = view.is_refreshing, "Insight:\n{}", view.text);

    // Session stats as the presentation layer would show them
    let active = system.ledger.list_active().await.map_err(|e| e.to_string())?;
    let completed =
        system.ledger.count_completed().await.map_err(|e| e.to_string())?
            + feed::COMPLETED_BEFORE_SESSION;
    info!(
        active = active.len(),
        completed_total = completed,
        "Session stats"
    );

    system.shutdown().await?;

    info!("Session complete");
    Ok(())
}
