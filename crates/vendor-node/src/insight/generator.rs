//! The external text-generation contract and a local fallback
//! implementation.

use crate::model::{Order, OrderStatus, Product, StockStatus};
use async_trait::async_trait;
use thiserror::Error;

/// Shown instead of generated text when the collaborator fails. The trigger
/// does not retry; the next state change or view activation produces a fresh
/// attempt.
pub const INSIGHT_UNAVAILABLE: &str =
    "Insights are temporarily unavailable. They will refresh with the next update.";

/// Failure reported by the text-generation collaborator. Non-fatal by
/// contract: it only ever degrades the insight text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Insight generation failed: {0}")]
pub struct CollaboratorError(pub String);

/// The text-generation collaborator. Receives read-only snapshots of the
/// ledger and catalog; prompt construction and the model call behind it are
/// not this crate's business.
#[async_trait]
pub trait InsightGenerator: Send + Sync + 'static {
    async fn generate_insights(
        &self,
        orders: &[Order],
        inventory: &[Product],
    ) -> Result<String, CollaboratorError>;
}

/// Rule-based generator used by the demo binary and as an offline fallback.
/// Summarizes the snapshot without any external service.
pub struct HeuristicInsights;

#[async_trait]
impl InsightGenerator for HeuristicInsights {
    async fn generate_insights(
        &self,
        orders: &[Order],
        inventory: &[Product],
    ) -> Result<String, CollaboratorError> {
        let active = orders.iter().filter(|o| !o.status.is_terminal()).count();
        let completed = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count();
        let blocked: Vec<&str> = inventory
            .iter()
            .filter(|p| p.status == StockStatus::OutOfStock)
            .map(|p| p.name.as_str())
            .collect();

        let mut lines = vec![format!(
            "{active} active order(s) in the pipeline, {completed} completed this session."
        )];
        if blocked.is_empty() {
            lines.push("All catalog items are accepting orders.".to_string());
        } else {
            lines.push(format!(
                "Blocked for new orders: {}. Restock to resume intake.",
                blocked.join(", ")
            ));
        }
        Ok(lines.join("\n"))
    }
}
