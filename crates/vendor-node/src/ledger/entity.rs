//! [`ActorEntity`] implementation for [`Order`]: creation validation, the
//! guarded status transition, and the rider-message update.

use crate::ledger::{LedgerContext, LedgerError, OrderAction};
use crate::model::{Order, OrderCreate, OrderItem, OrderStatus, OrderUpdate};
use crate::notifier::NotificationEvent;
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Tolerance when checking a submitted total against the sum of item
/// subtotals: half of the smallest currency unit.
pub const TOTAL_TOLERANCE: f64 = 0.005;

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = LedgerContext;
    type Error = LedgerError;

    /// Validates order shape and inserts in `Pending`. Gating against stock
    /// status is deliberately *not* checked here; admissibility is the
    /// intake path's job, via [`crate::gating::can_order`].
    fn from_create_params(params: OrderCreate) -> Result<Self, LedgerError> {
        if params.items.is_empty() {
            return Err(LedgerError::Validation("order has no items".to_string()));
        }
        if let Some(item) = params.items.iter().find(|i| i.quantity == 0) {
            return Err(LedgerError::Validation(format!(
                "zero quantity for item {}",
                item.product_id
            )));
        }
        if let Some(item) = params.items.iter().find(|i| i.price < 0.0) {
            return Err(LedgerError::Validation(format!(
                "negative price for item {}",
                item.product_id
            )));
        }
        let item_sum: f64 = params.items.iter().map(OrderItem::subtotal).sum();
        if (item_sum - params.total_amount).abs() > TOTAL_TOLERANCE {
            return Err(LedgerError::Validation(format!(
                "total {:.2} does not match item sum {:.2}",
                params.total_amount, item_sum
            )));
        }

        Ok(Order {
            id: params.id,
            customer_name: params.customer_name,
            items: params.items,
            total_amount: params.total_amount,
            status: OrderStatus::Pending,
            created_at: params.created_at,
            rider: params.rider,
            rider_message: None,
        })
    }

    fn id(&self) -> &String {
        &self.id
    }

    /// Sets or clears the rider message and announces the signal.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        ctx: &LedgerContext,
    ) -> Result<(), LedgerError> {
        let message = update.rider_message;
        self.rider_message = if message.is_empty() {
            None
        } else {
            Some(message.clone())
        };
        ctx.notifier
            .publish(NotificationEvent::SignalSent { message })
            .await;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &LedgerContext,
    ) -> Result<OrderStatus, LedgerError> {
        match action {
            OrderAction::SetStatus(next) => {
                if !self.status.can_transition_to(next) {
                    return Err(LedgerError::IllegalTransition {
                        from: self.status,
                        to: next,
                    });
                }
                self.status = next;
                if next == OrderStatus::Completed {
                    ctx.notifier
                        .publish(NotificationEvent::Completion {
                            order_ref: self.short_ref().to_string(),
                        })
                        .await;
                }
                Ok(next)
            }
        }
    }

    async fn on_commit(snapshot: &[Order], ctx: &LedgerContext) {
        ctx.insight.orders_changed(snapshot.to_vec()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(product_id: &str, quantity: u32, price: f64) -> OrderItem {
        OrderItem {
            product_id: product_id.to_string(),
            name: product_id.to_string(),
            quantity,
            price,
        }
    }

    fn params(items: Vec<OrderItem>, total_amount: f64) -> OrderCreate {
        OrderCreate {
            id: "ORD-1".to_string(),
            customer_name: "Asha".to_string(),
            items,
            total_amount,
            created_at: Utc::now(),
            rider: None,
        }
    }

    #[test]
    fn valid_order_is_inserted_pending() {
        let order = Order::from_create_params(params(
            vec![item("prod-001", 2, 40.0), item("prod-002", 1, 35.0)],
            115.0,
        ))
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.rider_message, None);
    }

    #[test]
    fn empty_items_are_rejected() {
        let err = Order::from_create_params(params(vec![], 0.0)).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err =
            Order::from_create_params(params(vec![item("prod-001", 0, 40.0)], 0.0)).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err =
            Order::from_create_params(params(vec![item("prod-001", 1, -5.0)], -5.0)).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn mismatched_total_is_rejected() {
        let err =
            Order::from_create_params(params(vec![item("prod-001", 2, 40.0)], 90.0)).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn total_within_tolerance_is_accepted() {
        // 3 × 33.33 = 99.99; a submitted 99.99 must not be rejected for
        // float noise.
        let order =
            Order::from_create_params(params(vec![item("prod-001", 3, 33.33)], 99.99)).unwrap();
        assert_eq!(order.total_amount, 99.99);
    }
}
