//! Order records, line items, and the fulfillment status machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Fulfillment lifecycle status.
///
/// Orders walk `Pending → Preparing → Ready → Completed`; any non-terminal
/// status can jump to `Cancelled`. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Terminal statuses admit no further transition and drop out of the
    /// active listing.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// The legal transition table. Self-transitions are illegal, not a
    /// silent no-op.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Preparing)
                | (Preparing, Ready)
                | (Ready, Completed)
                | (Pending | Preparing | Ready, Cancelled)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

/// A single order line. Immutable once the order exists: `price` is a
/// historical snapshot taken at order time, and `product_id` is a weak
/// reference into the catalog: a product later going missing or out of
/// stock never invalidates the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Delivery rider state, as reported by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiderStatus {
    Assigned,
    Arrived,
    Waiting,
}

/// Rider details attached to an order. Purely descriptive; the engine never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderInfo {
    pub name: String,
    pub phone: String,
    pub arrival_minutes: u32,
    pub status: RiderStatus,
}

/// A customer order held by the ledger.
///
/// Orders are created in `Pending` and are never physically removed;
/// terminal records stay for history and metrics. Only `status` and
/// `rider_message` change after creation, and only through ledger
/// operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub rider: Option<RiderInfo>,
    pub rider_message: Option<String>,
}

impl Order {
    /// Short human-readable reference for operator-facing messages: the
    /// trailing segment of ids like `ORD-1042`, or the whole id when it has
    /// no separator.
    pub fn short_ref(&self) -> &str {
        self.id.rsplit('-').next().unwrap_or(&self.id)
    }
}

/// Payload for recording a new order, as delivered by the intake feed.
/// Validation happens when the ledger constructs the [`Order`].
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub rider: Option<RiderInfo>,
}

/// Free-text note to the rider. An empty string clears the note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub rider_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_accepts_the_forward_path() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Completed));
    }

    #[test]
    fn transition_table_accepts_cancellation_from_non_terminal() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Preparing.can_transition_to(Cancelled));
        assert!(Ready.can_transition_to(Cancelled));
    }

    #[test]
    fn transition_table_rejects_everything_else() {
        use OrderStatus::*;
        let all = [Pending, Preparing, Ready, Completed, Cancelled];
        let legal = [
            (Pending, Preparing),
            (Preparing, Ready),
            (Ready, Completed),
            (Pending, Cancelled),
            (Preparing, Cancelled),
            (Ready, Cancelled),
        ];
        for from in all {
            for to in all {
                let expected = legal.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "{from} -> {to} should be {}",
                    if expected { "legal" } else { "illegal" }
                );
            }
        }
    }

    #[test]
    fn self_transitions_are_illegal() {
        use OrderStatus::*;
        for status in [Pending, Preparing, Ready, Completed, Cancelled] {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn terminal_statuses_admit_no_exit() {
        use OrderStatus::*;
        for from in [Completed, Cancelled] {
            for to in [Pending, Preparing, Ready, Completed, Cancelled] {
                assert!(!from.can_transition_to(to));
            }
        }
    }

    #[test]
    fn short_ref_strips_the_prefix() {
        let order = Order {
            id: "ORD-1042".to_string(),
            customer_name: "Asha".to_string(),
            items: vec![],
            total_amount: 0.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            rider: None,
            rider_message: None,
        };
        assert_eq!(order.short_ref(), "1042");
    }
}
