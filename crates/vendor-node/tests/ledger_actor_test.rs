//! Ledger actor behavior in isolation: notification side effects and
//! listing stability, with the real notifier and insight actors wired in.

use std::sync::Arc;

use chrono::Utc;
use vendor_node::clients::LedgerClient;
use vendor_node::insight::{HeuristicInsights, InsightHandle, InsightTrigger};
use vendor_node::ledger::{self, LedgerContext, LedgerError};
use vendor_node::model::{OrderCreate, OrderItem, OrderStatus};
use vendor_node::notifier::{Notifier, NotifierHandle, NOTIFICATION_TTL};

fn spawn_dependencies() -> (NotifierHandle, InsightHandle) {
    let (notifier_actor, notifier) = Notifier::new(8, NOTIFICATION_TTL);
    tokio::spawn(notifier_actor.run());
    let (insight_actor, insight) = InsightTrigger::new(Arc::new(HeuristicInsights), 8);
    tokio::spawn(insight_actor.run());
    (notifier, insight)
}

fn spawn_ledger() -> (LedgerClient, NotifierHandle, InsightHandle) {
    let (notifier, insight) = spawn_dependencies();
    let (actor, resource_client) = ledger::new(8);
    tokio::spawn(actor.run(LedgerContext {
        notifier: notifier.clone(),
        insight: insight.clone(),
    }));
    (LedgerClient::new(resource_client), notifier, insight)
}

fn order(id: &str) -> OrderCreate {
    OrderCreate {
        id: id.to_string(),
        customer_name: "Test Customer".to_string(),
        items: vec![OrderItem {
            product_id: "prod-001".to_string(),
            name: "Organic Bananas".to_string(),
            quantity: 2,
            price: 40.0,
        }],
        total_amount: 80.0,
        created_at: Utc::now(),
        rider: None,
    }
}

#[tokio::test]
async fn completion_is_the_only_transition_that_notifies() {
    let (ledger, notifier, _insight) = spawn_ledger();
    ledger.create_order(order("ORD-50")).await.unwrap();

    ledger
        .set_status("ORD-50".to_string(), OrderStatus::Preparing)
        .await
        .unwrap();
    ledger
        .set_status("ORD-50".to_string(), OrderStatus::Ready)
        .await
        .unwrap();
    assert_eq!(notifier.active().await, None);

    ledger
        .set_status("ORD-50".to_string(), OrderStatus::Completed)
        .await
        .unwrap();
    assert_eq!(
        notifier.active().await.as_deref(),
        Some("Order #50 Completed!")
    );
}

#[tokio::test]
async fn refused_transition_emits_nothing() {
    let (ledger, notifier, _insight) = spawn_ledger();
    ledger.create_order(order("ORD-51")).await.unwrap();

    let err = ledger
        .set_status("ORD-51".to_string(), OrderStatus::Completed)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::IllegalTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Completed,
        }
    );
    assert_eq!(notifier.active().await, None);
}

#[tokio::test]
async fn cancellation_reaches_every_non_terminal_stage() {
    let (ledger, _notifier, _insight) = spawn_ledger();

    for (id, path) in [
        ("ORD-60", vec![]),
        ("ORD-61", vec![OrderStatus::Preparing]),
        ("ORD-62", vec![OrderStatus::Preparing, OrderStatus::Ready]),
    ] {
        ledger.create_order(order(id)).await.unwrap();
        for status in path {
            ledger.set_status(id.to_string(), status).await.unwrap();
        }
        let committed = ledger
            .set_status(id.to_string(), OrderStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(committed, OrderStatus::Cancelled);
    }

    // Cancelled orders stay recorded but are not active
    use actor_framework::ActorClient;
    assert_eq!(ledger.list().await.unwrap().len(), 3);
    assert!(ledger.list_active().await.unwrap().is_empty());
}

#[tokio::test]
async fn active_listing_is_stable_across_unrelated_mutations() {
    let (ledger, _notifier, _insight) = spawn_ledger();

    for id in ["ORD-70", "ORD-71", "ORD-72", "ORD-73"] {
        ledger.create_order(order(id)).await.unwrap();
    }

    // Touch the middle orders: advance one, message another
    ledger
        .set_status("ORD-71".to_string(), OrderStatus::Preparing)
        .await
        .unwrap();
    ledger
        .set_rider_message("ORD-72".to_string(), "gate code 4412")
        .await
        .unwrap();

    let active: Vec<String> = ledger
        .list_active()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(active, vec!["ORD-70", "ORD-71", "ORD-72", "ORD-73"]);

    // Completing one removes it without reordering the rest
    ledger
        .set_status("ORD-71".to_string(), OrderStatus::Ready)
        .await
        .unwrap();
    ledger
        .set_status("ORD-71".to_string(), OrderStatus::Completed)
        .await
        .unwrap();
    let active: Vec<String> = ledger
        .list_active()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(active, vec!["ORD-70", "ORD-72", "ORD-73"]);
}
