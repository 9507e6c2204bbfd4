//! The in-memory intake feed: seed catalog and seed orders for the demo
//! binary and integration tests. In production these records would arrive
//! from the delivery network; the engine does not care where they come
//! from.

use crate::model::{
    OrderCreate, OrderItem, ProductCreate, RiderInfo, RiderStatus, StockStatus,
};
use chrono::{Duration, Utc};

/// Orders completed before this session began, counted by the network.
/// Callers add this to `count_completed()` when presenting totals.
pub const COMPLETED_BEFORE_SESSION: usize = 8;

/// The catalog as loaded at session start.
pub fn seed_catalog() -> Vec<ProductCreate> {
    vec![
        ProductCreate {
            id: "prod-001".to_string(),
            name: "Organic Bananas".to_string(),
            category: "Fruits".to_string(),
            price: 40.0,
            status: StockStatus::InStock,
        },
        ProductCreate {
            id: "prod-002".to_string(),
            name: "Whole Wheat Bread".to_string(),
            category: "Bakery".to_string(),
            price: 35.0,
            status: StockStatus::LowStock,
        },
        ProductCreate {
            id: "prod-003".to_string(),
            name: "Farm Eggs (dozen)".to_string(),
            category: "Dairy".to_string(),
            price: 72.0,
            status: StockStatus::InStock,
        },
        ProductCreate {
            id: "prod-004".to_string(),
            name: "Tomatoes 1kg".to_string(),
            category: "Vegetables".to_string(),
            price: 30.0,
            status: StockStatus::OutOfStock,
        },
        ProductCreate {
            id: "prod-005".to_string(),
            name: "Toned Milk 1L".to_string(),
            category: "Dairy".to_string(),
            price: 28.0,
            status: StockStatus::InStock,
        },
    ]
}

/// Pending orders waiting at session start.
pub fn seed_orders() -> Vec<OrderCreate> {
    let now = Utc::now();
    vec![
        OrderCreate {
            id: "ORD-1042".to_string(),
            customer_name: "Asha Patel".to_string(),
            items: vec![
                OrderItem {
                    product_id: "prod-001".to_string(),
                    name: "Organic Bananas".to_string(),
                    quantity: 2,
                    price: 40.0,
                },
                OrderItem {
                    product_id: "prod-005".to_string(),
                    name: "Toned Milk 1L".to_string(),
                    quantity: 1,
                    price: 28.0,
                },
            ],
            total_amount: 108.0,
            created_at: now - Duration::minutes(12),
            rider: Some(RiderInfo {
                name: "Ravi Kumar".to_string(),
                phone: "+91-98100-00000".to_string(),
                arrival_minutes: 6,
                status: RiderStatus::Assigned,
            }),
        },
        OrderCreate {
            id: "ORD-1043".to_string(),
            customer_name: "Meera Iyer".to_string(),
            items: vec![
                OrderItem {
                    product_id: "prod-003".to_string(),
                    name: "Farm Eggs (dozen)".to_string(),
                    quantity: 1,
                    price: 72.0,
                },
                OrderItem {
                    product_id: "prod-002".to_string(),
                    name: "Whole Wheat Bread".to_string(),
                    quantity: 2,
                    price: 35.0,
                },
            ],
            total_amount: 142.0,
            created_at: now - Duration::minutes(7),
            rider: Some(RiderInfo {
                name: "Sunil Shah".to_string(),
                phone: "+91-98100-11111".to_string(),
                arrival_minutes: 14,
                status: RiderStatus::Waiting,
            }),
        },
        OrderCreate {
            id: "ORD-1044".to_string(),
            customer_name: "Dev Narang".to_string(),
            items: vec![OrderItem {
                product_id: "prod-005".to_string(),
                name: "Toned Milk 1L".to_string(),
                quantity: 4,
                price: 28.0,
            }],
            total_amount: 112.0,
            created_at: now - Duration::minutes(2),
            rider: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;
    use actor_framework::ActorEntity;

    #[test]
    fn seed_orders_pass_ledger_validation() {
        for params in seed_orders() {
            let id = params.id.clone();
            Order::from_create_params(params)
                .unwrap_or_else(|e| panic!("seed order {id} rejected: {e}"));
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let mut product_ids: Vec<String> = seed_catalog().into_iter().map(|p| p.id).collect();
        product_ids.sort();
        product_ids.dedup();
        assert_eq!(product_ids.len(), seed_catalog().len());

        let mut order_ids: Vec<String> = seed_orders().into_iter().map(|o| o.id).collect();
        order_ids.sort();
        order_ids.dedup();
        assert_eq!(order_ids.len(), seed_orders().len());
    }
}
