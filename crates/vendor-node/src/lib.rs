//! # Vendor Node
//!
//! The operations core for a last-mile delivery vendor node: incoming orders
//! move through a fulfillment lifecycle, the operator signals per-item stock
//! availability (which gates whether new orders for that item may be placed),
//! and a pluggable text-generation collaborator summarizes the current state
//! into operator-facing insights.
//!
//! ## Components
//!
//! - **[model]**: Pure data structures ([`Order`](model::Order),
//!   [`Product`](model::Product)) and their status enums.
//! - **[ledger]**: The Order Ledger actor, sole owner of order records and
//!   enforcer of the status-transition table.
//! - **[catalog]**: The Catalog Store actor, sole owner of product records
//!   and their stock statuses.
//! - **[gating]**: The pure admissibility rule consulted by order intake.
//! - **[notifier]**: The Notification Emitter: one short-lived operator
//!   message at a time, auto-expiring.
//! - **[insight]**: The Insight Trigger, which refreshes derived text through an
//!   external [`InsightGenerator`](insight::InsightGenerator) while the
//!   insights surface is active.
//! - **[clients]**: Typed wrappers ([`LedgerClient`](clients::LedgerClient),
//!   [`CatalogClient`](clients::CatalogClient)) hiding the message passing.
//! - **[lifecycle]**: Orchestration: starts, wires, and shuts down the
//!   actors as one [`ConsoleSystem`](lifecycle::ConsoleSystem).
//! - **[feed]**: The in-memory seed feed (catalog load + pending orders)
//!   used by the demo binary and integration tests.
//!
//! The presentation layer stays outside this crate: it reads listings, the
//! active notification, and the insight snapshot, and calls the typed
//! mutators. Nothing here renders anything.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod feed;
pub mod gating;
pub mod insight;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod notifier;
