//! Typed client wrappers around the generic resource clients.

pub mod catalog_client;
pub mod ledger_client;

pub use catalog_client::CatalogClient;
pub use ledger_client::LedgerClient;
