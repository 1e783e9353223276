//! Stock domain module (ledger rows and alterations).
//!
//! This crate contains the snapshot and mutation value types for warehouse
//! stock, plus the `StockLedger` seam the engines consume. The authoritative
//! ledger lives in an external system; everything here treats stock data as a
//! point-in-time snapshot, not a live reference. No IO, no HTTP, no storage.

pub mod alteration;
pub mod entry;
pub mod ledger;

pub use alteration::StockAlteration;
pub use entry::WarehouseStockEntry;
pub use ledger::StockLedger;
