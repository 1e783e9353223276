//! Infrastructure implementations of the domain seams.
//!
//! The authoritative stock ledger and product directory live in external
//! systems in production; this crate provides the in-memory reference
//! implementation used by the binary and by tests.

pub mod warehouse;

pub use warehouse::InMemoryWarehouse;
