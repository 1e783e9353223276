//! Outbound domain module (order validation and shipment packing).
//!
//! This crate contains the outbound validator and the truck bin-packing
//! engine, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod packer;
pub mod validator;

pub use packer::{PackerConfig, PackingPlan, Truck, pack};
pub use validator::{OrderLine, OutboundOrder, validate_order};
