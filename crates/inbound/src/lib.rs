//! Inbound domain module (replenishment planning and manifest receipt).
//!
//! This crate contains the reorder-quantity engine and the inbound-manifest
//! cross-check, implemented purely as deterministic domain logic over ledger
//! snapshots (no IO, no HTTP, no storage).

pub mod manifest;
pub mod planner;

pub use manifest::{InboundManifest, ManifestLine, validate_manifest};
pub use planner::{
    PlannerConfig, ReorderLine, ReplenishmentBatch, ReplenishmentReport, plan_replenishment,
};
