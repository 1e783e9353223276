//! Application services: orchestration of the planning and shipping engines
//! over the directory/ledger collaborators.

use std::sync::Arc;

use chrono::Utc;

use wareflow_catalog::ProductDirectory;
use wareflow_core::{DomainResult, WarehouseId};
use wareflow_inbound::{
    InboundManifest, PlannerConfig, ReplenishmentReport, plan_replenishment, validate_manifest,
};
use wareflow_outbound::{OutboundOrder, PackerConfig, PackingPlan, pack, validate_order};
use wareflow_stock::StockLedger;

/// Shared application state: collaborator seams plus engine configuration.
pub struct AppState {
    directory: Arc<dyn ProductDirectory>,
    ledger: Arc<dyn StockLedger>,
    planner: PlannerConfig,
    packer: PackerConfig,
}

impl AppState {
    pub fn new(
        directory: Arc<dyn ProductDirectory>,
        ledger: Arc<dyn StockLedger>,
        planner: PlannerConfig,
        packer: PackerConfig,
    ) -> Self {
        Self {
            directory,
            ledger,
            planner,
            packer,
        }
    }

    /// Current replenishment plan for a warehouse, with the report header.
    pub fn replenishment_report(&self, warehouse_id: WarehouseId) -> ReplenishmentReport {
        let snapshot = self.ledger.snapshot(warehouse_id);
        let batches = plan_replenishment(&snapshot, &self.planner);

        ReplenishmentReport {
            warehouse_id,
            operations_manager: self.directory.operations_manager(warehouse_id),
            generated_at: Utc::now(),
            batches,
        }
    }

    /// Validate an inbound manifest and, only if fully consistent, add stock.
    pub fn receive_manifest(&self, manifest: &InboundManifest) -> DomainResult<()> {
        let alterations = validate_manifest(manifest, self.directory.as_ref())?;
        self.ledger.add_stock(manifest.warehouse_id, &alterations)
    }

    /// Validate an outbound order, pack it, then deduct stock.
    ///
    /// Packing runs before the ledger mutation so a capacity violation leaves
    /// the ledger untouched; the ledger re-checks sufficiency itself when the
    /// deduction finally runs.
    pub fn process_outbound(&self, order: &OutboundOrder) -> DomainResult<PackingPlan> {
        let alterations = validate_order(order, self.directory.as_ref(), self.ledger.as_ref())?;
        let plan = pack(&alterations, &self.packer)?;
        self.ledger.remove_stock(order.warehouse_id, &alterations)?;
        Ok(plan)
    }
}
