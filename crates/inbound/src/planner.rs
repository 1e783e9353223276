//! Replenishment planner: scan a stock snapshot, decide what to reorder,
//! group the result by supplying company.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wareflow_catalog::{Company, Employee};
use wareflow_core::{Gcp, Gtin, WarehouseId};
use wareflow_stock::WarehouseStockEntry;

/// Planner configuration.
///
/// The multiplier targets a buffer of N threshold-widths above zero; the
/// observed deployment uses 3. Passed in explicitly so deployments and tests
/// can vary it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub reorder_multiplier: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            reorder_multiplier: 3,
        }
    }
}

/// One line of a replenishment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderLine {
    pub gtin: Gtin,
    pub name: String,
    pub quantity: u32,
}

/// All reorder lines for one supplying company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentBatch {
    pub company: Company,
    pub lines: Vec<ReorderLine>,
}

/// The replenishment report returned to callers: batches plus the header
/// identifying who is responsible for placing the orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentReport {
    pub warehouse_id: WarehouseId,
    pub operations_manager: Option<Employee>,
    pub generated_at: DateTime<Utc>,
    pub batches: Vec<ReplenishmentBatch>,
}

/// Scan a warehouse snapshot and produce one batch per company that has at
/// least one product needing reorder.
///
/// Pure: the snapshot is read-only and the same input always yields the same
/// plan. Companies appear in first-seen scan order; lines keep scan order
/// within their batch. An empty snapshot yields an empty plan — a normal
/// outcome, not an error.
pub fn plan_replenishment(
    snapshot: &[WarehouseStockEntry],
    config: &PlannerConfig,
) -> Vec<ReplenishmentBatch> {
    let mut batches: Vec<ReplenishmentBatch> = Vec::new();
    let mut batch_index: HashMap<Gcp, usize> = HashMap::new();

    for entry in snapshot {
        if !entry.needs_reorder() {
            continue;
        }

        let line = ReorderLine {
            gtin: entry.gtin.clone(),
            name: entry.product_name.clone(),
            quantity: order_quantity(entry, config),
        };

        let idx = *batch_index
            .entry(entry.company.gcp.clone())
            .or_insert_with(|| {
                batches.push(ReplenishmentBatch {
                    company: entry.company.clone(),
                    lines: Vec::new(),
                });
                batches.len() - 1
            });
        batches[idx].lines.push(line);
    }

    batches
}

/// Reorder quantity for a qualifying entry: refill to `multiplier` threshold
/// widths, but never below the supplier's minimum order quantity.
///
/// Computed in wide integers and saturated at `u32::MAX`: a target beyond the
/// representable range orders the maximum rather than wrapping to a small (or
/// zero) quantity.
fn order_quantity(entry: &WarehouseStockEntry, config: &PlannerConfig) -> u32 {
    let target = i128::from(entry.lower_threshold) * i128::from(config.reorder_multiplier)
        - i128::from(entry.held);
    let quantity = target.max(i128::from(entry.minimum_order_quantity));
    u32::try_from(quantity).unwrap_or(u32::MAX)
}
