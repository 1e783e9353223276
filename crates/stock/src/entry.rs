use serde::{Deserialize, Serialize};

use wareflow_catalog::Company;
use wareflow_core::{Gtin, ProductId, WarehouseId};

/// One (warehouse, product) row of the stock ledger snapshot.
///
/// Carries the product and supplier attributes the replenishment planner
/// needs, denormalized the way the ledger serves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseStockEntry {
    pub warehouse_id: WarehouseId,
    pub product_id: ProductId,
    pub gtin: Gtin,
    pub product_name: String,
    /// Units currently held.
    pub held: u32,
    /// Reorder is triggered when `held` drops below this.
    pub lower_threshold: u32,
    pub minimum_order_quantity: u32,
    pub discontinued: bool,
    /// Supplying company, for reorder grouping.
    pub company: Company,
}

impl WarehouseStockEntry {
    /// Whether this row qualifies for reorder: stock below threshold and the
    /// product still live. Discontinued products are never reordered — a hard
    /// business rule, not an optimization.
    pub fn needs_reorder(&self) -> bool {
        self.held < self.lower_threshold && !self.discontinued
    }
}
