//! Ledger seam: how the engines read and mutate held stock.

use std::collections::HashMap;
use std::sync::Arc;

use wareflow_core::{DomainResult, ProductId, WarehouseId};

use crate::alteration::StockAlteration;
use crate::entry::WarehouseStockEntry;

/// Stock ledger collaborator.
///
/// The read-validate-then-mutate sequence the engines perform is only safe if
/// implementations serialize concurrent mutations per warehouse, so two
/// concurrent outbound requests against the same product cannot both pass
/// validation against stale stock and jointly over-deduct. `add_stock` and
/// `remove_stock` must therefore be atomic read-modify-write operations.
pub trait StockLedger: Send + Sync {
    /// Point-in-time snapshot of every stock row in a warehouse.
    fn snapshot(&self, warehouse_id: WarehouseId) -> Vec<WarehouseStockEntry>;

    /// Held quantities for the given products. Products absent from the map
    /// hold no stock at all in this warehouse.
    fn stock_levels(
        &self,
        warehouse_id: WarehouseId,
        product_ids: &[ProductId],
    ) -> HashMap<ProductId, u32>;

    /// Atomically increase held quantities.
    ///
    /// Must reject (not wrap) an addition that would overflow a held
    /// quantity, applying none of the batch.
    fn add_stock(
        &self,
        warehouse_id: WarehouseId,
        alterations: &[StockAlteration],
    ) -> DomainResult<()>;

    /// Atomically decrease held quantities.
    ///
    /// Must reject (not clamp) a removal that would drive a held quantity
    /// negative, as defense in depth behind the outbound validator.
    fn remove_stock(
        &self,
        warehouse_id: WarehouseId,
        alterations: &[StockAlteration],
    ) -> DomainResult<()>;
}

impl<L> StockLedger for Arc<L>
where
    L: StockLedger + ?Sized,
{
    fn snapshot(&self, warehouse_id: WarehouseId) -> Vec<WarehouseStockEntry> {
        (**self).snapshot(warehouse_id)
    }

    fn stock_levels(
        &self,
        warehouse_id: WarehouseId,
        product_ids: &[ProductId],
    ) -> HashMap<ProductId, u32> {
        (**self).stock_levels(warehouse_id, product_ids)
    }

    fn add_stock(
        &self,
        warehouse_id: WarehouseId,
        alterations: &[StockAlteration],
    ) -> DomainResult<()> {
        (**self).add_stock(warehouse_id, alterations)
    }

    fn remove_stock(
        &self,
        warehouse_id: WarehouseId,
        alterations: &[StockAlteration],
    ) -> DomainResult<()> {
        (**self).remove_stock(warehouse_id, alterations)
    }
}
