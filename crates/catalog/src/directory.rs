//! Directory seam: how the engines look up catalog data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use wareflow_core::{Gtin, WarehouseId};

use crate::product::Product;

/// A warehouse employee. Only the operations manager identity is consumed by
/// this system, to stamp the replenishment report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub warehouse_id: WarehouseId,
    pub email: Option<String>,
}

/// Product/company directory collaborator.
///
/// Implemented by infrastructure; the engines only read through it.
pub trait ProductDirectory: Send + Sync {
    /// Resolve products by GTIN. GTINs with no match are simply absent from
    /// the result; callers decide whether that is an error.
    fn products_by_gtin(&self, gtins: &[Gtin]) -> Vec<Product>;

    /// Operations manager for a warehouse, if one is on record.
    fn operations_manager(&self, warehouse_id: WarehouseId) -> Option<Employee>;
}

impl<D> ProductDirectory for Arc<D>
where
    D: ProductDirectory + ?Sized,
{
    fn products_by_gtin(&self, gtins: &[Gtin]) -> Vec<Product> {
        (**self).products_by_gtin(gtins)
    }

    fn operations_manager(&self, warehouse_id: WarehouseId) -> Option<Employee> {
        (**self).operations_manager(warehouse_id)
    }
}
