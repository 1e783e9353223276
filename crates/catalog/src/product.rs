use serde::{Deserialize, Serialize};

use wareflow_core::{Gcp, Gtin, ProductId};

/// Catalog entry for a product.
///
/// Immutable identity data loaded from the catalog; never mutated by the
/// planning or shipping engines. Unit weight is stored in integer grams so
/// truck weight totals are exact sums with no rounding drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub gtin: Gtin,
    /// GCP of the owning (supplying) company.
    pub gcp: Gcp,
    pub name: String,
    /// Weight of a single unit, in grams.
    pub unit_weight_grams: u64,
    /// Smallest quantity the supplier will accept on a reorder.
    pub minimum_order_quantity: u32,
    /// Discontinued products are never reordered, regardless of stock level.
    pub discontinued: bool,
}
