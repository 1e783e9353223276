//! Shipment packer: partition validated order lines into a capacity-bounded
//! sequence of trucks.
//!
//! The algorithm is deterministic first-fit with unit-level splitting: lines
//! are processed in input order against one running truck, and a line whose
//! remaining units no longer fit spills into a fresh truck. Greedy, not
//! globally optimal — the domain prefers simplicity and reproducibility over
//! an optimal bin-packing solution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use wareflow_core::{DomainError, DomainResult, ProductId};
use wareflow_stock::StockAlteration;

/// Packer configuration.
///
/// Capacity is an explicit config value, not an embedded literal; the
/// observed deployment runs 2,000,000 g (2 t) trucks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackerConfig {
    pub truck_capacity_grams: u64,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            truck_capacity_grams: 2_000_000,
        }
    }
}

/// One loaded truck: product quantities plus the exact loaded weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    /// Quantity loaded per product. Additive: a product split across several
    /// passes over the same truck merges into one entry.
    contents: HashMap<ProductId, u32>,
    total_weight_grams: u64,
}

impl Truck {
    fn load(&mut self, product_id: ProductId, quantity: u32, unit_weight_grams: u64) {
        *self.contents.entry(product_id).or_insert(0) += quantity;
        self.total_weight_grams += u64::from(quantity) * unit_weight_grams;
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn contents(&self) -> &HashMap<ProductId, u32> {
        &self.contents
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.contents.get(&product_id).copied().unwrap_or(0)
    }

    pub fn total_weight_grams(&self) -> u64 {
        self.total_weight_grams
    }
}

/// The ordered truck sequence produced for one outbound order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingPlan {
    trucks: Vec<Truck>,
}

impl PackingPlan {
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    pub fn truck_count(&self) -> usize {
        self.trucks.len()
    }

    /// Total quantity of one product across all trucks.
    pub fn total_quantity_of(&self, product_id: ProductId) -> u64 {
        self.trucks
            .iter()
            .map(|t| u64::from(t.quantity_of(product_id)))
            .sum()
    }
}

/// Pack validated alterations into trucks.
///
/// Precondition: no unit may outweigh a whole truck — such an item can never
/// be transported and is rejected up front with `CapacityViolation` naming
/// the product, before anything is packed. Zero-quantity lines contribute
/// nothing and are skipped.
pub fn pack(alterations: &[StockAlteration], config: &PackerConfig) -> DomainResult<PackingPlan> {
    let capacity = config.truck_capacity_grams;

    for alteration in alterations {
        if alteration.unit_weight_grams() > capacity {
            return Err(DomainError::capacity_violation(format!(
                "product {}: unit weight {} g exceeds truck capacity {} g",
                alteration.gtin(),
                alteration.unit_weight_grams(),
                capacity
            )));
        }
    }

    let mut finished: Vec<Truck> = Vec::new();
    let mut current = Truck::default();

    for alteration in alterations {
        let unit_weight = alteration.unit_weight_grams();
        let mut remaining_quantity = alteration.quantity();

        while remaining_quantity > 0 {
            let remaining_capacity = capacity - current.total_weight_grams;
            // A zero-weight unit never consumes capacity, so it all fits at once.
            let fit = if unit_weight > 0 {
                remaining_capacity / unit_weight
            } else {
                u64::from(remaining_quantity)
            };
            let take = u64::from(remaining_quantity).min(fit) as u32;

            if take > 0 {
                current.load(alteration.product_id(), take, unit_weight);
                remaining_quantity -= take;
            }

            if remaining_quantity > 0 {
                // Truck is full relative to this product: close it and keep
                // going with a fresh one. An empty truck is never emitted.
                if !current.is_empty() {
                    finished.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        finished.push(current);
    }

    Ok(PackingPlan { trucks: finished })
}
