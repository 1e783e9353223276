//! In-memory warehouse backing store for dev and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use wareflow_catalog::{Company, Employee, Product, ProductDirectory};
use wareflow_core::{DomainError, DomainResult, Gcp, Gtin, ProductId, WarehouseId};
use wareflow_stock::{StockAlteration, StockLedger, WarehouseStockEntry};

#[derive(Debug, Clone)]
struct StockRow {
    held: u32,
    lower_threshold: u32,
}

#[derive(Debug, Default)]
struct Inner {
    products: HashMap<ProductId, Product>,
    companies: HashMap<Gcp, Company>,
    managers: HashMap<WarehouseId, Employee>,
    rows: HashMap<(WarehouseId, ProductId), StockRow>,
}

/// In-memory `StockLedger` + `ProductDirectory`.
///
/// Every mutation batch runs under a single write guard, so concurrent
/// add/remove calls are serialized: two outbound requests against the same
/// product cannot both pass the sufficiency re-check against stale stock and
/// jointly over-deduct.
#[derive(Debug, Default)]
pub struct InMemoryWarehouse {
    inner: RwLock<Inner>,
}

impl InMemoryWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_company(&self, company: Company) {
        let mut inner = self.inner.write().expect("warehouse lock poisoned");
        inner.companies.insert(company.gcp.clone(), company);
    }

    pub fn register_operations_manager(&self, employee: Employee) {
        let mut inner = self.inner.write().expect("warehouse lock poisoned");
        inner.managers.insert(employee.warehouse_id, employee);
    }

    pub fn register_product(&self, product: Product) {
        let mut inner = self.inner.write().expect("warehouse lock poisoned");
        inner.products.insert(product.id, product);
    }

    /// Seed or overwrite one (warehouse, product) stock row.
    pub fn put_stock(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        held: u32,
        lower_threshold: u32,
    ) {
        let mut inner = self.inner.write().expect("warehouse lock poisoned");
        inner.rows.insert(
            (warehouse_id, product_id),
            StockRow {
                held,
                lower_threshold,
            },
        );
    }
}

impl ProductDirectory for InMemoryWarehouse {
    fn products_by_gtin(&self, gtins: &[Gtin]) -> Vec<Product> {
        let inner = self.inner.read().expect("warehouse lock poisoned");
        inner
            .products
            .values()
            .filter(|p| gtins.contains(&p.gtin))
            .cloned()
            .collect()
    }

    fn operations_manager(&self, warehouse_id: WarehouseId) -> Option<Employee> {
        let inner = self.inner.read().expect("warehouse lock poisoned");
        inner.managers.get(&warehouse_id).cloned()
    }
}

impl StockLedger for InMemoryWarehouse {
    fn snapshot(&self, warehouse_id: WarehouseId) -> Vec<WarehouseStockEntry> {
        let inner = self.inner.read().expect("warehouse lock poisoned");

        let mut entries: Vec<WarehouseStockEntry> = inner
            .rows
            .iter()
            .filter(|((w, _), _)| *w == warehouse_id)
            .filter_map(|((_, product_id), row)| {
                let product = inner.products.get(product_id)?;
                let company = inner
                    .companies
                    .get(&product.gcp)
                    .cloned()
                    .unwrap_or_else(|| Company::new(product.gcp.clone(), product.gcp.to_string()));

                Some(WarehouseStockEntry {
                    warehouse_id,
                    product_id: *product_id,
                    gtin: product.gtin.clone(),
                    product_name: product.name.clone(),
                    held: row.held,
                    lower_threshold: row.lower_threshold,
                    minimum_order_quantity: product.minimum_order_quantity,
                    discontinued: product.discontinued,
                    company,
                })
            })
            .collect();

        // Stable scan order so planner output is reproducible.
        entries.sort_by_key(|e| e.product_id);
        entries
    }

    fn stock_levels(
        &self,
        warehouse_id: WarehouseId,
        product_ids: &[ProductId],
    ) -> HashMap<ProductId, u32> {
        let inner = self.inner.read().expect("warehouse lock poisoned");
        product_ids
            .iter()
            .filter_map(|id| {
                inner
                    .rows
                    .get(&(warehouse_id, *id))
                    .map(|row| (*id, row.held))
            })
            .collect()
    }

    fn add_stock(
        &self,
        warehouse_id: WarehouseId,
        alterations: &[StockAlteration],
    ) -> DomainResult<()> {
        let mut inner = self.inner.write().expect("warehouse lock poisoned");

        // Check the projected totals first, then apply all-or-nothing: a held
        // quantity must never overflow its representation.
        let mut projected: HashMap<ProductId, u64> = HashMap::new();
        for alteration in alterations {
            let held = inner
                .rows
                .get(&(warehouse_id, alteration.product_id()))
                .map_or(0, |row| row.held);
            let total = projected.entry(alteration.product_id()).or_insert(u64::from(held));
            *total += u64::from(alteration.quantity());
            if *total > u64::from(u32::MAX) {
                return Err(DomainError::validation(format!(
                    "product {}: stock held {} plus {} exceeds the supported maximum",
                    alteration.gtin(),
                    held,
                    alteration.quantity()
                )));
            }
        }

        for alteration in alterations {
            let row = inner
                .rows
                .entry((warehouse_id, alteration.product_id()))
                .or_insert(StockRow {
                    held: 0,
                    lower_threshold: 0,
                });
            row.held += alteration.quantity();
        }

        tracing::debug!(%warehouse_id, lines = alterations.len(), "stock levels increased");
        Ok(())
    }

    fn remove_stock(
        &self,
        warehouse_id: WarehouseId,
        alterations: &[StockAlteration],
    ) -> DomainResult<()> {
        let mut inner = self.inner.write().expect("warehouse lock poisoned");

        // Re-check sufficiency under the write lock, then apply all-or-nothing.
        let mut errors: Vec<String> = Vec::new();
        for alteration in alterations {
            let held = inner
                .rows
                .get(&(warehouse_id, alteration.product_id()))
                .map(|row| row.held);
            match held {
                None => errors.push(format!("product {}: no stock held", alteration.gtin())),
                Some(held) if alteration.quantity() > held => errors.push(format!(
                    "product {}: stock held {}, stock to remove {}",
                    alteration.gtin(),
                    held,
                    alteration.quantity()
                )),
                Some(_) => {}
            }
        }
        if !errors.is_empty() {
            return Err(DomainError::insufficient_stock(errors.join("; ")));
        }

        for alteration in alterations {
            if let Some(row) = inner
                .rows
                .get_mut(&(warehouse_id, alteration.product_id()))
            {
                row.held -= alteration.quantity();
            }
        }

        tracing::debug!(%warehouse_id, lines = alterations.len(), "stock levels decreased");
        Ok(())
    }
}
