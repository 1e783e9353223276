//! Outbound order validation: resolve GTINs against the catalog and check
//! requested quantities against held stock before any ledger mutation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use wareflow_catalog::{Product, ProductDirectory};
use wareflow_core::{DomainError, DomainResult, Gtin, WarehouseId};
use wareflow_stock::{StockAlteration, StockLedger};

/// One requested line of an outbound order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub gtin: Gtin,
    pub quantity: i64,
}

/// An outbound shipment request against one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundOrder {
    pub warehouse_id: WarehouseId,
    pub lines: Vec<OrderLine>,
}

/// Validate an outbound order, producing the alteration set to remove.
///
/// The propagation policy is collect-then-report: every detectable problem of
/// one kind is gathered across all lines before failing once with the
/// complete set. Unknown GTINs short-circuit the stock checks — there is no
/// point checking stock for a request that references products that do not
/// exist. On success the alterations come back in the original request order.
pub fn validate_order(
    order: &OutboundOrder,
    directory: &dyn ProductDirectory,
    ledger: &dyn StockLedger,
) -> DomainResult<Vec<StockAlteration>> {
    reject_duplicate_gtins(&order.lines)?;

    let gtins: Vec<Gtin> = order.lines.iter().map(|l| l.gtin.clone()).collect();
    let products: HashMap<Gtin, Product> = directory
        .products_by_gtin(&gtins)
        .into_iter()
        .map(|p| (p.gtin.clone(), p))
        .collect();

    let unknown: Vec<String> = order
        .lines
        .iter()
        .filter(|l| !products.contains_key(&l.gtin))
        .map(|l| format!("unknown product gtin: {}", l.gtin))
        .collect();
    if !unknown.is_empty() {
        return Err(DomainError::no_such_entity(unknown.join("; ")));
    }

    let mut alterations = Vec::with_capacity(order.lines.len());
    for line in &order.lines {
        let product = &products[&line.gtin];
        alterations.push(StockAlteration::new(
            product.id,
            line.gtin.clone(),
            line.quantity,
            product.unit_weight_grams,
        )?);
    }

    check_stock_in_warehouse(order.warehouse_id, &alterations, ledger)?;

    Ok(alterations)
}

fn reject_duplicate_gtins(lines: &[OrderLine]) -> DomainResult<()> {
    let mut seen: Vec<&Gtin> = Vec::with_capacity(lines.len());
    for line in lines {
        if seen.contains(&&line.gtin) {
            return Err(DomainError::validation(format!(
                "outbound order contains duplicate product gtin: {}",
                line.gtin
            )));
        }
        seen.push(&line.gtin);
    }
    Ok(())
}

fn check_stock_in_warehouse(
    warehouse_id: WarehouseId,
    alterations: &[StockAlteration],
    ledger: &dyn StockLedger,
) -> DomainResult<()> {
    let product_ids: Vec<_> = alterations.iter().map(|a| a.product_id()).collect();
    let held = ledger.stock_levels(warehouse_id, &product_ids);

    let mut errors: Vec<String> = Vec::new();
    for alteration in alterations {
        match held.get(&alteration.product_id()) {
            None => errors.push(format!("product {}: no stock held", alteration.gtin())),
            Some(&held_quantity) if alteration.quantity() > held_quantity => {
                errors.push(format!(
                    "product {}: stock held {}, stock to remove {}",
                    alteration.gtin(),
                    held_quantity,
                    alteration.quantity()
                ));
            }
            Some(_) => {}
        }
    }

    if !errors.is_empty() {
        return Err(DomainError::insufficient_stock(errors.join("; ")));
    }
    Ok(())
}
