//! Inbound manifest validation: cross-check a supplier delivery against the
//! catalog before any stock is added.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use wareflow_catalog::{Product, ProductDirectory};
use wareflow_core::{DomainError, DomainResult, Gcp, Gtin, WarehouseId};
use wareflow_stock::StockAlteration;

/// One line of a supplier manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestLine {
    pub gtin: Gtin,
    pub quantity: i64,
}

/// An inbound delivery manifest, declared under one supplier GCP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundManifest {
    pub warehouse_id: WarehouseId,
    pub gcp: Gcp,
    pub lines: Vec<ManifestLine>,
}

/// Validate a manifest and produce the alterations to apply on success.
///
/// A line whose product's recorded GCP disagrees with the declared manifest
/// GCP is a validation error, not a silent acceptance. Unknown-GTIN and
/// GCP-mismatch problems are collected across all lines and reported as one
/// aggregated `Validation` failure; no stock is mutated when any is present.
pub fn validate_manifest(
    manifest: &InboundManifest,
    directory: &dyn ProductDirectory,
) -> DomainResult<Vec<StockAlteration>> {
    reject_duplicate_gtins(&manifest.lines)?;

    let gtins: Vec<Gtin> = manifest.lines.iter().map(|l| l.gtin.clone()).collect();
    let products: HashMap<Gtin, Product> = directory
        .products_by_gtin(&gtins)
        .into_iter()
        .map(|p| (p.gtin.clone(), p))
        .collect();

    let mut alterations = Vec::with_capacity(manifest.lines.len());
    let mut errors: Vec<String> = Vec::new();

    for line in &manifest.lines {
        let Some(product) = products.get(&line.gtin) else {
            errors.push(format!("unknown product gtin: {}", line.gtin));
            continue;
        };

        if product.gcp != manifest.gcp {
            errors.push(format!(
                "manifest GCP ({}) does not match product GCP ({}) for gtin {}",
                manifest.gcp, product.gcp, line.gtin
            ));
            continue;
        }

        alterations.push(StockAlteration::new(
            product.id,
            line.gtin.clone(),
            line.quantity,
            product.unit_weight_grams,
        )?);
    }

    if !errors.is_empty() {
        return Err(DomainError::validation(format!(
            "found inconsistencies in the inbound manifest: {}",
            errors.join("; ")
        )));
    }

    Ok(alterations)
}

fn reject_duplicate_gtins(lines: &[ManifestLine]) -> DomainResult<()> {
    let mut seen: Vec<&Gtin> = Vec::with_capacity(lines.len());
    for line in lines {
        if seen.contains(&&line.gtin) {
            return Err(DomainError::validation(format!(
                "manifest contains duplicate product gtin: {}",
                line.gtin
            )));
        }
        seen.push(&line.gtin);
    }
    Ok(())
}
