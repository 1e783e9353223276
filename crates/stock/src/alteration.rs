use serde::{Deserialize, Serialize};

use wareflow_core::{DomainError, DomainResult, Gtin, ProductId};

/// A validated quantity change against the ledger, used for both additions
/// and removals.
///
/// Construction is the validation point: a negative quantity, or one above
/// `u32::MAX`, fails immediately, so no alteration with an invalid quantity
/// ever exists. Quantity zero is legal and denotes a no-op line retained for
/// completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAlteration {
    product_id: ProductId,
    gtin: Gtin,
    quantity: u32,
    unit_weight_grams: u64,
}

impl StockAlteration {
    /// Build an alteration from an as-requested (signed) quantity.
    pub fn new(
        product_id: ProductId,
        gtin: Gtin,
        quantity: i64,
        unit_weight_grams: u64,
    ) -> DomainResult<Self> {
        if quantity < 0 {
            return Err(DomainError::validation(format!(
                "product {gtin}: quantity must not be negative (got {quantity})"
            )));
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            DomainError::validation(format!(
                "product {gtin}: quantity {quantity} exceeds the supported maximum ({})",
                u32::MAX
            ))
        })?;

        Ok(Self {
            product_id,
            gtin,
            quantity,
            unit_weight_grams,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn gtin(&self) -> &Gtin {
        &self.gtin
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_weight_grams(&self) -> u64 {
        self.unit_weight_grams
    }

    /// Total weight of the line: unit weight × quantity, exact.
    pub fn total_weight_grams(&self) -> u64 {
        self.unit_weight_grams * u64::from(self.quantity)
    }
}
