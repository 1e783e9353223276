use serde::Deserialize;

use wareflow_core::{Gcp, Gtin, WarehouseId};
use wareflow_inbound::{InboundManifest, ManifestLine};
use wareflow_outbound::{OrderLine, OutboundOrder};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub gtin: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct OutboundOrderRequest {
    pub warehouse_id: u32,
    pub order_lines: Vec<OrderLineRequest>,
}

impl From<OutboundOrderRequest> for OutboundOrder {
    fn from(req: OutboundOrderRequest) -> Self {
        OutboundOrder {
            warehouse_id: WarehouseId::new(req.warehouse_id),
            lines: req
                .order_lines
                .into_iter()
                .map(|l| OrderLine {
                    gtin: Gtin::new(l.gtin),
                    quantity: l.quantity,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InboundManifestRequest {
    pub warehouse_id: u32,
    pub gcp: String,
    pub order_lines: Vec<OrderLineRequest>,
}

impl From<InboundManifestRequest> for InboundManifest {
    fn from(req: InboundManifestRequest) -> Self {
        InboundManifest {
            warehouse_id: WarehouseId::new(req.warehouse_id),
            gcp: Gcp::new(req.gcp),
            lines: req
                .order_lines
                .into_iter()
                .map(|l| ManifestLine {
                    gtin: Gtin::new(l.gtin),
                    quantity: l.quantity,
                })
                .collect(),
        }
    }
}
