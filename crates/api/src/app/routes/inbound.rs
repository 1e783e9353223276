use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use wareflow_core::WarehouseId;
use wareflow_inbound::InboundManifest;

use crate::app::{AppState, dto, errors};

pub async fn replenishment_report(
    Extension(state): Extension<Arc<AppState>>,
    Path(warehouse_id): Path<u32>,
) -> axum::response::Response {
    let warehouse_id = WarehouseId::new(warehouse_id);
    tracing::info!(%warehouse_id, "building replenishment report");

    let report = state.replenishment_report(warehouse_id);

    tracing::debug!(batches = report.batches.len(), "constructed replenishment report");
    (StatusCode::OK, Json(report)).into_response()
}

pub async fn receive_manifest(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::InboundManifestRequest>,
) -> axum::response::Response {
    let manifest = InboundManifest::from(body);
    tracing::info!(warehouse_id = %manifest.warehouse_id, gcp = %manifest.gcp, lines = manifest.lines.len(), "processing inbound manifest");

    match state.receive_manifest(&manifest) {
        Ok(()) => {
            tracing::info!("stock levels increased");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "warehouse_id": manifest.warehouse_id,
                    "lines_received": manifest.lines.len(),
                })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
