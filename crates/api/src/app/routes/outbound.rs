use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use wareflow_outbound::OutboundOrder;

use crate::app::{AppState, dto, errors};

pub async fn create_order(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::OutboundOrderRequest>,
) -> axum::response::Response {
    let order = OutboundOrder::from(body);
    tracing::info!(warehouse_id = %order.warehouse_id, lines = order.lines.len(), "processing outbound order");

    match state.process_outbound(&order) {
        Ok(plan) => {
            tracing::info!(trucks = plan.truck_count(), "outbound order packed");
            (StatusCode::OK, Json(plan)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
