use axum::{
    Router,
    routing::{get, post},
};

pub mod inbound;
pub mod outbound;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/warehouses/:warehouse_id/replenishment",
            get(inbound::replenishment_report),
        )
        .route("/inbound/manifests", post(inbound::receive_manifest))
        .route("/outbound/orders", post(outbound::create_order))
}
