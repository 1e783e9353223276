use std::sync::Arc;

use anyhow::Context;

use wareflow_api::app::{AppState, build_app};
use wareflow_inbound::PlannerConfig;
use wareflow_infra::InMemoryWarehouse;
use wareflow_outbound::PackerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wareflow_observability::init();

    let packer = PackerConfig {
        truck_capacity_grams: env_u64(
            "TRUCK_CAPACITY_GRAMS",
            PackerConfig::default().truck_capacity_grams,
        ),
    };
    let planner = PlannerConfig {
        reorder_multiplier: env_u64("REORDER_MULTIPLIER", 3) as u32,
    };

    let warehouse = Arc::new(InMemoryWarehouse::new());
    let state = Arc::new(AppState::new(warehouse.clone(), warehouse, planner, packer));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .context("failed to bind 0.0.0.0:8080")?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{name} is not a valid integer; using default {default}");
            default
        }),
        Err(_) => default,
    }
}
