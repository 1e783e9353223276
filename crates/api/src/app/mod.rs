//! Application wiring: state, routes, error mapping.

use std::sync::Arc;

use axum::{Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppState;

/// Build the full application router over the given state.
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::router().layer(Extension(state))
}
