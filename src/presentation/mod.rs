// Presentation layer - HTTP surface
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard, health_check, index, options, year_selector};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/options", get(options))
        .route("/api/year-selector", get(year_selector))
        .route("/api/dashboard", get(dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
