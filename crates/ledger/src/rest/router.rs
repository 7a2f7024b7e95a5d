use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::ledger::SlotLedger;

/// Application state shared across handlers.
pub struct AppState {
    pub ledger: Arc<SlotLedger>,
}

/// Create the REST API router for the doctor service.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/doctors/{id}", get(handlers::get_doctor))
        .route("/doctors/{id}/reserve", post(handlers::reserve))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
