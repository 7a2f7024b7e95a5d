use axum::{Router, routing::post};
use medbook_core::Clock;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::{BookAppointmentUseCase, EventSink, ReservationClient};

/// Application state shared across handlers.
pub struct AppState<R, S, C>
where
    R: ReservationClient,
    S: EventSink,
    C: Clock,
{
    pub use_case: BookAppointmentUseCase<R, S, C>,
}

/// Create the REST API router for the appointment service.
pub fn create_router<R, S, C>(state: Arc<AppState<R, S, C>>) -> Router
where
    R: ReservationClient + 'static,
    S: EventSink + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/appointments", post(handlers::create_appointment::<R, S, C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
