//! Medbook Booking
//!
//! The appointment service: validates booking requests, reserves a slot
//! through the doctor service, and fans the confirmed appointment out to
//! downstream consumers.
//!
//! The reservation decision is strict and synchronous; everything after
//! "confirmed" is advisory notification. The client response never waits on
//! the broker.

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod publisher;
pub mod rest;

pub use application::{BookAppointmentUseCase, BookingOutcome, EventSink, ReservationClient};
pub use config::BookingConfig;
pub use error::{BookingError, PublishError, ReservationError};
pub use infrastructure::HttpReservationClient;
pub use publisher::{APPOINTMENT_EXCHANGE, AppointmentPublisher};
pub use rest::{AppState, create_router};

use medbook_core::SystemClock;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The appointment service: orchestrator wired to a reservation client and
/// an event sink, plus its REST router.
pub struct BookingService<R, S>
where
    R: ReservationClient + 'static,
    S: EventSink + 'static,
{
    pub config: BookingConfig,
    state: Arc<AppState<R, S, SystemClock>>,
}

impl<R, S> BookingService<R, S>
where
    R: ReservationClient + 'static,
    S: EventSink + 'static,
{
    pub fn new(config: BookingConfig, reservation: Arc<R>, events: Arc<S>) -> Self {
        let use_case =
            BookAppointmentUseCase::new(reservation, events, Arc::new(SystemClock));
        BookingService {
            config,
            state: Arc::new(AppState { use_case }),
        }
    }

    pub fn rest_router(&self) -> axum::Router {
        create_router(Arc::clone(&self.state))
    }

    /// Serve the REST API until the process exits.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let router = self.rest_router();

        tracing::info!("appointment service listening on {}", addr);
        tracing::info!("doctor service URL: {}", self.config.doctor_service_url);
        tracing::info!("broker URL: {}", self.config.broker_url);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;
        Ok(())
    }
}
