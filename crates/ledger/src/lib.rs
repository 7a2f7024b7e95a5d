//! Medbook Ledger
//!
//! The doctor service: holds the authoritative roster of doctors and their
//! remaining appointment slots, and exposes the single atomic reserve
//! operation over REST.
//!
//! # Architecture
//!
//! - [`SlotLedger`]: concurrency-safe capacity counts; the only mutation
//!   path is `reserve`.
//! - [`config`]: roster seeding from defaults or JSON.
//! - [`rest`]: axum presentation layer (`GET /doctors`, `GET /doctors/{id}`,
//!   `POST /doctors/{id}/reserve`).

pub mod config;
pub mod error;
pub mod ledger;
pub mod rest;

pub use config::LedgerConfig;
pub use error::LedgerError;
pub use ledger::SlotLedger;
pub use rest::{AppState, create_router};

use std::sync::Arc;
use tokio::net::TcpListener;

/// The doctor service: a seeded ledger plus its REST router.
pub struct DoctorService {
    pub config: LedgerConfig,
    pub ledger: Arc<SlotLedger>,
}

impl DoctorService {
    pub fn new(config: LedgerConfig) -> Self {
        let ledger = Arc::new(SlotLedger::seeded(config.roster()));
        DoctorService { config, ledger }
    }

    pub fn rest_router(&self) -> axum::Router {
        create_router(Arc::new(AppState {
            ledger: Arc::clone(&self.ledger),
        }))
    }

    /// Serve the REST API until the process exits.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let router = self.rest_router();

        tracing::info!("doctor service listening on {}", addr);
        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;
        Ok(())
    }
}
