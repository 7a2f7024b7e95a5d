//! In-process adapter of the reservation port to the slot ledger.

use async_trait::async_trait;
use medbook_booking::{ReservationClient, ReservationError};
use medbook_core::{DenialReason, DoctorId, ReservationOutcome};
use medbook_ledger::{LedgerError, SlotLedger};
use std::sync::Arc;

/// Calls the ledger directly, for single-process deployments.
///
/// The outcome mapping mirrors `HttpReservationClient`, so the orchestrator
/// cannot tell the two apart.
pub struct LocalReservationClient {
    ledger: Arc<SlotLedger>,
}

impl LocalReservationClient {
    pub fn new(ledger: Arc<SlotLedger>) -> Self {
        LocalReservationClient { ledger }
    }
}

#[async_trait]
impl ReservationClient for LocalReservationClient {
    async fn reserve(
        &self,
        doctor_id: &DoctorId,
        slots: u32,
    ) -> Result<ReservationOutcome, ReservationError> {
        match self.ledger.reserve(doctor_id, slots) {
            Ok(grant) => Ok(ReservationOutcome::Granted(grant)),
            Err(LedgerError::DoctorNotFound(_)) => {
                Ok(ReservationOutcome::Denied(DenialReason::UnknownDoctor))
            }
            Err(LedgerError::NoSlots(name)) => {
                Ok(ReservationOutcome::Denied(DenialReason::no_slots_for(&name)))
            }
            Err(err @ LedgerError::InvalidCount) => {
                Err(ReservationError::Malformed(err.to_string()))
            }
        }
    }
}
