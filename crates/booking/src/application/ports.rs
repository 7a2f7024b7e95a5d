use async_trait::async_trait;
use medbook_core::{AppointmentEvent, DoctorId, ReservationOutcome};

use crate::error::ReservationError;

/// Port to the doctor service's reserve operation.
///
/// Implementations must issue at most one ledger call per invocation:
/// capacity decisions are single-shot, and a transport-level retry here
/// could double-decrement.
#[async_trait]
pub trait ReservationClient: Send + Sync {
    async fn reserve(
        &self,
        doctor_id: &DoctorId,
        slots: u32,
    ) -> Result<ReservationOutcome, ReservationError>;
}

/// Sink for confirmed appointment events.
///
/// `dispatch` is fire-and-forget: it must return without waiting on
/// delivery, and delivery failure must never reach the caller.
pub trait EventSink: Send + Sync {
    fn dispatch(&self, event: AppointmentEvent);
}
