//! The booking orchestration state machine.
//!
//! Per request: `Received -> ReservationPending -> {Confirmed | Rejected |
//! Errored}`. The reservation decision is made exactly once, synchronously;
//! the appointment event is created if and only if the outcome is
//! Confirmed, and handing it to the sink never delays or alters the
//! already-decided outcome.

use medbook_core::{
    AppointmentEvent, AppointmentId, BookingRequest, Clock, DenialReason, DoctorId,
    ReservationOutcome,
};
use std::sync::Arc;

use crate::application::ports::{EventSink, ReservationClient};
use crate::error::BookingError;

/// Terminal outcome of a booking request, as seen by the client.
///
/// Errored terminal states are the `Err` side of `execute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Confirmed {
        appointment_id: AppointmentId,
        doctor_name: String,
    },
    Rejected {
        reason: String,
    },
}

pub struct BookAppointmentUseCase<R, S, C>
where
    R: ReservationClient,
    S: EventSink,
    C: Clock,
{
    reservation: Arc<R>,
    events: Arc<S>,
    clock: Arc<C>,
}

impl<R, S, C> BookAppointmentUseCase<R, S, C>
where
    R: ReservationClient,
    S: EventSink,
    C: Clock,
{
    pub fn new(reservation: Arc<R>, events: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            reservation,
            events,
            clock,
        }
    }

    pub async fn execute(&self, request: BookingRequest) -> Result<BookingOutcome, BookingError> {
        // Received -> validation. A failure here is terminal: no reservation
        // is attempted.
        let missing = request.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(?missing, "booking request rejected: missing fields");
            return Err(BookingError::MissingFields(missing));
        }
        let doctor_id =
            DoctorId::new(request.doctor_id.as_str()).map_err(BookingError::InvalidDoctorId)?;

        // ReservationPending: the single source of truth for this request.
        match self.reservation.reserve(&doctor_id, 1).await? {
            ReservationOutcome::Granted(grant) => {
                let doctor_name = grant.doctor_name.clone();
                let event = AppointmentEvent::from_grant(&request, &grant, self.clock.now());
                let appointment_id = event.id;

                tracing::info!(
                    %appointment_id,
                    doctor_id = %grant.doctor_id,
                    slots_remaining = grant.slots_remaining,
                    "appointment confirmed"
                );

                // The reservation is committed; delivery is advisory from
                // here on and must not touch the outcome.
                self.events.dispatch(event);

                Ok(BookingOutcome::Confirmed {
                    appointment_id,
                    doctor_name,
                })
            }
            ReservationOutcome::Denied(DenialReason::UnknownDoctor) => {
                Err(BookingError::UnknownDoctor(doctor_id.to_string()))
            }
            ReservationOutcome::Denied(denial @ DenialReason::NoSlots { .. }) => {
                tracing::info!(%doctor_id, "booking rejected: {denial}");
                Ok(BookingOutcome::Rejected {
                    reason: denial.to_string(),
                })
            }
        }
    }
}
