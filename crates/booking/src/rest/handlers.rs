use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medbook_core::Clock;
use std::sync::Arc;

use crate::application::{BookingOutcome, EventSink, ReservationClient};
use crate::rest::dto::*;
use crate::rest::{ApiError, AppState};

/// POST /appointments
pub async fn create_appointment<R, S, C>(
    State(state): State<Arc<AppState<R, S, C>>>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<Response, ApiError>
where
    R: ReservationClient,
    S: EventSink,
    C: Clock,
{
    let outcome = state.use_case.execute(req.into_booking_request()).await?;

    let response = match outcome {
        BookingOutcome::Confirmed {
            appointment_id,
            doctor_name,
        } => (
            StatusCode::CREATED,
            Json(AppointmentConfirmed {
                appointment_id: appointment_id.to_string(),
                status: "confirmed".to_string(),
                message: format!("Appointment confirmed with {doctor_name}"),
            }),
        )
            .into_response(),
        BookingOutcome::Rejected { reason } => (
            StatusCode::CONFLICT,
            Json(BookingRejected {
                status: "rejected".to_string(),
                reason,
            }),
        )
            .into_response(),
    };
    Ok(response)
}
