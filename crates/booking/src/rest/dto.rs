use medbook_core::BookingRequest;
use serde::{Deserialize, Serialize};

/// Body of `POST /appointments`.
///
/// Fields are optional at the wire level so that an absent field surfaces
/// as our 400 "missing fields" outcome rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_email: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn into_booking_request(self) -> BookingRequest {
        BookingRequest {
            patient_name: self.patient_name.unwrap_or_default(),
            patient_email: self.patient_email.unwrap_or_default(),
            doctor_id: self.doctor_id.unwrap_or_default(),
            reason: self.reason.unwrap_or_default(),
        }
    }
}

/// 201 body for a confirmed booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentConfirmed {
    pub appointment_id: String,
    pub status: String,
    pub message: String,
}

/// 409 body for a capacity rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRejected {
    pub status: String,
    pub reason: String,
}

/// Error body (400/404/500).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
