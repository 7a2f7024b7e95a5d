use medbook_broker::BrokerError;
use thiserror::Error;

/// Failures of the reservation call itself, as opposed to structured
/// denials (which are data, not errors - see `ReservationOutcome`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Doctor service unreachable: {0}")]
    Transport(String),

    #[error("Unexpected doctor service response: {0}")]
    Malformed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Request validation failed; no reservation was attempted.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid doctor id: {0}")]
    InvalidDoctorId(&'static str),

    /// The doctor id references no known doctor.
    #[error("Doctor not found: {0}")]
    UnknownDoctor(String),

    /// The reservation call failed; the reservation state is unchanged.
    #[error("Doctor service error: {0}")]
    Upstream(#[from] ReservationError),
}

/// Failures of the best-effort publish path. Never surfaced to the booking
/// client: by the time these can occur the response is already committed.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Broker connection failed after retries: {0}")]
    Connect(BrokerError),

    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Publish failed: {0}")]
    Broker(BrokerError),
}
