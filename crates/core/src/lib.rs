//! Medbook Core Domain
//!
//! Pure domain types for the medbook booking system.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod booking;
pub mod clock;
pub mod doctor;
pub mod event;
pub mod reservation;

// Re-export commonly used types at crate root
pub use booking::BookingRequest;
pub use clock::{Clock, SystemClock};
pub use doctor::{Doctor, DoctorId};
pub use event::{APPOINTMENT_EXCHANGE, AppointmentEvent, AppointmentId};
pub use reservation::{DenialReason, ReservationGrant, ReservationOutcome};

/// Timestamps are UTC wall-clock times, serialized as ISO-8601.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
