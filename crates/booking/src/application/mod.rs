mod orchestrator;
mod ports;

pub use orchestrator::{BookAppointmentUseCase, BookingOutcome};
pub use ports::{EventSink, ReservationClient};
