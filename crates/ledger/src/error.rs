use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("{0} has no available slots")]
    NoSlots(String),

    #[error("Reservation count must be a positive integer")]
    InvalidCount,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
