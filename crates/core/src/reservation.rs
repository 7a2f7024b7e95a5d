use serde::{Deserialize, Serialize};
use std::fmt;

use crate::doctor::DoctorId;

/// Result of one reservation attempt against the slot ledger.
///
/// Produced once per booking request and consumed once by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationOutcome {
    Granted(ReservationGrant),
    Denied(DenialReason),
}

/// A committed reservation: one slot has already been decremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationGrant {
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    pub slots_remaining: u32,
}

/// Why a reservation was denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// The doctor id does not reference any known doctor.
    UnknownDoctor,
    /// The doctor exists but has no remaining capacity.
    NoSlots { reason: String },
}

impl DenialReason {
    /// Canonical out-of-capacity reason for a doctor, by display name.
    pub fn no_slots_for(doctor_name: &str) -> Self {
        DenialReason::NoSlots {
            reason: format!("{doctor_name} has no available slots"),
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::UnknownDoctor => write!(f, "Doctor not found"),
            DenialReason::NoSlots { reason } => write!(f, "{reason}"),
        }
    }
}
