//! Authoritative slot counts with an atomic reserve operation.

use dashmap::DashMap;
use medbook_core::{Doctor, DoctorId, ReservationGrant};

use crate::error::{LedgerError, Result};

/// Concurrency-safe capacity ledger for the doctor roster.
///
/// Capacity is mutated only through [`SlotLedger::reserve`]. The
/// check-and-decrement runs while holding the map entry's write lock, so
/// concurrent reservations for the same doctor serialize: with one slot
/// left, exactly one caller wins.
pub struct SlotLedger {
    doctors: DashMap<DoctorId, Doctor>,
}

impl SlotLedger {
    pub fn new() -> Self {
        SlotLedger {
            doctors: DashMap::new(),
        }
    }

    /// Build a ledger pre-populated with a roster.
    pub fn seeded(roster: Vec<Doctor>) -> Self {
        let ledger = Self::new();
        for doctor in roster {
            ledger.doctors.insert(doctor.id.clone(), doctor);
        }
        ledger
    }

    /// All doctors, in no particular order.
    pub fn list(&self) -> Vec<Doctor> {
        self.doctors.iter().map(|e| e.value().clone()).collect()
    }

    pub fn get(&self, id: &DoctorId) -> Option<Doctor> {
        self.doctors.get(id).map(|e| e.value().clone())
    }

    /// Atomically reserve `count` slots for a doctor.
    ///
    /// On success the decrement is committed before this returns. Denials
    /// leave capacity untouched.
    pub fn reserve(&self, id: &DoctorId, count: u32) -> Result<ReservationGrant> {
        if count == 0 {
            return Err(LedgerError::InvalidCount);
        }

        // get_mut holds the shard write lock for the whole check-and-decrement.
        let mut entry = self
            .doctors
            .get_mut(id)
            .ok_or_else(|| LedgerError::DoctorNotFound(id.to_string()))?;

        if entry.slots < count {
            return Err(LedgerError::NoSlots(entry.name.clone()));
        }

        entry.slots -= count;
        let grant = ReservationGrant {
            doctor_id: entry.id.clone(),
            doctor_name: entry.name.clone(),
            slots_remaining: entry.slots,
        };
        tracing::info!(
            doctor_id = %grant.doctor_id,
            slots_remaining = grant.slots_remaining,
            "reserved {count} slot(s)"
        );
        Ok(grant)
    }
}

impl Default for SlotLedger {
    fn default() -> Self {
        Self::new()
    }
}
