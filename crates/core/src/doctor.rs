use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable external identifier for a doctor (e.g. `D002`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(String);

impl DoctorId {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let s: String = value.into();
        if s.is_empty() {
            return Err("Doctor id cannot be empty");
        }
        if s.len() > 16 {
            return Err("Doctor id too long (max 16 chars)");
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("Doctor id must be alphanumeric");
        }
        Ok(DoctorId(s.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DoctorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for DoctorId {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DoctorId::new(value)
    }
}

impl TryFrom<String> for DoctorId {
    type Error = &'static str;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        DoctorId::new(value)
    }
}

/// A reservable doctor with remaining appointment capacity.
///
/// `slots` is only ever decremented through the ledger's atomic reserve
/// operation; the `u32` representation makes a negative count unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub slots: u32,
}

impl Doctor {
    pub fn new(
        id: impl TryInto<DoctorId, Error = &'static str>,
        name: impl Into<String>,
        specialty: impl Into<String>,
        slots: u32,
    ) -> Result<Self, &'static str> {
        Ok(Doctor {
            id: id.try_into()?,
            name: name.into(),
            specialty: specialty.into(),
            slots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_id_normalizes_to_uppercase() {
        let id = DoctorId::new("d002").unwrap();
        assert_eq!(id.as_str(), "D002");
    }

    #[test]
    fn doctor_id_rejects_empty() {
        assert!(DoctorId::new("").is_err());
    }

    #[test]
    fn doctor_id_rejects_non_alphanumeric() {
        assert!(DoctorId::new("D-002").is_err());
        assert!(DoctorId::new("D 002").is_err());
    }

    #[test]
    fn doctor_id_rejects_overlong() {
        assert!(DoctorId::new("D".repeat(17)).is_err());
    }

    #[test]
    fn doctor_serializes_with_plain_id() {
        let doctor = Doctor::new("D001", "Dr. Sample Name", "Cardiology", 5).unwrap();
        let json = serde_json::to_value(&doctor).unwrap();
        assert_eq!(json["id"], "D001");
        assert_eq!(json["slots"], 5);
    }
}
