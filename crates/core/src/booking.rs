use serde::{Deserialize, Serialize};

/// A client's request to book an appointment.
///
/// Transient: exists only for the duration of one orchestration call. All
/// four fields are required; `missing_fields` reports the empty ones so the
/// orchestrator can reject the request before any reservation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub patient_name: String,
    pub patient_email: String,
    pub doctor_id: String,
    pub reason: String,
}

impl BookingRequest {
    /// Names of required fields that are missing or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.patient_name.trim().is_empty() {
            missing.push("patient_name");
        }
        if self.patient_email.trim().is_empty() {
            missing.push("patient_email");
        }
        if self.doctor_id.trim().is_empty() {
            missing.push("doctor_id");
        }
        if self.reason.trim().is_empty() {
            missing.push("reason");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            patient_name: "Alice Example".to_string(),
            patient_email: "alice@example.com".to_string(),
            doctor_id: "D002".to_string(),
            reason: "Annual check-up".to_string(),
        }
    }

    #[test]
    fn complete_request_has_no_missing_fields() {
        assert!(request().missing_fields().is_empty());
    }

    #[test]
    fn each_empty_field_is_reported() {
        let mut req = request();
        req.patient_email.clear();
        req.reason = "   ".to_string();
        assert_eq!(req.missing_fields(), vec!["patient_email", "reason"]);
    }
}
