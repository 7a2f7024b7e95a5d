use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::Timestamp;
use crate::booking::BookingRequest;
use crate::doctor::DoctorId;
use crate::reservation::ReservationGrant;

/// Fanout exchange carrying appointment events, shared by the publisher and
/// every consumer.
pub const APPOINTMENT_EXCHANGE: &str = "appts";

/// Globally unique identifier for an appointment, generated at grant time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(Uuid);

impl AppointmentId {
    pub fn new() -> Self {
        AppointmentId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The confirmed-appointment event fanned out to downstream consumers.
///
/// Immutable once constructed: the orchestrator creates it and every hop
/// after that receives its own copy. The wire format is a JSON object with
/// these exact snake_case keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentEvent {
    pub id: AppointmentId,
    pub patient_name: String,
    pub patient_email: String,
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    pub reason: String,
    pub created_at: Timestamp,
}

impl AppointmentEvent {
    /// Build the event for a granted reservation, copying request fields.
    pub fn from_grant(
        request: &BookingRequest,
        grant: &ReservationGrant,
        created_at: Timestamp,
    ) -> Self {
        AppointmentEvent {
            id: AppointmentId::new(),
            patient_name: request.patient_name.clone(),
            patient_email: request.patient_email.clone(),
            doctor_id: grant.doctor_id.clone(),
            doctor_name: grant.doctor_name.clone(),
            reason: request.reason.clone(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn grant() -> ReservationGrant {
        ReservationGrant {
            doctor_id: DoctorId::new("D002").unwrap(),
            doctor_name: "Dr. Jane Doe".to_string(),
            slots_remaining: 2,
        }
    }

    fn request() -> BookingRequest {
        BookingRequest {
            patient_name: "Alice Example".to_string(),
            patient_email: "alice@example.com".to_string(),
            doctor_id: "D002".to_string(),
            reason: "Annual check-up".to_string(),
        }
    }

    #[test]
    fn event_copies_request_and_grant_fields() {
        let now = Utc::now();
        let event = AppointmentEvent::from_grant(&request(), &grant(), now);
        assert_eq!(event.patient_email, "alice@example.com");
        assert_eq!(event.doctor_name, "Dr. Jane Doe");
        assert_eq!(event.created_at, now);
    }

    #[test]
    fn event_ids_are_unique() {
        let now = Utc::now();
        let a = AppointmentEvent::from_grant(&request(), &grant(), now);
        let b = AppointmentEvent::from_grant(&request(), &grant(), now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn wire_format_uses_snake_case_keys_and_iso8601() {
        let event = AppointmentEvent::from_grant(&request(), &grant(), Utc::now());
        let json = serde_json::to_value(&event).unwrap();
        assert!(json["id"].is_string());
        assert_eq!(json["doctor_id"], "D002");
        assert_eq!(json["patient_name"], "Alice Example");
        // chrono serializes DateTime<Utc> as an RFC 3339 / ISO-8601 string
        assert!(json["created_at"].as_str().unwrap().contains('T'));

        let back: AppointmentEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
