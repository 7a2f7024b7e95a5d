use medbook_core::Doctor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct DoctorResponse {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub slots: u32,
}

impl From<&Doctor> for DoctorResponse {
    fn from(doctor: &Doctor) -> Self {
        DoctorResponse {
            id: doctor.id.to_string(),
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            slots: doctor.slots,
        }
    }
}

/// Body of `POST /doctors/{id}/reserve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReserveRequest {
    pub slots: u32,
}

/// Successful reservation: the decrement is already committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveGranted {
    pub success: bool,
    pub doctor_id: String,
    pub doctor_name: String,
    pub slots_remaining: u32,
}

/// Denied reservation (409 body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveDenied {
    pub success: bool,
    pub reason: String,
}

/// Generic message body (404 and 400).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
