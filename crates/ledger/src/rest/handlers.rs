use axum::{
    Json,
    extract::{Path, State},
};
use medbook_core::DoctorId;
use std::sync::Arc;

use crate::rest::dto::*;
use crate::rest::{ApiError, AppState};

/// GET /doctors
pub async fn list_doctors(State(state): State<Arc<AppState>>) -> Json<Vec<DoctorResponse>> {
    let mut doctors: Vec<DoctorResponse> =
        state.ledger.list().iter().map(DoctorResponse::from).collect();
    doctors.sort_by(|a, b| a.id.cmp(&b.id));
    Json(doctors)
}

/// GET /doctors/{id}
pub async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DoctorResponse>, ApiError> {
    let id = DoctorId::new(id).map_err(|_| ApiError::not_found("Doctor not found"))?;
    state
        .ledger
        .get(&id)
        .map(|d| Json(DoctorResponse::from(&d)))
        .ok_or_else(|| ApiError::not_found("Doctor not found"))
}

/// POST /doctors/{id}/reserve
///
/// Exactly one ledger call per request; a denial is returned to the caller
/// as-is rather than retried.
pub async fn reserve(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ReserveRequest>,
) -> Result<Json<ReserveGranted>, ApiError> {
    let id = DoctorId::new(id).map_err(|_| ApiError::not_found("Doctor not found"))?;

    let grant = state.ledger.reserve(&id, req.slots)?;
    Ok(Json(ReserveGranted {
        success: true,
        doctor_id: grant.doctor_id.to_string(),
        doctor_name: grant.doctor_name,
        slots_remaining: grant.slots_remaining,
    }))
}
