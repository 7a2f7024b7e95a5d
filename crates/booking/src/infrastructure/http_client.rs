//! HTTP adapter of the reservation port to the doctor service.

use async_trait::async_trait;
use medbook_core::{DenialReason, DoctorId, ReservationGrant, ReservationOutcome};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::ReservationClient;
use crate::error::ReservationError;

pub struct HttpReservationClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpReservationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpReservationClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

#[derive(Serialize)]
struct ReserveBody {
    slots: u32,
}

#[derive(Deserialize)]
struct GrantedBody {
    success: bool,
    doctor_id: String,
    doctor_name: String,
    slots_remaining: u32,
}

#[derive(Deserialize)]
struct DeniedBody {
    reason: String,
}

#[async_trait]
impl ReservationClient for HttpReservationClient {
    /// One POST, one ledger call. No retry on any failure: a transport
    /// error after the ledger decremented would double-book on retry.
    async fn reserve(
        &self,
        doctor_id: &DoctorId,
        slots: u32,
    ) -> Result<ReservationOutcome, ReservationError> {
        let url = format!("{}/doctors/{}/reserve", self.base_url, doctor_id);
        tracing::debug!(%url, "calling doctor service");

        let response = self
            .http
            .post(&url)
            .json(&ReserveBody { slots })
            .send()
            .await
            .map_err(|e| ReservationError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let body: GrantedBody = response
                    .json()
                    .await
                    .map_err(|e| ReservationError::Malformed(e.to_string()))?;
                if !body.success {
                    return Err(ReservationError::Malformed(
                        "200 response with success=false".to_string(),
                    ));
                }
                let doctor_id = DoctorId::new(body.doctor_id)
                    .map_err(|e| ReservationError::Malformed(e.to_string()))?;
                Ok(ReservationOutcome::Granted(ReservationGrant {
                    doctor_id,
                    doctor_name: body.doctor_name,
                    slots_remaining: body.slots_remaining,
                }))
            }
            StatusCode::NOT_FOUND => Ok(ReservationOutcome::Denied(DenialReason::UnknownDoctor)),
            StatusCode::CONFLICT => {
                let body: DeniedBody = response
                    .json()
                    .await
                    .map_err(|e| ReservationError::Malformed(e.to_string()))?;
                Ok(ReservationOutcome::Denied(DenialReason::NoSlots {
                    reason: body.reason,
                }))
            }
            status => Err(ReservationError::Malformed(format!(
                "unexpected status {status}"
            ))),
        }
    }
}
