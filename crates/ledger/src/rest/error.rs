use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medbook_core::DenialReason;

use crate::error::LedgerError;
use crate::rest::dto::{MessageBody, ReserveDenied};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// 404 with a `{message}` body.
    NotFound { message: String },
    /// 409 with a `{success: false, reason}` body.
    Conflict { reason: String },
    /// 400 with a `{message}` body.
    BadRequest { message: String },
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        ApiError::Conflict {
            reason: reason.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::DoctorNotFound(_) => ApiError::not_found("Doctor not found"),
            LedgerError::NoSlots(name) => {
                ApiError::conflict(DenialReason::no_slots_for(&name).to_string())
            }
            LedgerError::InvalidCount => ApiError::bad_request(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }
            ApiError::Conflict { reason } => (
                StatusCode::CONFLICT,
                Json(ReserveDenied {
                    success: false,
                    reason,
                }),
            )
                .into_response(),
            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, Json(MessageBody { message })).into_response()
            }
        }
    }
}
