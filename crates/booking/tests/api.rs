//! Integration tests for the appointment service REST API.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use medbook_booking::{
    AppState, AppointmentPublisher, BookAppointmentUseCase, EventSink, ReservationClient,
    ReservationError, create_router,
};
use medbook_broker::{BrokerConnector, BrokerError, FanoutBroker, RetryPolicy};
use medbook_core::{
    AppointmentEvent, DenialReason, DoctorId, ReservationGrant, ReservationOutcome, SystemClock,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceExt;

enum Behavior {
    Grant,
    NoSlots,
    Unknown,
    Unreachable,
}

struct StubReservation(Behavior);

#[async_trait]
impl ReservationClient for StubReservation {
    async fn reserve(
        &self,
        doctor_id: &DoctorId,
        _slots: u32,
    ) -> Result<ReservationOutcome, ReservationError> {
        match self.0 {
            Behavior::Grant => Ok(ReservationOutcome::Granted(ReservationGrant {
                doctor_id: doctor_id.clone(),
                doctor_name: "Dr. Jane Doe".to_string(),
                slots_remaining: 2,
            })),
            Behavior::NoSlots => Ok(ReservationOutcome::Denied(DenialReason::no_slots_for(
                "Dr. Jane Doe",
            ))),
            Behavior::Unknown => Ok(ReservationOutcome::Denied(DenialReason::UnknownDoctor)),
            Behavior::Unreachable => Err(ReservationError::Transport(
                "connection refused".to_string(),
            )),
        }
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn dispatch(&self, _event: AppointmentEvent) {}
}

fn app_with<S: EventSink + 'static>(behavior: Behavior, sink: S) -> Router {
    let use_case = BookAppointmentUseCase::new(
        Arc::new(StubReservation(behavior)),
        Arc::new(sink),
        Arc::new(SystemClock),
    );
    create_router(Arc::new(AppState { use_case }))
}

fn booking_body() -> Value {
    json!({
        "patient_name": "Alice Example",
        "patient_email": "alice@example.com",
        "doctor_id": "D002",
        "reason": "Annual check-up"
    })
}

async fn post_booking(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/appointments")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn confirmed_booking_is_201_with_confirmation_message() {
    let (status, body) = post_booking(app_with(Behavior::Grant, NullSink), booking_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["message"], "Appointment confirmed with Dr. Jane Doe");
    assert!(!body["appointment_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_field_is_400() {
    let mut body = booking_body();
    body.as_object_mut().unwrap().remove("patient_email");

    let (status, body) = post_booking(app_with(Behavior::Grant, NullSink), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("patient_email")
    );
}

#[tokio::test]
async fn unknown_doctor_is_404() {
    let (status, body) = post_booking(app_with(Behavior::Unknown, NullSink), booking_body()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("D002"));
}

#[tokio::test]
async fn capacity_rejection_is_409_with_verbatim_reason() {
    let (status, body) = post_booking(app_with(Behavior::NoSlots, NullSink), booking_body()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "rejected");
    assert_eq!(body["reason"], "Dr. Jane Doe has no available slots");
}

#[tokio::test]
async fn unreachable_doctor_service_is_500_with_generic_error() {
    let (status, body) =
        post_booking(app_with(Behavior::Unreachable, NullSink), booking_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Doctor service error");
}

struct DownConnector;

#[async_trait]
impl BrokerConnector for DownConnector {
    async fn connect(&self) -> Result<FanoutBroker, BrokerError> {
        Err(BrokerError::Unreachable("connection refused".to_string()))
    }
}

// Broker downtime must not leak into the booking response: the reservation
// is already committed and the 201 returns without waiting on the retry
// loop.
#[tokio::test]
async fn broker_downtime_does_not_delay_or_change_the_response() {
    let publisher = AppointmentPublisher::new(
        Arc::new(DownConnector),
        RetryPolicy::new(5, Duration::from_secs(5)),
    );
    let app = app_with(Behavior::Grant, publisher);

    let start = Instant::now();
    let (status, body) = post_booking(app, booking_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "confirmed");
    assert!(
        start.elapsed() < Duration::from_secs(1),
        "response must not wait on the publish retry budget"
    );
}
