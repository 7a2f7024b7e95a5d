//! Notification consumer: simulated confirmation emails.

use medbook_broker::{BrokerError, Delivery, FanoutBroker};
use medbook_core::AppointmentEvent;

pub const NOTIFICATIONS_QUEUE: &str = "notifications";

/// Consumes appointment events and "sends" a confirmation email by logging
/// it. Redelivered events are re-sent; a duplicate email is acceptable,
/// a missing one is not.
pub struct NotificationConsumer;

impl NotificationConsumer {
    /// Process one delivery: parse, notify, settle.
    pub fn handle(delivery: Delivery) {
        match serde_json::from_slice::<AppointmentEvent>(delivery.payload()) {
            Ok(event) => {
                tracing::info!(
                    appointment_id = %event.id,
                    patient_email = %event.patient_email,
                    doctor = %event.doctor_name,
                    reason = %event.reason,
                    redelivered = delivery.redelivered(),
                    "sending appointment confirmation email"
                );
                delivery.ack();
            }
            Err(err) => {
                tracing::warn!("discarding unparseable notification message: {err}");
                delivery.reject();
            }
        }
    }

    /// Bind the notifications queue and process deliveries until the
    /// process exits.
    pub async fn run(broker: FanoutBroker) -> Result<(), BrokerError> {
        let mut consumer = crate::attach(&broker, NOTIFICATIONS_QUEUE)?;
        tracing::info!(queue = NOTIFICATIONS_QUEUE, "notification consumer ready");
        loop {
            let delivery = consumer.recv().await;
            Self::handle(delivery);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medbook_core::{APPOINTMENT_EXCHANGE, AppointmentEvent, BookingRequest, DoctorId, ReservationGrant};

    fn event_json() -> Vec<u8> {
        let request = BookingRequest {
            patient_name: "Alice Example".to_string(),
            patient_email: "alice@example.com".to_string(),
            doctor_id: "D002".to_string(),
            reason: "Annual check-up".to_string(),
        };
        let grant = ReservationGrant {
            doctor_id: DoctorId::new("D002").unwrap(),
            doctor_name: "Dr. Jane Doe".to_string(),
            slots_remaining: 2,
        };
        let event = AppointmentEvent::from_grant(&request, &grant, chrono::Utc::now());
        serde_json::to_vec(&event).unwrap()
    }

    #[tokio::test]
    async fn acks_a_valid_event() {
        let broker = FanoutBroker::new();
        let mut consumer = crate::attach(&broker, NOTIFICATIONS_QUEUE).unwrap();
        broker.publish(APPOINTMENT_EXCHANGE, event_json()).unwrap();

        NotificationConsumer::handle(consumer.recv().await);
        assert_eq!(broker.queue_depth(NOTIFICATIONS_QUEUE), 0);
    }

    #[tokio::test]
    async fn rejects_garbage_without_requeueing() {
        let broker = FanoutBroker::new();
        let mut consumer = crate::attach(&broker, NOTIFICATIONS_QUEUE).unwrap();
        broker
            .publish(APPOINTMENT_EXCHANGE, b"not json".to_vec())
            .unwrap();

        NotificationConsumer::handle(consumer.recv().await);
        assert_eq!(broker.queue_depth(NOTIFICATIONS_QUEUE), 0);

        // A rejected message must not block the next one.
        broker.publish(APPOINTMENT_EXCHANGE, event_json()).unwrap();
        let next = consumer.recv().await;
        assert!(!next.redelivered());
        next.ack();
    }
}
