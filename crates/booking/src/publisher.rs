//! Best-effort delivery of appointment events to the fanout exchange.

use medbook_broker::{BrokerConnector, RetryPolicy};
use medbook_core::AppointmentEvent;
use std::sync::Arc;

use crate::application::EventSink;
use crate::error::PublishError;

pub use medbook_core::APPOINTMENT_EXCHANGE;

/// Publishes appointment events: connect with bounded retry, declare the
/// exchange (idempotent), publish one JSON copy.
///
/// There is no outbox and no local durability: if the broker stays
/// unreachable past the retry budget, the event is dropped and the loss is
/// logged. The booking response has already been committed by then.
#[derive(Clone)]
pub struct AppointmentPublisher {
    connector: Arc<dyn BrokerConnector>,
    retry: RetryPolicy,
}

impl AppointmentPublisher {
    pub fn new(connector: Arc<dyn BrokerConnector>, retry: RetryPolicy) -> Self {
        AppointmentPublisher { connector, retry }
    }

    /// Deliver one event to the exchange.
    pub async fn publish(&self, event: &AppointmentEvent) -> Result<(), PublishError> {
        let broker = self
            .retry
            .run(|| self.connector.connect())
            .await
            .map_err(PublishError::Connect)?;

        broker.declare_exchange(APPOINTMENT_EXCHANGE);

        let payload = serde_json::to_vec(event)?;
        let copies = broker
            .publish(APPOINTMENT_EXCHANGE, payload)
            .map_err(PublishError::Broker)?;

        tracing::info!(appointment_id = %event.id, copies, "appointment event published");
        Ok(())
    }
}

impl EventSink for AppointmentPublisher {
    /// Spawn the publish in the background; failures are logged, never
    /// propagated.
    fn dispatch(&self, event: AppointmentEvent) {
        let publisher = self.clone();
        tokio::spawn(async move {
            if let Err(err) = publisher.publish(&event).await {
                tracing::error!(
                    appointment_id = %event.id,
                    "failed to publish appointment event: {err}"
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use medbook_broker::{BrokerError, FanoutBroker, FlakyConnector, InProcessConnector};
    use medbook_core::{BookingRequest, DoctorId, ReservationGrant};
    use std::time::Duration;

    struct DownConnector;

    #[async_trait]
    impl BrokerConnector for DownConnector {
        async fn connect(&self) -> Result<FanoutBroker, BrokerError> {
            Err(BrokerError::Unreachable("connection refused".to_string()))
        }
    }

    fn event() -> AppointmentEvent {
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
        AppointmentEvent::from_grant(&request, &grant, chrono::Utc::now())
    }

    fn broker_with_queue() -> FanoutBroker {
        let broker = FanoutBroker::new();
        broker.declare_exchange(APPOINTMENT_EXCHANGE);
        broker.declare_queue("records");
        broker.bind_queue("records", APPOINTMENT_EXCHANGE).unwrap();
        broker
    }

    #[tokio::test]
    async fn publishes_a_parseable_json_copy() {
        let broker = broker_with_queue();
        let publisher = AppointmentPublisher::new(
            Arc::new(InProcessConnector::new(broker.clone())),
            RetryPolicy::default(),
        );

        let event = event();
        publisher.publish(&event).await.unwrap();

        let mut consumer = broker.consume("records").unwrap();
        let delivery = consumer.recv().await;
        let decoded: AppointmentEvent = serde_json::from_slice(delivery.payload()).unwrap();
        assert_eq!(decoded, event);
        delivery.ack();
    }

    #[tokio::test(start_paused = true)]
    async fn reconnects_within_the_retry_budget() {
        let broker = broker_with_queue();
        let publisher = AppointmentPublisher::new(
            Arc::new(FlakyConnector::new(broker.clone(), 2)),
            RetryPolicy::new(5, Duration::from_secs(5)),
        );

        let start = tokio::time::Instant::now();
        publisher.publish(&event()).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(10));
        assert_eq!(broker.queue_depth("records"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_the_retry_budget() {
        let publisher = AppointmentPublisher::new(
            Arc::new(DownConnector),
            RetryPolicy::new(3, Duration::from_secs(5)),
        );

        let start = tokio::time::Instant::now();
        let err = publisher.publish(&event()).await.unwrap_err();

        assert!(matches!(err, PublishError::Connect(_)));
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn dispatch_delivers_in_the_background() {
        let broker = broker_with_queue();
        let publisher = AppointmentPublisher::new(
            Arc::new(InProcessConnector::new(broker.clone())),
            RetryPolicy::default(),
        );

        publisher.dispatch(event());

        // Poll until the spawned publish lands.
        for _ in 0..100 {
            if broker.queue_depth("records") == 1 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("dispatched event never reached the queue");
    }

    #[tokio::test]
    async fn dispatch_with_broker_down_returns_immediately() {
        let publisher = AppointmentPublisher::new(
            Arc::new(DownConnector),
            RetryPolicy::new(5, Duration::from_secs(5)),
        );

        // Must not block on the retry loop and must not panic.
        publisher.dispatch(event());
    }
}
