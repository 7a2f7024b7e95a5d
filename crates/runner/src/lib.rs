//! Medbook Runner - Single-Process Clinic
//!
//! Wires every medbook service into one process for local runs and
//! end-to-end tests:
//!
//! - **Doctor service**: the slot ledger behind its REST API
//! - **Appointment service**: the booking orchestrator and publisher
//! - **Broker**: one shared in-process fanout broker
//! - **Consumers**: the notification and records services
//!
//! ## Architecture
//!
//! ```text
//!   POST /appointments            POST /doctors/{id}/reserve
//!          │                                │
//!          ▼                                ▼
//! ┌──────────────────┐  reserve   ┌──────────────────┐
//! │   Appointment    ├───────────►│   Doctor service │
//! │   service        │            │   (slot ledger)  │
//! └────────┬─────────┘            └──────────────────┘
//!          │ appointment events
//!          ▼
//! ┌──────────────────┐
//! │  Fanout broker   │
//! │  exchange "appts"│
//! └───┬──────────┬───┘
//!     │          │
//!     ▼          ▼
//! notifications  records
//! ```
//!
//! The booking crate ships an HTTP reservation client for split
//! deployments; in-process the runner wires [`LocalReservationClient`]
//! straight onto the ledger instead.

pub mod local;

pub use local::LocalReservationClient;

use medbook_booking::{AppointmentPublisher, BookingConfig, BookingService};
use medbook_broker::{BrokerError, FanoutBroker, InProcessConnector};
use medbook_consumers::{
    DedupPolicy, NOTIFICATIONS_QUEUE, NotificationConsumer, RECORDS_QUEUE, RecordStore,
    RecordsConsumer,
};
use medbook_core::APPOINTMENT_EXCHANGE;
use medbook_ledger::{DoctorService, LedgerConfig};
use std::sync::Arc;

/// The whole clinic, wired against one shared broker.
pub struct App {
    pub doctors: DoctorService,
    pub booking: BookingService<LocalReservationClient, AppointmentPublisher>,
    pub broker: FanoutBroker,
    pub records: Arc<RecordStore>,
}

impl App {
    /// Wire every service.
    ///
    /// The broker topology is declared up front so events published before
    /// the consumers start are retained in their queues.
    pub fn build(
        ledger_config: LedgerConfig,
        booking_config: BookingConfig,
    ) -> Result<Self, BrokerError> {
        let broker = FanoutBroker::new();
        broker.declare_exchange(APPOINTMENT_EXCHANGE);
        for queue in [NOTIFICATIONS_QUEUE, RECORDS_QUEUE] {
            broker.declare_queue(queue);
            broker.bind_queue(queue, APPOINTMENT_EXCHANGE)?;
        }

        let doctors = DoctorService::new(ledger_config);

        let reservation = Arc::new(LocalReservationClient::new(Arc::clone(&doctors.ledger)));
        let publisher = AppointmentPublisher::new(
            Arc::new(InProcessConnector::new(broker.clone())),
            booking_config.publish_retry,
        );
        let booking = BookingService::new(booking_config, reservation, Arc::new(publisher));

        let records = Arc::new(RecordStore::new(DedupPolicy::AtLeastOnce));

        Ok(App {
            doctors,
            booking,
            broker,
            records,
        })
    }

    /// Spawn both consumers against the shared broker.
    pub fn spawn_consumers(&self) {
        let notification_broker = self.broker.clone();
        tokio::spawn(async move {
            if let Err(err) = NotificationConsumer::run(notification_broker).await {
                tracing::error!("notification consumer stopped: {err}");
            }
        });

        let records_consumer = RecordsConsumer::new(Arc::clone(&self.records));
        let records_broker = self.broker.clone();
        tokio::spawn(async move {
            if let Err(err) = records_consumer.run(records_broker).await {
                tracing::error!("records consumer stopped: {err}");
            }
        });
    }

    /// Start the consumers and serve both REST APIs until the process
    /// exits.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        self.spawn_consumers();
        let App {
            doctors, booking, ..
        } = self;
        tokio::try_join!(doctors.run(), booking.run())?;
        Ok(())
    }
}
