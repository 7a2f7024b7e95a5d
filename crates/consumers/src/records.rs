//! Medical-records consumer: appends confirmed appointments to a patient
//! record store.

use medbook_broker::{BrokerError, Delivery, FanoutBroker};
use medbook_core::{AppointmentEvent, AppointmentId, Timestamp};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub const RECORDS_QUEUE: &str = "records";

/// One line in a patient's medical record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub appointment_id: AppointmentId,
    pub patient_name: String,
    pub doctor_name: String,
    pub reason: String,
    pub created_at: Timestamp,
}

impl From<AppointmentEvent> for RecordEntry {
    fn from(event: AppointmentEvent) -> Self {
        RecordEntry {
            appointment_id: event.id,
            patient_name: event.patient_name,
            doctor_name: event.doctor_name,
            reason: event.reason,
            created_at: event.created_at,
        }
    }
}

/// How the store treats a redelivered event.
///
/// `AtLeastOnce` mirrors the broker contract: a redelivery produces a
/// second entry. `DedupByEventId` suppresses entries whose appointment id
/// was already recorded, making the record effectively exactly-once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupPolicy {
    #[default]
    AtLeastOnce,
    DedupByEventId,
}

#[derive(Default)]
struct StoreState {
    entries: Vec<RecordEntry>,
    seen: HashSet<AppointmentId>,
}

/// Append-only record store shared between the consumer and readers.
pub struct RecordStore {
    policy: DedupPolicy,
    state: Mutex<StoreState>,
}

impl RecordStore {
    pub fn new(policy: DedupPolicy) -> Self {
        RecordStore {
            policy,
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Append an entry; returns false if the dedup policy suppressed it.
    pub fn append(&self, entry: RecordEntry) -> bool {
        let mut state = self.state.lock().expect("record store lock poisoned");
        if self.policy == DedupPolicy::DedupByEventId
            && !state.seen.insert(entry.appointment_id)
        {
            return false;
        }
        state.entries.push(entry);
        true
    }

    pub fn len(&self) -> usize {
        self.state
            .lock()
            .expect("record store lock poisoned")
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries appended at or after `offset`, for incremental readers.
    pub fn since(&self, offset: usize) -> Vec<RecordEntry> {
        let state = self.state.lock().expect("record store lock poisoned");
        state.entries.get(offset..).unwrap_or_default().to_vec()
    }
}

/// Consumes appointment events and appends them to the record store.
pub struct RecordsConsumer {
    store: Arc<RecordStore>,
}

impl RecordsConsumer {
    pub fn new(store: Arc<RecordStore>) -> Self {
        RecordsConsumer { store }
    }

    pub fn store(&self) -> Arc<RecordStore> {
        Arc::clone(&self.store)
    }

    /// Process one delivery: parse, append, settle.
    pub fn handle(&self, delivery: Delivery) {
        match serde_json::from_slice::<AppointmentEvent>(delivery.payload()) {
            Ok(event) => {
                let id = event.id;
                if self.store.append(RecordEntry::from(event)) {
                    tracing::info!(
                        appointment_id = %id,
                        total = self.store.len(),
                        "appointment added to medical record"
                    );
                } else {
                    tracing::info!(appointment_id = %id, "duplicate appointment event suppressed");
                }
                delivery.ack();
            }
            Err(err) => {
                tracing::warn!("discarding unparseable record message: {err}");
                delivery.reject();
            }
        }
    }

    /// Bind the records queue and process deliveries until the process
    /// exits.
    pub async fn run(self, broker: FanoutBroker) -> Result<(), BrokerError> {
        let mut consumer = crate::attach(&broker, RECORDS_QUEUE)?;
        tracing::info!(queue = RECORDS_QUEUE, "records consumer ready");
        loop {
            let delivery = consumer.recv().await;
            self.handle(delivery);
        }
    }
}
