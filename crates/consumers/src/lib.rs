//! Medbook Consumers
//!
//! The two downstream services fed by the appointment fanout: the
//! notification sender and the medical-records writer. Each owns one queue
//! bound to the shared exchange, takes one delivery at a time, and settles
//! it explicitly. A message that cannot be parsed is logged and rejected;
//! there is no dead-letter queue.
//!
//! Delivery is at-least-once, so both consumers tolerate redelivered
//! messages: notifications simply re-send, records can deduplicate by
//! appointment id (see [`DedupPolicy`]).

pub mod notification;
pub mod records;

pub use notification::{NOTIFICATIONS_QUEUE, NotificationConsumer};
pub use records::{DedupPolicy, RECORDS_QUEUE, RecordEntry, RecordStore, RecordsConsumer};

use medbook_broker::{BrokerError, Consumer, FanoutBroker};
use medbook_core::APPOINTMENT_EXCHANGE;

/// Declare the appointment exchange and a consumer queue, bind them, and
/// attach a consumer.
///
/// Every consumer calls this on startup; declares are idempotent, so the
/// order services come up in does not matter.
pub fn attach(broker: &FanoutBroker, queue: &str) -> Result<Consumer, BrokerError> {
    broker.declare_exchange(APPOINTMENT_EXCHANGE);
    broker.declare_queue(queue);
    broker.bind_queue(queue, APPOINTMENT_EXCHANGE)?;
    broker.consume(queue)
}
