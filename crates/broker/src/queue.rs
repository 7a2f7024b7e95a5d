//! Queues with explicit acknowledgment and a single in-flight delivery.
//!
//! The lock is a `std::sync::Mutex` and is never held across an await;
//! waiters park on a `tokio::sync::Notify`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub(crate) struct QueueInner {
    name: String,
    state: Mutex<QueueState>,
    notify: Notify,
}

struct QueueState {
    ready: VecDeque<StoredMessage>,
    /// Whether a delivery is currently out and unsettled (prefetch = 1).
    in_flight: bool,
}

struct StoredMessage {
    payload: Vec<u8>,
    redelivered: bool,
}

impl QueueInner {
    pub(crate) fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(QueueInner {
            name: name.into(),
            state: Mutex::new(QueueState {
                ready: VecDeque::new(),
                in_flight: false,
            }),
            notify: Notify::new(),
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Append a copy of a published message.
    pub(crate) fn enqueue(&self, payload: Vec<u8>) {
        let mut state = self.state.lock().expect("queue lock poisoned");
        state.ready.push_back(StoredMessage {
            payload,
            redelivered: false,
        });
        drop(state);
        self.notify.notify_one();
    }

    /// Number of messages retained and not yet delivered.
    pub(crate) fn depth(&self) -> usize {
        self.state.lock().expect("queue lock poisoned").ready.len()
    }

    /// Take the next message if nothing is in flight.
    fn try_begin_delivery(self: &Arc<Self>) -> Option<Delivery> {
        let mut state = self.state.lock().expect("queue lock poisoned");
        if state.in_flight {
            return None;
        }
        let msg = state.ready.pop_front()?;
        state.in_flight = true;
        Some(Delivery {
            queue: Arc::clone(self),
            payload: msg.payload,
            redelivered: msg.redelivered,
            settled: false,
        })
    }

    /// Settle the in-flight delivery, optionally requeueing it at the head.
    fn complete(&self, requeue: Option<StoredMessage>) {
        let mut state = self.state.lock().expect("queue lock poisoned");
        state.in_flight = false;
        if let Some(msg) = requeue {
            state.ready.push_front(msg);
        }
        drop(state);
        self.notify.notify_one();
    }
}

/// Pulls deliveries off one queue, one at a time.
pub struct Consumer {
    pub(crate) queue: Arc<QueueInner>,
}

impl Consumer {
    /// Wait for the next delivery.
    ///
    /// Blocks while the previous delivery from this queue is unsettled.
    pub async fn recv(&mut self) -> Delivery {
        loop {
            let notified = self.queue.notify.notified();
            tokio::pin!(notified);
            if let Some(delivery) = self.queue.try_begin_delivery() {
                return delivery;
            }
            notified.as_mut().await;
        }
    }

    /// Name of the queue this consumer is attached to.
    pub fn queue_name(&self) -> &str {
        self.queue.name()
    }
}

/// One message handed to a consumer.
///
/// Must be settled with [`Delivery::ack`] (done) or [`Delivery::reject`]
/// (discard). Dropping an unsettled delivery - a consumer crash - requeues
/// the message at the head of the queue, marked redelivered.
pub struct Delivery {
    queue: Arc<QueueInner>,
    payload: Vec<u8>,
    redelivered: bool,
    settled: bool,
}

impl Delivery {
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether this message was delivered before and not acknowledged.
    pub fn redelivered(&self) -> bool {
        self.redelivered
    }

    /// Acknowledge successful processing; the message is done.
    pub fn ack(mut self) {
        self.settled = true;
        self.queue.complete(None);
    }

    /// Discard the message without requeueing (processing failure policy:
    /// log and drop, no dead-lettering).
    pub fn reject(mut self) {
        self.settled = true;
        tracing::debug!(queue = self.queue.name(), "delivery rejected");
        self.queue.complete(None);
    }
}

impl Drop for Delivery {
    fn drop(&mut self) {
        if !self.settled {
            let payload = std::mem::take(&mut self.payload);
            tracing::warn!(
                queue = self.queue.name(),
                "unsettled delivery dropped; requeueing for redelivery"
            );
            self.queue.complete(Some(StoredMessage {
                payload,
                redelivered: true,
            }));
        }
    }
}
