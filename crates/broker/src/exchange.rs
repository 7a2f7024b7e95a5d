//! Fanout exchanges and the broker handle.

use dashmap::DashMap;
use std::sync::Arc;

use crate::error::{BrokerError, Result};
use crate::queue::{Consumer, QueueInner};

#[derive(Default)]
struct ExchangeState {
    /// Names of queues bound to this exchange.
    bindings: Vec<String>,
}

#[derive(Default)]
struct BrokerInner {
    exchanges: DashMap<String, ExchangeState>,
    queues: DashMap<String, Arc<QueueInner>>,
}

/// Cloneable handle to an in-process broker.
///
/// All clones share the same exchanges and queues; declaring an existing
/// exchange or queue is a no-op, matching AMQP declare semantics.
#[derive(Clone, Default)]
pub struct FanoutBroker {
    inner: Arc<BrokerInner>,
}

impl FanoutBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a fanout exchange (idempotent).
    pub fn declare_exchange(&self, name: &str) {
        self.inner
            .exchanges
            .entry(name.to_string())
            .or_default();
    }

    /// Declare a queue (idempotent).
    pub fn declare_queue(&self, name: &str) {
        self.inner
            .queues
            .entry(name.to_string())
            .or_insert_with(|| QueueInner::new(name));
    }

    /// Bind a queue to an exchange so it receives a copy of every message
    /// published there. Idempotent; independent of other bindings.
    pub fn bind_queue(&self, queue: &str, exchange: &str) -> Result<()> {
        if !self.inner.queues.contains_key(queue) {
            return Err(BrokerError::UnknownQueue(queue.to_string()));
        }
        let mut ex = self
            .inner
            .exchanges
            .get_mut(exchange)
            .ok_or_else(|| BrokerError::UnknownExchange(exchange.to_string()))?;
        if !ex.bindings.iter().any(|b| b == queue) {
            ex.bindings.push(queue.to_string());
        }
        Ok(())
    }

    /// Publish one message to an exchange; every bound queue receives its
    /// own copy whether or not a consumer is currently reading it.
    ///
    /// Returns the number of queues the message was copied to.
    pub fn publish(&self, exchange: &str, payload: Vec<u8>) -> Result<usize> {
        let ex = self
            .inner
            .exchanges
            .get(exchange)
            .ok_or_else(|| BrokerError::UnknownExchange(exchange.to_string()))?;

        let mut copies = 0;
        for binding in &ex.bindings {
            if let Some(queue) = self.inner.queues.get(binding) {
                queue.enqueue(payload.clone());
                copies += 1;
            }
        }
        tracing::debug!(exchange, copies, "published message");
        Ok(copies)
    }

    /// Attach a consumer to a declared queue.
    pub fn consume(&self, queue: &str) -> Result<Consumer> {
        let inner = self
            .inner
            .queues
            .get(queue)
            .ok_or_else(|| BrokerError::UnknownQueue(queue.to_string()))?;
        Ok(Consumer {
            queue: Arc::clone(inner.value()),
        })
    }

    /// Messages retained in a queue and not yet delivered.
    pub fn queue_depth(&self, queue: &str) -> usize {
        self.inner
            .queues
            .get(queue)
            .map(|q| q.depth())
            .unwrap_or(0)
    }
}
