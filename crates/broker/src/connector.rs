//! Connection seam between publishers and the broker.
//!
//! Mirrors the transport-trait approach used for the rest of the system:
//! production wiring hands out [`InProcessConnector`], while tests exercise
//! connect failures with their own implementations. A networked AMQP
//! backend would slot in here.

use async_trait::async_trait;

use crate::error::{BrokerError, Result};
use crate::exchange::FanoutBroker;

#[async_trait]
pub trait BrokerConnector: Send + Sync {
    /// Establish a connection to the broker.
    async fn connect(&self) -> Result<FanoutBroker>;
}

/// Connector for a broker living in the same process; never fails.
pub struct InProcessConnector {
    broker: FanoutBroker,
}

impl InProcessConnector {
    pub fn new(broker: FanoutBroker) -> Self {
        InProcessConnector { broker }
    }
}

#[async_trait]
impl BrokerConnector for InProcessConnector {
    async fn connect(&self) -> Result<FanoutBroker> {
        Ok(self.broker.clone())
    }
}

/// Connector that fails a fixed number of times before succeeding.
///
/// Used by publisher tests to drive the retry path; kept here so every
/// service crate can simulate broker downtime the same way.
pub struct FlakyConnector {
    broker: FanoutBroker,
    failures_left: std::sync::atomic::AtomicU32,
}

impl FlakyConnector {
    pub fn new(broker: FanoutBroker, failures: u32) -> Self {
        FlakyConnector {
            broker,
            failures_left: std::sync::atomic::AtomicU32::new(failures),
        }
    }
}

#[async_trait]
impl BrokerConnector for FlakyConnector {
    async fn connect(&self) -> Result<FanoutBroker> {
        use std::sync::atomic::Ordering;
        let left = self.failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::SeqCst);
            return Err(BrokerError::Unreachable("connection refused".to_string()));
        }
        Ok(self.broker.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_process_connector_always_succeeds() {
        let connector = InProcessConnector::new(FanoutBroker::new());
        assert!(connector.connect().await.is_ok());
    }

    #[tokio::test]
    async fn flaky_connector_recovers_after_failures() {
        let connector = FlakyConnector::new(FanoutBroker::new(), 2);
        assert!(connector.connect().await.is_err());
        assert!(connector.connect().await.is_err());
        assert!(connector.connect().await.is_ok());
    }
}
