//! Medbook Broker
//!
//! An in-process message broker with AMQP-style semantics, scoped to what
//! the booking system needs:
//!
//! - **Fanout exchanges**: every message published to an exchange is copied
//!   to every queue bound to it, independent of consumer readiness.
//! - **Queues with explicit acknowledgment**: at most one delivery is in
//!   flight per queue (prefetch = 1); a delivery dropped without `ack` or
//!   `reject` is requeued at the head and redelivered.
//! - **Connector seam**: publishers reach the broker through the
//!   [`BrokerConnector`] trait, so a networked backend can be swapped in
//!   later without touching publisher or consumer code.
//!
//! Queues survive consumer detach but not process restart.

pub mod connector;
pub mod error;
pub mod exchange;
pub mod queue;
pub mod retry;

pub use connector::{BrokerConnector, FlakyConnector, InProcessConnector};
pub use error::BrokerError;
pub use exchange::FanoutBroker;
pub use queue::{Consumer, Delivery};
pub use retry::RetryPolicy;
