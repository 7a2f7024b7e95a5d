//! Environment-driven configuration for the appointment service.

use medbook_broker::RetryPolicy;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BookingConfig {
    pub host: String,
    pub port: u16,

    /// Base URL of the doctor service.
    pub doctor_service_url: String,

    /// Broker address handed to the connector.
    pub broker_url: String,

    /// Connection retry budget for the publisher.
    pub publish_retry: RetryPolicy,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            host: "0.0.0.0".to_string(),
            port: 5001,
            // Service-discovery-friendly defaults.
            doctor_service_url: "http://doctor-service:5002".to_string(),
            broker_url: "amqp://rabbitmq:5672".to_string(),
            publish_retry: RetryPolicy::default(),
        }
    }
}

impl BookingConfig {
    /// Defaults overridden by `HOST`, `PORT`, `DOCTOR_SERVICE_URL`,
    /// `BROKER_URL`, `PUBLISH_RETRY_ATTEMPTS` and `PUBLISH_RETRY_DELAY_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PORT")
            && let Ok(port) = port.parse()
        {
            config.port = port;
        }
        if let Ok(url) = std::env::var("DOCTOR_SERVICE_URL") {
            config.doctor_service_url = url;
        }
        if let Ok(url) = std::env::var("BROKER_URL") {
            config.broker_url = url;
        }

        let mut attempts = config.publish_retry.max_attempts;
        let mut delay = config.publish_retry.delay;
        if let Ok(value) = std::env::var("PUBLISH_RETRY_ATTEMPTS")
            && let Ok(value) = value.parse()
        {
            attempts = value;
        }
        if let Ok(value) = std::env::var("PUBLISH_RETRY_DELAY_MS")
            && let Ok(value) = value.parse()
        {
            delay = Duration::from_millis(value);
        }
        config.publish_retry = RetryPolicy::new(attempts, delay);

        config
    }
}
