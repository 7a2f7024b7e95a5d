use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrokerError {
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    #[error("Unknown queue: {0}")]
    UnknownQueue(String),

    #[error("Broker unreachable: {0}")]
    Unreachable(String),
}

pub type Result<T> = std::result::Result<T, BrokerError>;
