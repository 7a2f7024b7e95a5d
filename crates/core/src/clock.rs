use crate::Timestamp;

/// Port for time abstraction.
///
/// Production code uses [`SystemClock`]; tests pin `created_at` timestamps
/// with a fixed implementation.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}
