//! REST presentation for the doctor service.
//!
//! This is the reservation gateway boundary: each reserve request issues
//! exactly one ledger call - capacity decisions are single-shot and nothing
//! here retries on the caller's behalf.

mod dto;
mod error;
mod handlers;
mod router;

pub use dto::*;
pub use error::ApiError;
pub use router::{AppState, create_router};
