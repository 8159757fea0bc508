use crate::input::control::payload::ControlPayload;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Single-writer, single-reader handoff of the most recent payload.
///
/// The whole record is copied in and out under the lock, so a reader always sees
/// one complete publish.
#[derive(Debug, Default)]
pub struct LatestPayloadCell {
    latest: Mutex<ControlPayload>,
    publishes: AtomicU64,
}

impl LatestPayloadCell {
    pub fn publish(&self, payload: ControlPayload) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = payload;
        self.publishes.fetch_add(1, Ordering::Release);
    }

    #[must_use]
    pub fn snapshot(&self) -> ControlPayload {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of payloads published so far.
    #[must_use]
    pub fn publish_count(&self) -> u64 {
        self.publishes.load(Ordering::Acquire)
    }
}
