use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;

use crate::booking::BookingSnapshot;

/// Where validated drafts go. The wizard only ever sees this trait; swapping
/// the mock for a real network client touches nothing else.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    /// Create the booking and return its reference.
    async fn create(&self, draft: &BookingSnapshot) -> Result<String>;
}

/// Stand-in for the yet-to-exist booking service: waits a fixed delay, then
/// acknowledges with a client-generated reference. Never fails.
pub struct MockBookingBackend {
    delay: Duration,
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockBookingBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingBackend for MockBookingBackend {
    async fn create(&self, _draft: &BookingSnapshot) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        let number: u32 = rand::thread_rng().gen_range(0..1_000_000);
        Ok(format!("BB-{number}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingDraft, ScheduleSelection};
    use crate::catalog::{CatalogProvider, StaticCatalog};

    fn snapshot() -> BookingSnapshot {
        let listing = StaticCatalog::seeded().find(1).unwrap();
        BookingSnapshot::from(&BookingDraft::new(listing, ScheduleSelection::default()))
    }

    #[tokio::test]
    async fn mock_backend_acknowledges_with_a_reference() {
        let backend = MockBookingBackend::with_delay(Duration::ZERO);
        let reference = backend.create(&snapshot()).await.unwrap();
        assert!(reference.starts_with("BB-"));
        assert!(reference.len() > 3);
        let digits = &reference[3..];
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
