use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;

/// Derived cost of displaying an ad over a time window. Never user-editable;
/// the wizard recomputes it whenever the window or rate could have changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuote {
    pub rate_per_minute: f64,
    pub duration_minutes: i64,
    pub total: f64,
}

impl PricingQuote {
    /// Price a display window at the given per-minute rate. The window must
    /// be strictly ordered; validation upstream guarantees that for wizard
    /// flows, and any other caller gets `InvalidRange` instead of a zero or
    /// negative quote.
    pub fn for_window(
        rate_per_minute: f64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, BookingError> {
        if end <= start {
            return Err(BookingError::InvalidRange);
        }

        let duration_minutes = ((end - start).num_seconds() as f64 / 60.0).round() as i64;
        let total = round_cents(duration_minutes as f64 * rate_per_minute);

        Ok(Self {
            rate_per_minute,
            duration_minutes,
            total,
        })
    }

    /// Total rendered with exactly two decimal places, e.g. "150.00".
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total)
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
