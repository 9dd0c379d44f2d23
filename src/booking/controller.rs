use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, Timelike};
use log::{info, warn};
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;

use crate::catalog::CatalogProvider;
use crate::error::BookingError;
use crate::media::{self, PreviewStore};
use crate::schedule;
use crate::settings::ScheduleDefaults;
use crate::submission::BookingBackend;

use super::state::{
    BookingDraft, BookingSnapshot, BookingStage, MediaSelection, ScheduleSelection,
};

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct BookingCompletedEvent {
    reference: String,
    snapshot: BookingSnapshot,
}

/// Drives the booking wizard on behalf of the rendering layer: owns the
/// draft behind a mutex, talks to the injected catalog and backend, and
/// mirrors every state change to the webview as events.
#[derive(Clone)]
pub struct BookingController {
    draft: Arc<Mutex<Option<BookingDraft>>>,
    catalog: Arc<dyn CatalogProvider>,
    backend: Arc<dyn BookingBackend>,
    previews: Arc<PreviewStore>,
    app_handle: AppHandle,
}

impl BookingController {
    pub fn new(
        app_handle: AppHandle,
        catalog: Arc<dyn CatalogProvider>,
        backend: Arc<dyn BookingBackend>,
        previews: Arc<PreviewStore>,
    ) -> Self {
        Self {
            draft: Arc::new(Mutex::new(None)),
            catalog,
            backend,
            previews,
            app_handle,
        }
    }

    /// Start a fresh draft for the given billboard, prefilled from the
    /// schedule defaults. Replaces any abandoned draft (and thereby releases
    /// its preview).
    pub async fn begin(
        &self,
        billboard_id: u32,
        defaults: ScheduleDefaults,
    ) -> Result<BookingSnapshot> {
        let listing = self
            .catalog
            .find(billboard_id)
            .ok_or(BookingError::UnknownBillboard(billboard_id))?;

        let mut guard = self.draft.lock().await;
        if let Some(existing) = guard.as_ref() {
            if existing.stage == BookingStage::Submitting {
                return Err(BookingError::SubmissionInFlight.into());
            }
        }

        info!(
            "Starting booking draft for billboard {} ({})",
            listing.id, listing.location
        );
        let draft = BookingDraft::new(listing, default_schedule(&defaults));
        let snapshot = BookingSnapshot::from(&draft);
        *guard = Some(draft);
        drop(guard);

        self.emit_state(&snapshot);
        Ok(snapshot)
    }

    pub async fn snapshot(&self) -> Result<BookingSnapshot> {
        let guard = self.draft.lock().await;
        let draft = guard.as_ref().ok_or(BookingError::NoActiveDraft)?;
        Ok(BookingSnapshot::from(draft))
    }

    /// Classify and attach a picked file. The preview copy is acquired
    /// before the swap; the previous selection's copy is deleted as it drops.
    pub async fn select_media(&self, source: PathBuf) -> Result<BookingSnapshot> {
        let kind = media::classify(&source)?;

        let snapshot = {
            let mut guard = self.draft.lock().await;
            let draft = guard.as_mut().ok_or(BookingError::NoActiveDraft)?;
            let preview = self.previews.acquire(&source)?;
            draft.attach_media(MediaSelection {
                kind,
                source_path: source,
                preview,
            })?;
            BookingSnapshot::from(&*draft)
        };

        self.emit_state(&snapshot);
        Ok(snapshot)
    }

    pub async fn remove_media(&self) -> Result<BookingSnapshot> {
        let snapshot = {
            let mut guard = self.draft.lock().await;
            let draft = guard.as_mut().ok_or(BookingError::NoActiveDraft)?;
            draft.remove_media()?;
            BookingSnapshot::from(&*draft)
        };

        self.emit_state(&snapshot);
        Ok(snapshot)
    }

    pub async fn update_schedule(&self, schedule: ScheduleSelection) -> Result<BookingSnapshot> {
        let snapshot = {
            let mut guard = self.draft.lock().await;
            let draft = guard.as_mut().ok_or(BookingError::NoActiveDraft)?;
            draft.update_schedule(schedule)?;
            BookingSnapshot::from(&*draft)
        };

        self.emit_state(&snapshot);
        Ok(snapshot)
    }

    /// Guarded forward step. On a validation failure the stage stays put and
    /// the refreshed snapshot (now carrying the message) is still pushed to
    /// the webview.
    pub async fn advance(&self) -> Result<BookingSnapshot> {
        let (outcome, snapshot) = {
            let mut guard = self.draft.lock().await;
            let draft = guard.as_mut().ok_or(BookingError::NoActiveDraft)?;
            let outcome = draft.advance();
            (outcome, BookingSnapshot::from(&*draft))
        };

        self.emit_state(&snapshot);
        match outcome {
            Ok(stage) => {
                info!("Booking advanced to {:?}", stage);
                Ok(snapshot)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn retreat(&self) -> Result<BookingSnapshot> {
        let (outcome, snapshot) = {
            let mut guard = self.draft.lock().await;
            let draft = guard.as_mut().ok_or(BookingError::NoActiveDraft)?;
            let outcome = draft.retreat();
            (outcome, BookingSnapshot::from(&*draft))
        };

        self.emit_state(&snapshot);
        match outcome {
            Ok(stage) => {
                info!("Booking stepped back to {:?}", stage);
                Ok(snapshot)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Hand the validated draft to the backend. The lock is not held across
    /// the await; the `Submitting` stage is what keeps every other mutation
    /// out until the result lands. There is no retry and no cancellation.
    pub async fn submit(&self) -> Result<BookingSnapshot> {
        let request = {
            let mut guard = self.draft.lock().await;
            let draft = guard.as_mut().ok_or(BookingError::NoActiveDraft)?;
            draft.begin_submission()?;
            BookingSnapshot::from(&*draft)
        };
        self.emit_state(&request);
        info!(
            "Submitting booking for billboard {}, total {}",
            request.billboard.id,
            request
                .quote
                .map(|quote| quote.formatted_total())
                .unwrap_or_default()
        );

        let result = self.backend.create(&request).await;

        let mut guard = self.draft.lock().await;
        let draft = guard.as_mut().ok_or(BookingError::NoActiveDraft)?;
        match result {
            Ok(reference) => {
                draft.complete_submission(reference.clone());
                let snapshot = BookingSnapshot::from(&*draft);
                drop(guard);

                info!("Booking confirmed, reference {}", reference);
                self.emit_state(&snapshot);
                self.emit_completed(&snapshot, reference);
                Ok(snapshot)
            }
            Err(err) => {
                warn!("Booking submission failed: {}", err);
                let failure = BookingError::SubmissionFailed(err.to_string());
                draft.fail_submission(failure.clone());
                let snapshot = BookingSnapshot::from(&*draft);
                drop(guard);

                self.emit_state(&snapshot);
                Err(failure.into())
            }
        }
    }

    /// Throw the draft away (navigation away, "book another"). Dropping it
    /// releases the media preview. Rejected while a submission is pending.
    pub async fn discard(&self) -> Result<()> {
        let mut guard = self.draft.lock().await;
        if let Some(draft) = guard.as_ref() {
            if draft.stage == BookingStage::Submitting {
                return Err(BookingError::SubmissionInFlight.into());
            }
        }
        if guard.take().is_some() {
            info!("Booking draft discarded");
        }
        Ok(())
    }

    fn emit_state(&self, snapshot: &BookingSnapshot) {
        let _ = self.app_handle.emit("booking-state-changed", snapshot);
    }

    fn emit_completed(&self, snapshot: &BookingSnapshot, reference: String) {
        let payload = BookingCompletedEvent {
            reference,
            snapshot: snapshot.clone(),
        };
        let _ = self.app_handle.emit("booking-completed", payload);
    }
}

/// Prefill per the listing page defaults: start tomorrow (configurable lead),
/// end a week out, both at the current wall-clock minute. A cosmetic default,
/// not a validation rule.
fn default_schedule(defaults: &ScheduleDefaults) -> ScheduleSelection {
    let now = Local::now();
    let today = now.date_naive();
    let minute = now
        .time()
        .with_second(0)
        .and_then(|time| time.with_nanosecond(0))
        .unwrap_or_else(|| now.time());

    ScheduleSelection {
        start_date: Some(schedule::add_days(today, defaults.lead_days)),
        start_time: Some(minute),
        end_date: Some(schedule::add_days(today, defaults.window_days)),
        end_time: Some(minute),
    }
}
