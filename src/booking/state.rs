use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::catalog::BillboardListing;
use crate::error::BookingError;
use crate::media::{MediaKind, MediaPreview};
use crate::pricing::PricingQuote;
use crate::schedule;

use super::validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BookingStage {
    SelectMedia,
    ScheduleAndPreview,
    ConfirmAndSubmit,
    Submitting,
    Completed,
}

impl BookingStage {
    /// Which of the three stepper steps this stage belongs to.
    pub fn step_index(&self) -> u8 {
        match self {
            BookingStage::SelectMedia => 0,
            BookingStage::ScheduleAndPreview => 1,
            BookingStage::ConfirmAndSubmit | BookingStage::Submitting | BookingStage::Completed => {
                2
            }
        }
    }
}

/// The four independently pickable schedule fields. A display window exists
/// only once all four are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSelection {
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
}

impl ScheduleSelection {
    /// The combined start/end instants, if every field has been picked.
    pub fn window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.start_date, self.start_time, self.end_date, self.end_time) {
            (Some(start_date), Some(start_time), Some(end_date), Some(end_time)) => Some((
                schedule::combine(start_date, start_time),
                schedule::combine(end_date, end_time),
            )),
            _ => None,
        }
    }
}

/// The uploaded ad asset. Owns the transient preview copy; replacing or
/// dropping the selection deletes that copy.
#[derive(Debug)]
pub struct MediaSelection {
    pub kind: MediaKind,
    pub source_path: PathBuf,
    pub preview: MediaPreview,
}

/// The in-progress booking for one billboard, modeled as a guarded linear
/// state machine. Pure with respect to the outside world: no events, no
/// backend calls, no Tauri types, so every transition is unit-testable.
#[derive(Debug)]
pub struct BookingDraft {
    pub billboard: BillboardListing,
    pub stage: BookingStage,
    pub media: Option<MediaSelection>,
    pub schedule: ScheduleSelection,
    pub quote: Option<PricingQuote>,
    pub error: Option<BookingError>,
    pub reference: Option<String>,
}

impl BookingDraft {
    pub fn new(billboard: BillboardListing, schedule: ScheduleSelection) -> Self {
        let mut draft = Self {
            billboard,
            stage: BookingStage::SelectMedia,
            media: None,
            schedule,
            quote: None,
            error: None,
            reference: None,
        };
        draft.refresh_quote();
        draft
    }

    /// Replace the media selection wholesale. The previous preview copy is
    /// released as the old selection drops.
    pub fn attach_media(&mut self, media: MediaSelection) -> Result<(), BookingError> {
        self.ensure_mutable()?;
        self.media = Some(media);
        self.error = None;
        Ok(())
    }

    pub fn remove_media(&mut self) -> Result<(), BookingError> {
        self.ensure_mutable()?;
        self.media = None;
        Ok(())
    }

    /// Apply new date/time picks and recompute the quote so the next render
    /// never shows a stale total.
    pub fn update_schedule(&mut self, schedule: ScheduleSelection) -> Result<(), BookingError> {
        self.ensure_mutable()?;
        self.schedule = schedule;
        self.refresh_quote();
        Ok(())
    }

    /// Guarded forward transition. Validation failures stay at the current
    /// stage and are recorded for display; guard rejections leave the draft
    /// untouched.
    pub fn advance(&mut self) -> Result<BookingStage, BookingError> {
        let outcome = match self.stage {
            BookingStage::SelectMedia => validate::require_media(self.media.as_ref())
                .map(|_| BookingStage::ScheduleAndPreview),
            BookingStage::ScheduleAndPreview => self.price_schedule(),
            BookingStage::Submitting => Err(BookingError::SubmissionInFlight),
            BookingStage::ConfirmAndSubmit | BookingStage::Completed => {
                Err(BookingError::StageMismatch)
            }
        };

        match outcome {
            Ok(next) => {
                self.stage = next;
                self.error = None;
                Ok(next)
            }
            Err(err) => {
                self.record_rejection(&err);
                Err(err)
            }
        }
    }

    /// Step back without losing anything already entered.
    pub fn retreat(&mut self) -> Result<BookingStage, BookingError> {
        let next = match self.stage {
            BookingStage::ScheduleAndPreview => BookingStage::SelectMedia,
            BookingStage::ConfirmAndSubmit => BookingStage::ScheduleAndPreview,
            BookingStage::Submitting => return Err(BookingError::SubmissionInFlight),
            BookingStage::SelectMedia | BookingStage::Completed => {
                return Err(BookingError::StageMismatch)
            }
        };
        self.stage = next;
        self.error = None;
        Ok(next)
    }

    /// Enter the single outstanding-submission state. Every other mutation
    /// bounces off `SubmissionInFlight` until the result comes back.
    pub fn begin_submission(&mut self) -> Result<(), BookingError> {
        match self.stage {
            BookingStage::ConfirmAndSubmit => {
                self.stage = BookingStage::Submitting;
                self.error = None;
                Ok(())
            }
            BookingStage::Submitting => Err(BookingError::SubmissionInFlight),
            _ => Err(BookingError::StageMismatch),
        }
    }

    pub fn complete_submission(&mut self, reference: String) {
        self.stage = BookingStage::Completed;
        self.reference = Some(reference);
        self.error = None;
    }

    /// Return to the confirm step with the failure on display; the user can
    /// re-submit manually.
    pub fn fail_submission(&mut self, err: BookingError) {
        self.stage = BookingStage::ConfirmAndSubmit;
        self.error = Some(err);
    }

    fn price_schedule(&mut self) -> Result<BookingStage, BookingError> {
        let (start, end) = validate::validate_schedule(&self.schedule)?;
        self.quote = Some(PricingQuote::for_window(
            self.billboard.price_per_minute,
            start,
            end,
        )?);
        Ok(BookingStage::ConfirmAndSubmit)
    }

    fn refresh_quote(&mut self) {
        self.quote = match self.schedule.window() {
            Some((start, end)) => {
                PricingQuote::for_window(self.billboard.price_per_minute, start, end).ok()
            }
            None => None,
        };
    }

    fn ensure_mutable(&self) -> Result<(), BookingError> {
        match self.stage {
            BookingStage::Submitting => Err(BookingError::SubmissionInFlight),
            BookingStage::Completed => Err(BookingError::StageMismatch),
            _ => Ok(()),
        }
    }

    /// Business-rule failures are shown at the current stage; guard
    /// rejections must not disturb the draft at all.
    fn record_rejection(&mut self, err: &BookingError) {
        match err {
            BookingError::MissingMedia
            | BookingError::IncompleteSchedule
            | BookingError::InvalidRange => self.error = Some(err.clone()),
            _ => {}
        }
    }
}

/// What the rendering layer sees. Derived from the draft on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSnapshot {
    pub billboard: BillboardListing,
    pub stage: BookingStage,
    pub step_index: u8,
    pub media_kind: Option<MediaKind>,
    pub media_name: Option<String>,
    pub preview_path: Option<String>,
    pub schedule: ScheduleSelection,
    pub start_label: String,
    pub end_label: String,
    pub quote: Option<PricingQuote>,
    pub error: Option<String>,
    pub reference: Option<String>,
}

impl From<&BookingDraft> for BookingSnapshot {
    fn from(draft: &BookingDraft) -> Self {
        Self {
            billboard: draft.billboard.clone(),
            stage: draft.stage,
            step_index: draft.stage.step_index(),
            media_kind: draft.media.as_ref().map(|media| media.kind),
            media_name: draft.media.as_ref().and_then(|media| {
                media
                    .source_path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            }),
            preview_path: draft
                .media
                .as_ref()
                .map(|media| media.preview.path().to_string_lossy().into_owned()),
            schedule: draft.schedule,
            start_label: window_label(draft.schedule.start_date, draft.schedule.start_time),
            end_label: window_label(draft.schedule.end_date, draft.schedule.end_time),
            quote: draft.quote,
            error: draft.error.as_ref().map(|err| err.to_string()),
            reference: draft.reference.clone(),
        }
    }
}

fn window_label(date: Option<NaiveDate>, time: Option<NaiveTime>) -> String {
    match (date, time) {
        (Some(date), Some(time)) => format!(
            "{} at {}",
            schedule::format_date(Some(date)),
            schedule::format_time(Some(time))
        ),
        _ => schedule::NOT_SELECTED.to_string(),
    }
}
