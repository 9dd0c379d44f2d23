use thiserror::Error;

/// Everything that can go wrong while assembling or submitting a booking.
/// All variants are user-correctable; the wizard surfaces them as messages
/// bound to the current stage and never tears anything down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("upload an image or video for the billboard first")]
    MissingMedia,

    #[error("select start and end dates and times")]
    IncompleteSchedule,

    #[error("end date and time must be after start date and time")]
    InvalidRange,

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("booking submission failed: {0}")]
    SubmissionFailed(String),

    #[error("a booking submission is already in progress")]
    SubmissionInFlight,

    #[error("no billboard with id {0}")]
    UnknownBillboard(u32),

    #[error("no booking in progress")]
    NoActiveDraft,

    #[error("that action is not available at the current step")]
    StageMismatch,
}
