pub mod commands;
pub mod controller;
pub mod state;
pub mod validate;

pub use controller::BookingController;
pub use state::{BookingDraft, BookingSnapshot, BookingStage, MediaSelection, ScheduleSelection};
