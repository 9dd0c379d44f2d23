use chrono::NaiveDateTime;

use crate::error::BookingError;
use crate::schedule;

use super::state::{MediaSelection, ScheduleSelection};

/// Stage-0 rule: an ad asset must have been selected.
pub fn require_media(media: Option<&MediaSelection>) -> Result<(), BookingError> {
    match media {
        Some(_) => Ok(()),
        None => Err(BookingError::MissingMedia),
    }
}

/// Stage-1 rules: all four date/time fields present, and the combined end
/// strictly after the combined start. Returns the combined window so callers
/// price exactly what was validated.
pub fn validate_schedule(
    schedule: &ScheduleSelection,
) -> Result<(NaiveDateTime, NaiveDateTime), BookingError> {
    let (start, end) = schedule
        .window()
        .ok_or(BookingError::IncompleteSchedule)?;

    if !schedule::is_after(Some(end), Some(start)) {
        return Err(BookingError::InvalidRange);
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn selection(
        start_date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        end_date: Option<NaiveDate>,
        end_time: Option<NaiveTime>,
    ) -> ScheduleSelection {
        ScheduleSelection {
            start_date,
            start_time,
            end_date,
            end_time,
        }
    }

    #[test]
    fn missing_media_is_reported() {
        assert_eq!(require_media(None), Err(BookingError::MissingMedia));
    }

    #[test]
    fn any_absent_field_is_incomplete() {
        let cases = [
            selection(None, Some(time(9, 0)), Some(date(2)), Some(time(9, 0))),
            selection(Some(date(1)), None, Some(date(2)), Some(time(9, 0))),
            selection(Some(date(1)), Some(time(9, 0)), None, Some(time(9, 0))),
            selection(Some(date(1)), Some(time(9, 0)), Some(date(2)), None),
            ScheduleSelection::default(),
        ];
        for schedule in cases {
            assert_eq!(
                validate_schedule(&schedule),
                Err(BookingError::IncompleteSchedule)
            );
        }
    }

    #[test]
    fn end_must_be_strictly_after_start() {
        let inverted = selection(
            Some(date(2)),
            Some(time(9, 0)),
            Some(date(1)),
            Some(time(9, 0)),
        );
        assert_eq!(validate_schedule(&inverted), Err(BookingError::InvalidRange));

        let equal = selection(
            Some(date(1)),
            Some(time(9, 0)),
            Some(date(1)),
            Some(time(9, 0)),
        );
        assert_eq!(validate_schedule(&equal), Err(BookingError::InvalidRange));
    }

    #[test]
    fn a_valid_selection_yields_the_combined_window() {
        let schedule = selection(
            Some(date(1)),
            Some(time(10, 0)),
            Some(date(1)),
            Some(time(10, 15)),
        );
        let (start, end) = validate_schedule(&schedule).unwrap();
        assert_eq!(start, date(1).and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(end, date(1).and_hms_opt(10, 15, 0).unwrap());
    }

    #[test]
    fn one_minute_windows_are_valid() {
        let schedule = selection(
            Some(date(1)),
            Some(time(23, 59)),
            Some(date(2)),
            Some(time(0, 0)),
        );
        assert!(validate_schedule(&schedule).is_ok());
    }
}
