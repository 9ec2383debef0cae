//! Event Date Display
//!
//! Event dates are calendar dates with no timezone attached; an
//! unparseable date falls back to the raw text.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Two-part day/month display for an event card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDate {
    pub day: String,
    pub month: String,
}

/// Split an ISO `YYYY-MM-DD` date into day and abbreviated month
pub fn format_event_date(raw: &str) -> EventDate {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => EventDate {
            day: date.day().to_string(),
            month: date.format("%b").to_string().to_uppercase(),
        },
        Err(err) => {
            debug!(raw, %err, "unparseable event date, using raw text");
            EventDate {
                day: raw.to_string(),
                month: String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        let date = format_event_date("2026-03-14");
        assert_eq!(date.day, "14");
        assert_eq!(date.month, "MAR");
    }

    #[test]
    fn test_no_leading_zero_day() {
        assert_eq!(format_event_date("2026-11-05").day, "5");
    }

    #[test]
    fn test_fallback_on_garbage() {
        let date = format_event_date("next week");
        assert_eq!(date.day, "next week");
        assert_eq!(date.month, "");
    }
}
