//! Local calendar-date helpers.
//!
//! Completion dates are plain `YYYY-MM-DD` strings in the user's local time
//! zone. Only calendar dates are compared, so DST transitions never matter.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
///
/// Unpadded forms such as `2024-1-5` are rejected, as are impossible dates
/// like `2023-02-29`.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in the local time zone.
///
/// Only hosts call this; the tracker always receives "today" as an argument.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_dates() {
        let d = parse_date("2024-03-09").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["", "2024-3-9", "2024/03/09", "20240309", "2024-03-09T00:00", "abcd-ef-gh"] {
            assert!(parse_date(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn format_round_trips() {
        let d = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(format_date(d), "1999-12-31");
        assert_eq!(parse_date(&format_date(d)).unwrap(), d);
    }
}
