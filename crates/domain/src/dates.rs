// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day key handling.
//!
//! Every date in the system is a plain calendar day. Using `time::Date`
//! rather than a timestamp means time-of-day normalization is done by the
//! type: there is no hour component to strip before comparing.
//!
//! The wire and storage form is always ISO `YYYY-MM-DD`.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The canonical `YYYY-MM-DD` date-key format.
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO `YYYY-MM-DD` date key.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar day in `YYYY-MM-DD` form.
pub fn parse_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(date_string, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Serde adapter serializing a `Date` as its `YYYY-MM-DD` key.
///
/// Used with `#[serde(with = "iso_date")]` on every persisted or
/// wire-visible date field. Callers that build keys by hand must use the
/// same form or lookups silently miss.
pub mod iso_date {
    use super::DATE_FORMAT;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the date cannot be formatted.
    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted: String = date.format(DATE_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    /// Deserializes a `YYYY-MM-DD` date key.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the string is not a valid date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = String::deserialize(deserializer)?;
        Date::parse(&value, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_parse_valid_date() {
        let date: Date = parse_date("2025-12-09").unwrap();
        assert_eq!(date, Date::from_calendar_date(2025, Month::December, 9).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_parse_rejects_timestamp() {
        // Only day-granularity keys are accepted; callers must truncate first.
        assert!(parse_date("2025-12-09T08:00:00Z").is_err());
    }
}
