//! Check-in dates
//!
//! Check-in dates are calendar dates written as `YYYY-MM-DD`. Backends that store them as
//! timestamps send RFC 3339 strings instead; those keep their UTC calendar date.

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Parse a check-in date from either a calendar date or an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns an error when the input is neither.
pub fn parse_check_in_date(raw: &str) -> Result<Date, jiff::Error> {
    if let Ok(date) = raw.parse::<Date>() {
        return Ok(date);
    }

    let timestamp: Timestamp = raw.parse()?;

    Ok(timestamp.to_zoned(TimeZone::UTC).date())
}

/// Serde adapter for check-in dates.
pub mod check_in {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Write the date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(date)
    }

    /// Read a calendar date or an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not a string in either format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        super::parse_check_in_date(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_calendar_date() -> TestResult {
        assert_eq!(parse_check_in_date("2027-03-09")?, date(2027, 3, 9));

        Ok(())
    }

    #[test]
    fn parses_timestamp_as_utc_date() -> TestResult {
        assert_eq!(
            parse_check_in_date("2027-03-09T23:30:00.000Z")?,
            date(2027, 3, 9)
        );

        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_check_in_date("next tuesday").is_err());
    }
}
