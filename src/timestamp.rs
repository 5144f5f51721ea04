use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// `strftime`-style layout of a CDX timestamp.
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
/// A CDX timestamp always has this many ASCII digits.
const TIMESTAMP_LEN: usize = 14;

/// Reasons a CDX timestamp may fail to parse.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TimestampError {
    /// The value is not exactly 14 ASCII digits.
    #[error("expected 14 digits in the form YYYYMMDDhhmmss")]
    Format,
    /// The seconds are 60, which chrono would otherwise accept as a leap second.
    #[error("second out of range")]
    SecondOutOfRange,
    /// The digits do not describe a valid date and time.
    #[error(transparent)]
    OutOfRange(#[from] chrono::ParseError),
}

/// Parse a compact CDX timestamp (`YYYYMMDDhhmmss`, always UTC).
///
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use cdxio::{parse_timestamp, TimestampError};
/// assert_eq!(
///     parse_timestamp("20230731193152"),
///     Ok(Utc.with_ymd_and_hms(2023, 7, 31, 19, 31, 52).unwrap())
/// );
/// assert_eq!(parse_timestamp("2023073119"), Err(TimestampError::Format));
/// ```
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, TimestampError> {
    // chrono accepts single-digit fields when parsing without separators, so the width
    // must be checked up front.
    if s.len() != TIMESTAMP_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::Format);
    }
    if &s[12..] > "59" {
        return Err(TimestampError::SecondOutOfRange);
    }

    let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive))
}
