//! DATE-TIME formatting (RFC 5545 §3.3.5).

use chrono::{DateTime, NaiveDateTime, Utc};

use super::escape::escape_param_value;

const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Formats a wall-clock time as `YYYYMMDDTHHMMSS`.
#[must_use]
pub fn format_local(dt: &NaiveDateTime) -> String {
    dt.format(LOCAL_FORMAT).to_string()
}

/// Formats the `;TZID=<zone>:<local time>` fragment that follows a property name.
///
/// No offset arithmetic happens here: the wall-clock value is tagged with the
/// zone and resolved by the reader against the document's VTIMEZONE.
#[must_use]
pub fn format_zoned(dt: &NaiveDateTime, tzid: &str) -> String {
    format!(";TZID={}:{}", escape_param_value(tzid), format_local(dt))
}

/// Formats a UTC instant as `YYYYMMDDTHHMMSSZ`, dropping sub-second precision.
#[must_use]
pub fn format_utc_stamp(dt: &DateTime<Utc>) -> String {
    dt.format(UTC_FORMAT).to_string()
}
