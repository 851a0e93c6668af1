//! iCalendar serialization (RFC 5545).
//!
//! - Escape: TEXT and parameter value escaping
//! - Fold: content line folding at 75 octets
//! - Datetime: TZID-qualified local times and UTC stamps
//! - Uid: content-derived event identifiers
//! - Serializer: document assembly

mod datetime;
mod escape;
mod fold;
mod serializer;
mod uid;

pub use datetime::{format_local, format_utc_stamp, format_zoned};
pub use escape::{escape_optional_text, escape_param_value, escape_text};
pub use fold::{LINE_TERMINATOR, MAX_LINE_OCTETS, fold_line};
pub use serializer::{
    CalendarOptions, Clock, DocumentBuilder, FixedClock, SystemClock, serialize,
    serialize_event, serialize_timezone,
};
pub use uid::{HORAIRE_UID_NAMESPACE, event_uid};
