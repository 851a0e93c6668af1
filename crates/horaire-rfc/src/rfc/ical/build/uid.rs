//! Content-derived event identifiers.
//!
//! A UID is a version 5 (SHA-1, name-based) UUID in [`HORAIRE_UID_NAMESPACE`].
//! The name is the concatenation of five length-prefixed fields:
//!
//! ```text
//! <len>:<source date YYYY-MM-DD><len>:<summary><len>:<location><len>:<start><len>:<end>
//! ```
//!
//! where `start` and `end` use the `YYYYMMDDTHHMMSS` local form and lengths are
//! UTF-8 octet counts. The prefixes keep the encoding injective, so two records
//! share a UID only if all five fields are equal. Regenerating a calendar from
//! the same timetable therefore reproduces the same UIDs.

use uuid::Uuid;

use super::datetime::format_local;
use crate::rfc::ical::core::EventRecord;

/// Namespace for event UIDs: the v5 UUID of `urn:horaire:timetable-event` in the URL namespace.
pub const HORAIRE_UID_NAMESPACE: Uuid = Uuid::from_u128(0x078b_9dac_973c_5f88_a21a_ff85_0745_dfee);

/// Derives the stable identifier of an event.
#[must_use]
pub fn event_uid(record: &EventRecord) -> Uuid {
    let source_date = record.source_date().format("%Y-%m-%d").to_string();
    let start = format_local(&record.start);
    let end = format_local(&record.end);

    let fields = [
        source_date.as_str(),
        record.summary.as_str(),
        record.location.as_str(),
        start.as_str(),
        end.as_str(),
    ];

    let mut name = String::with_capacity(fields.iter().map(|f| f.len() + 4).sum());
    for field in fields {
        name.push_str(&field.len().to_string());
        name.push(':');
        name.push_str(field);
    }

    Uuid::new_v5(&HORAIRE_UID_NAMESPACE, name.as_bytes())
}
