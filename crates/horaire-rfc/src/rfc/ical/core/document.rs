//! The calendar document produced from a sequence of event records.

use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

use super::TimezoneDefinition;

/// A complete VCALENDAR with one VTIMEZONE and its events in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDocument {
    /// Display name (`X-WR-CALNAME`).
    pub name: String,
    /// Product identifier (`PRODID`).
    pub prodid: String,
    pub timezone: TimezoneDefinition,
    pub events: Vec<EventBlock>,
}

impl CalendarDocument {
    #[must_use]
    pub fn tzid(&self) -> &str {
        &self.timezone.tzid
    }

    /// Returns the number of VEVENT blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// A single VEVENT, with every value already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock {
    pub uid: Uuid,
    pub dtstamp: DateTime<Utc>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Omitted from the output when empty.
    pub location: String,
    pub summary: String,
    /// Always emitted, even when empty.
    pub description: String,
}
