//! iCalendar document assembly (RFC 5545).
//!
//! Lines are emitted in a fixed order: calendar header, the single VTIMEZONE,
//! one VEVENT per record in input order, then the footer. Every line is folded
//! and terminated with CRLF.

use std::fmt;

use chrono::{DateTime, Utc};
use horaire_core::config::CalendarConfig;
use horaire_core::constants::DEFAULT_PRODID;

use super::datetime::{format_local, format_utc_stamp, format_zoned};
use super::escape::escape_text;
use super::fold::{LINE_TERMINATOR, fold_line};
use super::uid::event_uid;
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{
    CalendarDocument, EventBlock, EventRecord, Observance, TimezoneDefinition,
};

/// Source of the generation timestamp (`DTSTAMP`).
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant; makes output reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Calendar-wide settings passed to the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Display name (`X-WR-CALNAME`).
    pub name: String,
    /// Timezone identifier used for `TZID` and the VTIMEZONE block.
    pub tzid: String,
    /// Product identifier (`PRODID`).
    pub prodid: String,
}

impl CalendarOptions {
    /// ## Summary
    /// Creates options with the default product identifier.
    ///
    /// ## Errors
    /// Returns [`RfcError::Config`] if `tzid` is blank.
    pub fn new(name: impl Into<String>, tzid: impl Into<String>) -> RfcResult<Self> {
        let tzid = tzid.into();
        if tzid.trim().is_empty() {
            return Err(RfcError::Config(
                "timezone identifier must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.into(),
            tzid,
            prodid: DEFAULT_PRODID.to_string(),
        })
    }

    /// ## Summary
    /// Builds options from the `[calendar]` configuration section.
    ///
    /// ## Errors
    /// Returns [`RfcError::Config`] if the configured timezone is blank.
    pub fn from_config(config: &CalendarConfig) -> RfcResult<Self> {
        Ok(Self::new(&config.name, &config.timezone)?.with_prodid(&config.prodid))
    }

    #[must_use]
    pub fn with_prodid(mut self, prodid: impl Into<String>) -> Self {
        self.prodid = prodid.into();
        self
    }
}

/// Turns event records into a [`CalendarDocument`].
#[derive(Debug, Clone)]
pub struct DocumentBuilder<C = SystemClock> {
    options: CalendarOptions,
    timezone: TimezoneDefinition,
    clock: C,
}

impl DocumentBuilder<SystemClock> {
    /// ## Summary
    /// Creates a builder stamping events with the system clock.
    ///
    /// ## Errors
    /// Returns an error if the configured timezone has no static definition
    /// (see [`TimezoneDefinition::for_tzid`]).
    pub fn new(options: CalendarOptions) -> RfcResult<Self> {
        let timezone = TimezoneDefinition::for_tzid(&options.tzid)?;
        Ok(Self {
            options,
            timezone,
            clock: SystemClock,
        })
    }
}

impl<C: Clock> DocumentBuilder<C> {
    /// Replaces the timestamp source.
    #[must_use]
    pub fn with_clock<D: Clock>(self, clock: D) -> DocumentBuilder<D> {
        DocumentBuilder {
            options: self.options,
            timezone: self.timezone,
            clock,
        }
    }

    #[must_use]
    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// Builds the document. Events keep their input order; the clock is read once per event.
    #[must_use]
    pub fn build(&self, events: &[EventRecord]) -> CalendarDocument {
        tracing::debug!(
            events = events.len(),
            tzid = %self.timezone.tzid,
            "Building calendar document"
        );

        CalendarDocument {
            name: self.options.name.clone(),
            prodid: self.options.prodid.clone(),
            timezone: self.timezone.clone(),
            events: events.iter().map(|record| self.event_block(record)).collect(),
        }
    }

    /// Builds and serializes the document in one step.
    #[must_use]
    pub fn render(&self, events: &[EventRecord]) -> String {
        serialize(&self.build(events))
    }

    fn event_block(&self, record: &EventRecord) -> EventBlock {
        if !record.has_valid_span() {
            tracing::warn!(
                start = %record.start,
                end = %record.end,
                summary = %record.summary,
                "Event does not end after it starts; emitting as-is"
            );
        }

        EventBlock {
            uid: event_uid(record),
            dtstamp: self.clock.now(),
            start: record.start,
            end: record.end,
            location: record.location.clone(),
            summary: record.display_summary(),
            description: String::new(),
        }
    }
}

/// Serializes a calendar document to a string.
#[must_use]
pub fn serialize(document: &CalendarDocument) -> String {
    let mut result = String::new();

    push_line(&mut result, "BEGIN:VCALENDAR");
    push_line(&mut result, &format!("PRODID:{}", document.prodid));
    push_line(&mut result, "VERSION:2.0");
    push_line(&mut result, "CALSCALE:GREGORIAN");
    push_line(&mut result, "METHOD:PUBLISH");
    push_text_property(&mut result, "X-WR-CALNAME", &document.name);
    push_text_property(&mut result, "X-WR-TIMEZONE", document.tzid());

    result.push_str(&serialize_timezone(&document.timezone));

    for event in &document.events {
        result.push_str(&serialize_event(event, document.tzid()));
    }

    push_line(&mut result, "END:VCALENDAR");

    result
}

/// Serializes the VTIMEZONE block.
#[must_use]
pub fn serialize_timezone(timezone: &TimezoneDefinition) -> String {
    let mut result = String::new();

    push_line(&mut result, "BEGIN:VTIMEZONE");
    push_text_property(&mut result, "TZID", &timezone.tzid);
    push_text_property(&mut result, "X-LIC-LOCATION", &timezone.tzid);
    for observance in timezone.observances() {
        push_observance(&mut result, observance);
    }
    push_line(&mut result, "END:VTIMEZONE");

    result
}

fn push_observance(result: &mut String, observance: &Observance) {
    let kind = observance.kind.as_str();

    push_line(result, &format!("BEGIN:{kind}"));
    push_line(result, &format!("TZOFFSETFROM:{}", observance.offset_from));
    push_line(result, &format!("TZOFFSETTO:{}", observance.offset_to));
    push_line(result, &format!("TZNAME:{}", observance.name));
    push_line(
        result,
        &format!("DTSTART:{}", format_local(&observance.dtstart)),
    );
    push_line(result, &format!("RRULE:{}", observance.rrule()));
    push_line(result, &format!("END:{kind}"));
}

/// Serializes one VEVENT block whose times are qualified with `tzid`.
#[must_use]
pub fn serialize_event(event: &EventBlock, tzid: &str) -> String {
    let mut result = String::new();

    push_line(&mut result, "BEGIN:VEVENT");
    push_line(&mut result, &format!("UID:{}", event.uid));
    push_line(
        &mut result,
        &format!("DTSTAMP:{}", format_utc_stamp(&event.dtstamp)),
    );
    push_line(
        &mut result,
        &format!("DTSTART{}", format_zoned(&event.start, tzid)),
    );
    push_line(
        &mut result,
        &format!("DTEND{}", format_zoned(&event.end, tzid)),
    );
    if !event.location.is_empty() {
        push_text_property(&mut result, "LOCATION", &event.location);
    }
    push_text_property(&mut result, "SUMMARY", &event.summary);
    push_text_property(&mut result, "DESCRIPTION", &event.description);
    push_line(&mut result, "END:VEVENT");

    result
}

impl fmt::Display for CalendarDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

fn push_text_property(result: &mut String, name: &str, value: &str) {
    push_line(result, &format!("{name}:{}", escape_text(value)));
}

fn push_line(result: &mut String, line: &str) {
    result.push_str(&fold_line(line));
    result.push_str(LINE_TERMINATOR);
}
