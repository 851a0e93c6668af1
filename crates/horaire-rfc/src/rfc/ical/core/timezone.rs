//! Static VTIMEZONE definitions (RFC 5545 §3.6.5).
//!
//! Each supported zone is described by two hand-authored observances that
//! switch on the last Sunday of March and October. The rules never change at
//! runtime, so every document built for a zone carries a byte-identical block.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{RfcError, RfcResult};

/// UTC offset rendered as `+HHMM` / `-HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    /// Total seconds from UTC (positive = east, negative = west).
    seconds: i32,
}

impl UtcOffset {
    /// Creates an offset from whole hours east of UTC.
    #[must_use]
    pub const fn hours(hours: i32) -> Self {
        Self {
            seconds: hours * 3600,
        }
    }

    /// Returns the offset as total seconds from UTC.
    #[must_use]
    pub const fn as_seconds(self) -> i32 {
        self.seconds
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds >= 0 { '+' } else { '-' };
        let hours = self.seconds.abs() / 3600;
        let minutes = (self.seconds.abs() % 3600) / 60;
        write!(f, "{sign}{hours:02}{minutes:02}")
    }
}

/// STANDARD or DAYLIGHT sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservanceKind {
    Standard,
    Daylight,
}

impl ObservanceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
        }
    }
}

/// One seasonal rule of a timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observance {
    pub kind: ObservanceKind,
    /// Abbreviation shown by clients (`TZNAME`), e.g. `CEST`.
    pub name: &'static str,
    pub offset_from: UtcOffset,
    pub offset_to: UtcOffset,
    /// First onset of the rule, in local time before the transition.
    pub dtstart: NaiveDateTime,
    /// Month of the yearly transition, which falls on its last Sunday.
    pub month: u32,
}

impl Observance {
    /// `RRULE` value for the yearly last-Sunday transition.
    #[must_use]
    pub fn rrule(&self) -> String {
        format!("FREQ=YEARLY;BYMONTH={};BYDAY=-1SU", self.month)
    }
}

/// VTIMEZONE content for a single zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneDefinition {
    pub tzid: String,
    pub daylight: Observance,
    pub standard: Observance,
}

/// Zones sharing the EU transition instants (01:00 UTC), grouped by base offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleFamily {
    WesternEuropean,
    CentralEuropean,
    EasternEuropean,
}

impl RuleFamily {
    const fn base_hours(self) -> i32 {
        match self {
            Self::WesternEuropean => 0,
            Self::CentralEuropean => 1,
            Self::EasternEuropean => 2,
        }
    }
}

struct ZoneEntry {
    tzid: &'static str,
    family: RuleFamily,
    standard_name: &'static str,
    daylight_name: &'static str,
}

const fn zone(
    tzid: &'static str,
    family: RuleFamily,
    standard_name: &'static str,
    daylight_name: &'static str,
) -> ZoneEntry {
    ZoneEntry {
        tzid,
        family,
        standard_name,
        daylight_name,
    }
}

use RuleFamily::{CentralEuropean as Cet, EasternEuropean as Eet, WesternEuropean as Wet};

const ZONES: &[ZoneEntry] = &[
    zone("Europe/Paris", Cet, "CET", "CEST"),
    zone("Europe/Amsterdam", Cet, "CET", "CEST"),
    zone("Europe/Andorra", Cet, "CET", "CEST"),
    zone("Europe/Belgrade", Cet, "CET", "CEST"),
    zone("Europe/Berlin", Cet, "CET", "CEST"),
    zone("Europe/Bratislava", Cet, "CET", "CEST"),
    zone("Europe/Brussels", Cet, "CET", "CEST"),
    zone("Europe/Budapest", Cet, "CET", "CEST"),
    zone("Europe/Copenhagen", Cet, "CET", "CEST"),
    zone("Europe/Gibraltar", Cet, "CET", "CEST"),
    zone("Europe/Ljubljana", Cet, "CET", "CEST"),
    zone("Europe/Luxembourg", Cet, "CET", "CEST"),
    zone("Europe/Madrid", Cet, "CET", "CEST"),
    zone("Europe/Malta", Cet, "CET", "CEST"),
    zone("Europe/Monaco", Cet, "CET", "CEST"),
    zone("Europe/Oslo", Cet, "CET", "CEST"),
    zone("Europe/Prague", Cet, "CET", "CEST"),
    zone("Europe/Rome", Cet, "CET", "CEST"),
    zone("Europe/Stockholm", Cet, "CET", "CEST"),
    zone("Europe/Tirane", Cet, "CET", "CEST"),
    zone("Europe/Vienna", Cet, "CET", "CEST"),
    zone("Europe/Warsaw", Cet, "CET", "CEST"),
    zone("Europe/Zagreb", Cet, "CET", "CEST"),
    zone("Europe/Zurich", Cet, "CET", "CEST"),
    zone("Europe/London", Wet, "GMT", "BST"),
    zone("Europe/Lisbon", Wet, "WET", "WEST"),
    zone("Atlantic/Canary", Wet, "WET", "WEST"),
    zone("Atlantic/Faroe", Wet, "WET", "WEST"),
    zone("Atlantic/Madeira", Wet, "WET", "WEST"),
    zone("Europe/Athens", Eet, "EET", "EEST"),
    zone("Europe/Bucharest", Eet, "EET", "EEST"),
    zone("Europe/Helsinki", Eet, "EET", "EEST"),
    zone("Europe/Riga", Eet, "EET", "EEST"),
    zone("Europe/Sofia", Eet, "EET", "EEST"),
    zone("Europe/Tallinn", Eet, "EET", "EEST"),
    zone("Europe/Vilnius", Eet, "EET", "EEST"),
];

impl TimezoneDefinition {
    /// ## Summary
    /// Looks up the static definition for an IANA timezone identifier.
    ///
    /// ## Errors
    /// - [`RfcError::Config`] if `tzid` is blank
    /// - [`RfcError::UnknownTimezone`] if `tzid` is not an IANA zone name
    /// - [`RfcError::UnsupportedTimezone`] if no static rules exist for the zone
    pub fn for_tzid(tzid: &str) -> RfcResult<Self> {
        if tzid.trim().is_empty() {
            return Err(RfcError::Config(
                "timezone identifier must not be empty".to_string(),
            ));
        }

        tzid.parse::<chrono_tz::Tz>()
            .map_err(|e| RfcError::UnknownTimezone(format!("{tzid} ({e})")))?;

        let entry = ZONES
            .iter()
            .find(|entry| entry.tzid == tzid)
            .ok_or_else(|| RfcError::UnsupportedTimezone(tzid.to_string()))?;

        Ok(Self::from_entry(entry))
    }

    /// Identifiers with a static definition.
    pub fn supported() -> impl Iterator<Item = &'static str> {
        ZONES.iter().map(|entry| entry.tzid)
    }

    fn from_entry(entry: &ZoneEntry) -> Self {
        let base = entry.family.base_hours();
        let standard_offset = UtcOffset::hours(base);
        let daylight_offset = UtcOffset::hours(base + 1);
        // Transitions happen at 01:00 UTC, expressed in the outgoing local time.
        let onset_hour = u32::try_from(base + 1).unwrap_or(1);

        Self {
            tzid: entry.tzid.to_string(),
            daylight: Observance {
                kind: ObservanceKind::Daylight,
                name: entry.daylight_name,
                offset_from: standard_offset,
                offset_to: daylight_offset,
                dtstart: rule_start(3, 29, onset_hour),
                month: 3,
            },
            standard: Observance {
                kind: ObservanceKind::Standard,
                name: entry.standard_name,
                offset_from: daylight_offset,
                offset_to: standard_offset,
                dtstart: rule_start(10, 25, onset_hour + 1),
                month: 10,
            },
        }
    }

    /// Observances in emission order: DAYLIGHT, then STANDARD.
    #[must_use]
    pub fn observances(&self) -> [&Observance; 2] {
        [&self.daylight, &self.standard]
    }
}

/// Onset in 1970, the reference year of the rules (last Sundays: 29 March, 25 October).
fn rule_start(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1970, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}
