//! Shared inputs and expected output fragments.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::rfc::ical::core::EventRecord;

/// VTIMEZONE block emitted for Europe/Paris, byte for byte.
pub const PARIS_VTIMEZONE: &str = "\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Paris\r\n\
X-LIC-LOCATION:Europe/Paris\r\n\
BEGIN:DAYLIGHT\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
TZNAME:CEST\r\n\
DTSTART:19700329T020000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r\n\
END:DAYLIGHT\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
TZNAME:CET\r\n\
DTSTART:19701025T030000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n";

/// Calendar header for a document named `ENPC - L` in Europe/Paris.
pub const ENPC_HEADER: &str = "\
BEGIN:VCALENDAR\r\n\
PRODID:-//Horaire//Timetable Export//FR\r\n\
VERSION:2.0\r\n\
CALSCALE:GREGORIAN\r\n\
METHOD:PUBLISH\r\n\
X-WR-CALNAME:ENPC - L\r\n\
X-WR-TIMEZONE:Europe/Paris\r\n";

pub fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 6, 0, 0).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// The introductory lecture of the term.
pub fn intro() -> EventRecord {
    EventRecord::new(
        at(2025, 9, 2, 8, 30),
        at(2025, 9, 2, 10, 0),
        "Amphi A",
        "Intro",
        "L",
    )
}

/// A small week of mixed records, in timetable order.
pub fn week() -> Vec<EventRecord> {
    vec![
        intro(),
        EventRecord::new(
            at(2025, 9, 2, 10, 15),
            at(2025, 9, 2, 12, 15),
            "",
            "Economie publique, TD",
            "L",
        ),
        EventRecord::new(
            at(2025, 9, 3, 14, 0),
            at(2025, 9, 3, 17, 15),
            "B\u{e2}timent Bienven\u{fc}e \u{2013} salle P402",
            "Atelier \u{ab} Politiques d'am\u{e9}nagement durable \u{bb} : s\u{e9}ance d'ouverture et pr\u{e9}sentation des projets",
            "L",
        ),
        EventRecord::new(
            at(2025, 9, 4, 9, 0),
            at(2025, 9, 4, 12, 0),
            "Amphi B",
            "L - S\u{e9}minaire",
            "L",
        ),
    ]
}
