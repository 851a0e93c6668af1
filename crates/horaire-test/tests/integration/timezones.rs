//! Emitted VTIMEZONE rules agree with the tz database.

use chrono::{NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;
use horaire_test::component::ical::TimezoneDefinition;
use horaire_test::component::ical::build::{CalendarOptions, DocumentBuilder, FixedClock};
use horaire_test::component::ical::core::ObservanceKind;

use super::helpers::*;

/// Offset in seconds the tz database reports at local noon on the given day.
fn offset_on(tz: Tz, date: NaiveDate) -> i32 {
    tz.from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
        .single()
        .unwrap()
        .offset()
        .fix()
        .local_minus_utc()
}

#[test_log::test]
fn every_supported_zone_matches_summer_and_winter_offsets() {
    for tzid in TimezoneDefinition::supported() {
        let definition = TimezoneDefinition::for_tzid(tzid).unwrap();
        let tz: Tz = tzid.parse().unwrap();

        let [daylight, standard] = definition.observances();
        assert_eq!(daylight.kind, ObservanceKind::Daylight);
        assert_eq!(standard.kind, ObservanceKind::Standard);

        let summer = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let winter = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(daylight.offset_to.as_seconds(), offset_on(tz, summer), "{tzid}");
        assert_eq!(standard.offset_to.as_seconds(), offset_on(tz, winter), "{tzid}");
    }
}

#[test_log::test]
fn rendered_document_carries_configured_zone() {
    for tzid in ["Europe/Paris", "Europe/London", "Europe/Athens"] {
        let options = CalendarOptions::new("Zones", tzid).unwrap();
        let ics = DocumentBuilder::new(options)
            .unwrap()
            .with_clock(FixedClock(stamp()))
            .render(&[]);

        assert_eq!(values_of(&ics, "TZID"), [tzid]);
        assert_eq!(values_of(&ics, "X-WR-TIMEZONE"), [tzid]);
    }
}

#[test]
fn unsupported_zone_is_rejected() {
    assert!(CalendarOptions::new("Tokyo", "Asia/Tokyo")
        .and_then(DocumentBuilder::new)
        .is_err());
}
