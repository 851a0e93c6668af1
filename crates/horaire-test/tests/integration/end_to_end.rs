//! JSON rows through normalization, rendering and the written file.

use std::fs;

use horaire_test::component::app::{AppError, JsonSource, export, render_with};
use horaire_test::component::ical::build::{FixedClock, LINE_TERMINATOR, MAX_LINE_OCTETS};

use super::helpers::*;

#[test_log::test]
fn json_rows_become_ordered_events() {
    let rows = JsonSource::from_reader(TIMETABLE_JSON.as_bytes()).unwrap();
    let rendered = render_with(&settings(None), &rows, FixedClock(stamp())).unwrap();

    // The malformed time and the out-of-range row are dropped
    assert_eq!(rendered.events, 3);
    assert_eq!(
        values_of(&rendered.ics, "SUMMARY"),
        ["[L] Intro", "[L] Atelier", "[L] Economie publique, TD"]
    );
    assert_eq!(values_of(&rendered.ics, "LOCATION"), ["Amphi A", "Salle B"]);
    assert_eq!(
        values_of(&rendered.ics, "DTSTAMP"),
        ["20250901T060000Z"; 3]
    );
}

#[test_log::test]
fn written_file_matches_rendered_text() {
    let dir = scratch_dir("written");
    let input = dir.join("timetable.json");
    let output = dir.join("out").join("L.ics");
    fs::write(&input, TIMETABLE_JSON).unwrap();

    let summary = export(&settings(Some(output.clone())), &JsonSource::new(&input)).unwrap();

    assert_eq!(summary.events, 3);
    assert_eq!(summary.path.as_deref(), Some(output.as_path()));

    let bytes = fs::read(&output).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(text.ends_with("END:VCALENDAR\r\n"));
    for line in text.split_terminator(LINE_TERMINATOR) {
        assert!(line.len() + LINE_TERMINATOR.len() <= MAX_LINE_OCTETS);
    }

    assert_eq!(values_of(&text, "X-WR-CALNAME"), ["ENPC - L"]);

    fs::remove_dir_all(&dir).ok();
}

#[test_log::test]
fn default_output_name_uses_department_and_range() {
    let config = settings(None);
    assert_eq!(
        config.output_path().to_string_lossy(),
        "L_01-09-2025_to_07-09-2025.ics"
    );
}

#[test_log::test]
fn empty_period_writes_nothing() {
    let dir = scratch_dir("empty");
    let output = dir.join("L.ics");
    let mut config = settings(Some(output.clone()));
    config.range = Some(
        horaire_test::component::types::DateRange::new(day(10), day(12)).unwrap(),
    );

    let rows = JsonSource::from_reader(TIMETABLE_JSON.as_bytes()).unwrap();
    let summary = export(&config, &rows).unwrap();

    assert_eq!(summary.events, 0);
    assert!(summary.path.is_none());
    assert!(!output.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test_log::test]
fn missing_input_reports_path() {
    let dir = scratch_dir("missing");
    let source = JsonSource::new(dir.join("absent.json"));

    let err = export(&settings(Some(dir.join("x.ics"))), &source).unwrap_err();

    assert!(matches!(err, AppError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));

    fs::remove_dir_all(&dir).ok();
}

#[test_log::test]
fn uids_survive_reexport_with_another_clock() {
    let rows = JsonSource::from_reader(TIMETABLE_JSON.as_bytes()).unwrap();
    let first = render_with(&settings(None), &rows, FixedClock(stamp())).unwrap();
    let later = stamp() + chrono::Duration::days(3);
    let second = render_with(&settings(None), &rows, FixedClock(later)).unwrap();

    assert_eq!(values_of(&first.ics, "UID"), values_of(&second.ics, "UID"));
    assert_ne!(first.ics, second.ics);
}
