//! Shared fixtures for integration tests.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use horaire_test::component::config::{
    CalendarConfig, InputConfig, LoggingConfig, OutputConfig, Settings,
};
use horaire_test::component::ical::parse::{split_content_line, split_lines, unescape_text};
use horaire_test::component::types::DateRange;

/// Rows as a scraper would hand them over, including the page's quirks.
pub const TIMETABLE_JSON: &str = r#"[
    {"date": "2025-09-03", "time": "14:00 - 17:15", "department": "L", "location": "Salle B", "title": " Economie publique, TD"},
    {"date": "2025-09-02", "time": "08:30 - 10:00", "department": "L", "location": "Amphi A", "title": "Intro"},
    {"date": "2025-09-02", "time": "10:15 - 12:15", "department": "L", "location": " ", "title": "&nbsp;Atelier"},
    {"date": "2025-09-02", "time": "midi", "department": "L", "location": "", "title": "Repas"},
    {"date": "2025-09-20", "time": "09:00 - 10:00", "department": "L", "location": "", "title": "Hors periode"}
]"#;

#[must_use]
pub fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 6, 0, 0).unwrap()
}

#[must_use]
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
}

#[must_use]
pub fn settings(output: Option<PathBuf>) -> Settings {
    Settings {
        calendar: CalendarConfig {
            name: "ENPC - L".to_string(),
            department: "L".to_string(),
            timezone: "Europe/Paris".to_string(),
            prodid: "-//ENPC Parser//FR//".to_string(),
        },
        range: Some(DateRange::new(day(1), day(7)).unwrap()),
        input: InputConfig {
            path: PathBuf::from("timetable.json"),
        },
        output: OutputConfig { path: output },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

/// Unique scratch directory for one test.
#[must_use]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("horaire-it-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Unescaped values of every logical line with the given property name.
#[must_use]
pub fn values_of(ics: &str, name: &str) -> Vec<String> {
    split_lines(ics)
        .iter()
        .filter_map(|line| split_content_line(line))
        .filter(|(key, _)| key.split(';').next() == Some(name))
        .map(|(_, value)| unescape_text(value))
        .collect()
}
