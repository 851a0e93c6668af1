//! Timetable event records, the serializer's input.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One timetable entry in local wall-clock time.
///
/// Values are carried as given: nothing checks that `start` precedes `end`
/// or that the text fields are free of control characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub department: String,
}

impl EventRecord {
    #[must_use]
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: impl Into<String>,
        summary: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            location: location.into(),
            summary: summary.into(),
            department: department.into(),
        }
    }

    /// The timetable day this record was listed under.
    #[must_use]
    pub fn source_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the summary prefixed with `[department]`, unless the department
    /// is empty or already appears in the summary.
    #[must_use]
    pub fn display_summary(&self) -> String {
        if self.department.is_empty() || self.summary.contains(&self.department) {
            self.summary.clone()
        } else {
            format!("[{}] {}", self.department, self.summary)
        }
    }

    /// Whether the record ends strictly after it starts.
    #[must_use]
    pub fn has_valid_span(&self) -> bool {
        self.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(summary: &str, department: &str) -> EventRecord {
        let day = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        EventRecord::new(
            day.and_hms_opt(8, 30, 0).unwrap(),
            day.and_hms_opt(10, 0, 0).unwrap(),
            "Amphi A",
            summary,
            department,
        )
    }

    #[test]
    fn display_summary_adds_department_prefix() {
        assert_eq!(record("Intro", "L").display_summary(), "[L] Intro");
    }

    #[test]
    fn display_summary_skips_present_department() {
        assert_eq!(record("L - Intro", "L").display_summary(), "L - Intro");
        assert_eq!(record("Cours", "").display_summary(), "Cours");
    }

    #[test]
    fn display_summary_with_empty_summary() {
        assert_eq!(record("", "GCC").display_summary(), "[GCC] ");
    }

    #[test]
    fn source_date_is_start_day() {
        let event = record("Intro", "L");
        assert_eq!(
            event.source_date(),
            NaiveDate::from_ymd_opt(2025, 9, 2).unwrap()
        );
        assert!(event.has_valid_span());
    }

    #[test]
    fn inverted_span_is_reported_not_rejected() {
        let mut event = record("Intro", "L");
        std::mem::swap(&mut event.start, &mut event.end);
        assert!(!event.has_valid_span());
    }

    #[test]
    fn deserializes_with_missing_text_fields() {
        let json = r#"{"start":"2025-09-02T08:30:00","end":"2025-09-02T10:00:00"}"#;
        let event: EventRecord = serde_json::from_str(json).unwrap();
        assert!(event.location.is_empty());
        assert!(event.summary.is_empty());
        assert!(event.department.is_empty());
    }
}
