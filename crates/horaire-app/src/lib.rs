//! Timetable export: read rows, normalize them into event records, write an `.ics` file.

pub mod error;
pub mod export;
pub mod source;
