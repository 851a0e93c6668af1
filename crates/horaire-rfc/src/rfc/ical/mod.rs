//! iCalendar RFC 5545 implementation.
//!
//! - `core`: event records, the calendar document and static timezone definitions
//! - `build`: folding, escaping, identifiers and document assembly
//! - `parse`: the inverse operations (unfold, unescape) used to check output
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use horaire_rfc::rfc::ical::build::{CalendarOptions, DocumentBuilder};
//! use horaire_rfc::rfc::ical::core::EventRecord;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
//! let event = EventRecord::new(
//!     day.and_hms_opt(8, 30, 0).unwrap(),
//!     day.and_hms_opt(10, 0, 0).unwrap(),
//!     "Amphi A",
//!     "Intro",
//!     "L",
//! );
//!
//! let options = CalendarOptions::new("ENPC - L", "Europe/Paris").unwrap();
//! let builder = DocumentBuilder::new(options).unwrap();
//! let ics = builder.render(&[event]);
//! assert!(ics.contains("SUMMARY:[L] Intro\r\n"));
//! ```

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::{CalendarOptions, DocumentBuilder, serialize};
pub use self::core::{CalendarDocument, EventBlock, EventRecord, TimezoneDefinition};
