//! RFC 5545 serialization of timetable events.

pub mod error;
pub mod rfc;
