//! iCalendar core models.
//!
//! Plain data: nothing here knows about folding or escaping. The `build`
//! module turns these into text.

mod document;
mod event;
mod timezone;

pub use document::{CalendarDocument, EventBlock};
pub use event::EventRecord;
pub use timezone::{Observance, ObservanceKind, TimezoneDefinition, UtcOffset};
