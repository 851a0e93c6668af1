//! Where timetable rows come from.
//!
//! Fetching and scraping timetable pages happens outside this crate; a source
//! only has to hand over the rows it extracted, in timetable order.

mod json;
mod row;

pub use json::JsonSource;
pub use row::{clean_title, decode_entities, normalize, parse_time_range, to_record};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// One row of a timetable table, as extracted from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    /// Day the row was listed under.
    pub date: NaiveDate,
    /// Time cell, e.g. `08:30 - 10:00`.
    pub time: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    /// Text of the title cell; may carry leading non-breaking spaces.
    #[serde(default)]
    pub title: String,
}

/// Supplies timetable rows.
pub trait EventSource {
    /// ## Summary
    /// Returns every available row, in timetable order.
    ///
    /// ## Errors
    /// Returns an error if the rows cannot be read or decoded.
    fn rows(&self) -> AppResult<Vec<TimetableRow>>;
}

impl EventSource for Vec<TimetableRow> {
    fn rows(&self) -> AppResult<Vec<TimetableRow>> {
        Ok(self.clone())
    }
}
