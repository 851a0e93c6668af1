use chrono::{Days, NaiveDate};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// ## Summary
    /// Creates a range covering `start` through `end`, both included.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidInput`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        let range = Self { start, end };
        range.check()?;
        Ok(range)
    }

    pub(crate) fn check(&self) -> CoreResult<()> {
        if self.start > self.end {
            return Err(CoreError::InvalidInput(format!(
                "range start {} is after range end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Iterates every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| day.checked_add_days(Days::new(1)))
            .take_while(move |day| *day <= end)
    }

    /// Number of days covered, zero for an inverted range.
    #[must_use]
    pub fn len_days(&self) -> u64 {
        u64::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_to_{}",
            self.start.format("%d-%m-%Y"),
            self.end.format("%d-%m-%Y")
        )
    }
}
