//! Calendar month key used for budgets and report groups.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month identified by year and month number.
///
/// Ordering is chronological (year first, then month). The month number is
/// not range-checked; callers are expected to supply `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 = January.
    pub month: u32,
}

impl YearMonth {
    /// Creates a new month key.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the month a date falls in.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// English month name, or `None` when the month number is out of range.
    #[must_use]
    pub fn month_name(&self) -> Option<&'static str> {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
