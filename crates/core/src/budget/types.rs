//! Budget data types.

use expense_tracker_shared::YearMonth;
use rust_decimal::Decimal;
use serde::Serialize;

/// A spending ceiling for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Budget {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 = January.
    pub month: u32,
    /// Budgeted amount.
    pub amount: Decimal,
}

impl Budget {
    /// Month this budget applies to.
    #[must_use]
    pub const fn period(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }
}
